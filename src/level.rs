// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Severity levels and their display names.

use std::fmt;
use std::str::FromStr;

/// An enum representing the available severity levels, ordered by increasing importance.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default)]
pub enum Level {
    /// The "verbose" level.
    ///
    /// Designates fine-grained diagnostics, usually disabled.
    Verbose = 0,
    /// The "info" level.
    ///
    /// Designates useful information. This is the default.
    #[default]
    Info = 1,
    /// The "warning" level.
    ///
    /// Designates hazardous situations.
    Warning = 2,
    /// The "error" level.
    ///
    /// Designates very serious errors.
    Error = 3,
}

impl Level {
    /// All levels, from the least to the most important.
    pub const ALL: [Level; 4] = [Level::Verbose, Level::Info, Level::Warning, Level::Error];

    /// Return the display name of the `Level`.
    ///
    /// This returns the same string as the `fmt::Display` implementation.
    ///
    /// # Examples
    ///
    /// ```
    /// use levelog::Level;
    ///
    /// assert_eq!(Level::Warning.name(), "WARN");
    /// assert_eq!(Level::Error.name(), "ERR");
    /// ```
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Verbose => "VERB",
            Level::Info => "INFO",
            Level::Warning => "WARN",
            Level::Error => "ERR",
        }
    }

    /// Look up a level from its raw discriminant.
    pub const fn from_repr(raw: u8) -> Option<Level> {
        match raw {
            0 => Some(Level::Verbose),
            1 => Some(Level::Info),
            2 => Some(Level::Warning),
            3 => Some(Level::Error),
            _ => None,
        }
    }

    /// Return the display name of a raw level discriminant.
    ///
    /// Values outside the known set yield an empty name.
    ///
    /// # Examples
    ///
    /// ```
    /// use levelog::Level;
    ///
    /// assert_eq!(Level::name_of(1), "INFO");
    /// assert_eq!(Level::name_of(42), "");
    /// ```
    pub const fn name_of(raw: u8) -> &'static str {
        match Level::from_repr(raw) {
            Some(level) => level.name(),
            None => "",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// The type returned by `from_str` when the string doesn't match any of the levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed level: {:?}", self.input)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Level, Self::Err> {
        for (name, level) in [
            ("verbose", Level::Verbose),
            ("info", Level::Info),
            ("warn", Level::Warning),
            ("warning", Level::Warning),
            ("error", Level::Error),
        ] {
            if s.eq_ignore_ascii_case(name) {
                return Ok(level);
            }
        }

        Err(ParseLevelError {
            input: s.to_owned(),
        })
    }
}
