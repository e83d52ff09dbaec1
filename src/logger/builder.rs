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

use std::ffi::OsStr;

use crate::Append;
use crate::Filter;
use crate::Level;
use crate::Logger;
use crate::Trap;
use crate::append;
use crate::filter::Threshold;
use crate::logger::log_impl::install;
use crate::trap::DefaultTrap;

/// The environment variable the default instance reads its threshold from.
pub const DEFAULT_LEVEL_ENV: &str = "LEVELOG_LEVEL";

/// Create a new [`LoggerBuilder`] instance with the defaults: [`Level::Info`] threshold,
/// [`Stderr`](append::Stderr) sink, [`DefaultTrap`].
///
/// # Examples
///
/// ```
/// use levelog::Level;
/// use levelog::append;
///
/// let logger = levelog::builder()
///     .threshold(Level::Verbose)
///     .append(append::Stderr::default())
///     .build();
/// ```
pub fn builder() -> LoggerBuilder {
    LoggerBuilder {
        threshold: Level::Info,
        filters: vec![],
        append: None,
        trap: None,
    }
}

/// A builder for configuring a [`Logger`] and optionally installing it as the process-wide
/// instance.
#[must_use = "call `apply` to set the process-wide logger or `build` to construct a logger instance"]
#[derive(Debug)]
pub struct LoggerBuilder {
    threshold: Level,
    filters: Vec<Box<dyn Filter>>,
    append: Option<Box<dyn Append>>,
    trap: Option<Box<dyn Trap>>,
}

impl LoggerBuilder {
    /// Set the initial threshold.
    pub fn threshold(mut self, level: Level) -> Self {
        self.threshold = level;
        self
    }

    /// Set the initial threshold from the named environment variable.
    ///
    /// Unset variables and unrecognized level names leave the threshold unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// let logger = levelog::builder().threshold_from_env("MY_APP_LOG").build();
    /// ```
    pub fn threshold_from_env(mut self, name: impl AsRef<OsStr>) -> Self {
        if let Some(level) = std::env::var(name.as_ref())
            .ok()
            .and_then(|value| value.trim().parse().ok())
        {
            self.threshold = level;
        }
        self
    }

    /// Add a filter consulted after the threshold.
    ///
    /// # Examples
    ///
    /// ```
    /// use levelog::Level;
    ///
    /// // the threshold can be lowered at runtime, but never below warnings
    /// let logger = levelog::builder().filter(Level::Warning).build();
    /// ```
    pub fn filter(mut self, filter: impl Into<Box<dyn Filter>>) -> Self {
        self.filters.push(filter.into());
        self
    }

    /// Set the sink, replacing any previous one.
    pub fn append(mut self, append: impl Into<Box<dyn Append>>) -> Self {
        self.append = Some(append.into());
        self
    }

    /// Set the trap that receives sink errors.
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = Some(trap.into());
        self
    }

    /// Build the [`Logger`].
    pub fn build(self) -> Logger {
        Logger::new(
            Threshold::new(self.threshold),
            self.filters,
            self.append.unwrap_or_else(|| Box::new(append::Stderr::default())),
            self.trap.unwrap_or_else(|| Box::new(DefaultTrap::default())),
        )
    }

    /// Set up the process-wide logger returned by [`Logger::instance`].
    ///
    /// This should be called early in the execution of a Rust program, before anything touches
    /// the instance.
    ///
    /// # Errors
    ///
    /// Return the built logger back if the process-wide logger has already been set.
    ///
    /// # Examples
    ///
    /// ```
    /// if levelog::builder().try_apply().is_err() {
    ///     eprintln!("logger already set");
    /// }
    /// ```
    pub fn try_apply(self) -> Result<&'static Logger, Logger> {
        match install(self.build()) {
            (_, Some(rejected)) => Err(rejected),
            (installed, None) => Ok(installed),
        }
    }

    /// Set up the process-wide logger returned by [`Logger::instance`].
    ///
    /// # Panics
    ///
    /// Panic if the process-wide logger has already been set.
    ///
    /// # Examples
    ///
    /// ```
    /// levelog::builder().apply();
    /// ```
    pub fn apply(self) -> &'static Logger {
        self.try_apply()
            .expect("LoggerBuilder::apply must be called before the process-wide logger initialized")
    }
}
