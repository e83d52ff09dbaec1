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

//! Log record and call-site location.

use std::fmt;

use jiff::Timestamp;

use crate::Level;

/// Where a message was emitted from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Location<'a> {
    line: u32,
    function: &'a str,
}

impl<'a> Location<'a> {
    /// Create a location from a source line and the enclosing function name.
    pub const fn new(line: u32, function: &'a str) -> Self {
        Self { line, function }
    }

    /// The source line.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The enclosing function.
    pub fn function(&self) -> &'a str {
        self.function
    }
}

/// A message that passed the severity gate, ready for a sink.
#[derive(Clone, Debug)]
pub struct Record<'a> {
    // the observed time
    time: Timestamp,

    level: Level,
    location: Location<'a>,

    // the payload
    args: fmt::Arguments<'a>,
}

impl<'a> Record<'a> {
    /// The time the message was flushed.
    pub fn time(&self) -> Timestamp {
        self.time
    }

    /// The severity the message is attributed to.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The call site.
    pub fn location(&self) -> Location<'a> {
        self.location
    }

    /// The line containing the message.
    pub fn line(&self) -> u32 {
        self.location.line
    }

    /// The function containing the message.
    pub fn function(&self) -> &'a str {
        self.location.function
    }

    /// The message body.
    pub fn args(&self) -> &fmt::Arguments<'a> {
        &self.args
    }
}

/// Builder for [`Record`].
///
/// # Examples
///
/// ```
/// use levelog::Level;
/// use levelog::record::Location;
/// use levelog::record::RecordBuilder;
///
/// let record = RecordBuilder::default()
///     .level(Level::Error)
///     .location(Location::new(10, "run"))
///     .args(format_args!("boom"))
///     .build();
/// assert_eq!(record.function(), "run");
/// ```
#[derive(Debug)]
pub struct RecordBuilder<'a> {
    record: Record<'a>,
}

impl Default for RecordBuilder<'_> {
    fn default() -> Self {
        RecordBuilder {
            record: Record {
                time: Timestamp::now(),
                level: Level::Info,
                location: Location::default(),
                args: format_args!(""),
            },
        }
    }
}

impl<'a> RecordBuilder<'a> {
    /// Set [`time`](Record::time).
    pub fn time(mut self, time: Timestamp) -> Self {
        self.record.time = time;
        self
    }

    /// Set [`level`](Record::level).
    pub fn level(mut self, level: Level) -> Self {
        self.record.level = level;
        self
    }

    /// Set [`location`](Record::location).
    pub fn location(mut self, location: Location<'a>) -> Self {
        self.record.location = location;
        self
    }

    /// Set [`args`](Record::args).
    pub fn args(mut self, args: fmt::Arguments<'a>) -> Self {
        self.record.args = args;
        self
    }

    /// Invoke the builder and return a `Record`.
    pub fn build(self) -> Record<'a> {
        self.record
    }
}
