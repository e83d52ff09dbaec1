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

//! The chainable print-stream returned by the facade methods.

use std::fmt;
use std::panic;

use crate::Logger;
use crate::record::Location;

/// A message under construction.
///
/// Fragments are appended with [`put`](Stream::put) (space separated) or through
/// [`fmt::Write`] (verbatim). The message is handed to the logger exactly once: on
/// [`flush`](Stream::flush), or when the stream is dropped.
///
/// Whether the message is emitted is decided at that point, so fragments are always formatted.
/// Guard expensive arguments with [`Logger::is_enabled`] or use the formatting macros.
///
/// # Examples
///
/// ```
/// let logger = levelog::builder().build();
/// logger.info().put("connected to").put("db-1").put(42);
/// // flushed on drop: "connected to db-1 42"
/// ```
pub struct Stream<'a> {
    logger: &'a Logger,
    line: u32,
    function: &'static str,
    buffer: String,
    separate: bool,
    flushed: bool,
}

impl fmt::Debug for Stream<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("line", &self.line)
            .field("function", &self.function)
            .field("buffer", &self.buffer)
            .finish_non_exhaustive()
    }
}

impl<'a> Stream<'a> {
    /// Create a stream located at the caller of a `#[track_caller]` facade method.
    ///
    /// Rust does not expose the enclosing function to `#[track_caller]`, so the source file
    /// stands in for it; the facade macros fill in the real function name.
    pub(crate) fn caller(logger: &'a Logger, caller: &'static panic::Location<'static>) -> Self {
        Self::at(logger, caller.line(), caller.file())
    }

    #[doc(hidden)]
    pub fn at(logger: &'a Logger, line: u32, function: &'static str) -> Self {
        Self {
            logger,
            line,
            function,
            buffer: String::new(),
            separate: false,
            flushed: false,
        }
    }

    pub(crate) fn seeded(mut self, prefix: &str) -> Self {
        self.buffer.push_str(prefix);
        self
    }

    /// Override the function name reported for this message.
    pub fn function(mut self, function: &'static str) -> Self {
        self.function = function;
        self
    }

    /// Append a fragment, separated from the previous one by a space.
    pub fn put(mut self, fragment: impl fmt::Display) -> Self {
        use fmt::Write;

        if self.separate {
            self.buffer.push(' ');
        }
        // SAFETY: write to a string always succeeds
        write!(&mut self.buffer, "{fragment}").unwrap();
        self.separate = true;
        self
    }

    /// The text accumulated so far.
    pub fn message(&self) -> &str {
        &self.buffer
    }

    /// Hand the message to the logger now instead of on drop.
    pub fn flush(mut self) {
        self.emit();
    }

    fn emit(&mut self) {
        if self.flushed {
            return;
        }
        self.flushed = true;

        let message = std::mem::take(&mut self.buffer);
        let location = Location::new(self.line, self.function);
        self.logger.handle(location, format_args!("{message}"));
    }
}

impl fmt::Write for Stream<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer.push_str(s);
        self.separate = true;
        Ok(())
    }
}

impl Drop for Stream<'_> {
    fn drop(&mut self) {
        self.emit();
    }
}
