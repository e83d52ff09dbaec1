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

//! Route the `log` crate's macros into the [`Logger`].
//!
//! A bare `log::info!` (or any other `log` macro) plays the part of an unqualified debug print:
//! its own level is ignored and the message is attributed to the logger's pending level, which is
//! [`Level::Info`](crate::Level::Info) unless a leveled facade method was just called.

use crate::Logger;
use crate::record::Location;

pub(super) fn install(logger: &'static Logger) {
    // another logger may own the `log` facade already; it keeps it
    if log::set_logger(logger).is_ok() {
        log::set_max_level(log::LevelFilter::Trace);
    }
}

impl log::Log for Logger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        self.is_enabled(self.pending_level())
    }

    fn log(&self, record: &log::Record) {
        let function = record.module_path().unwrap_or_else(|| record.target());
        let location = Location::new(record.line().unwrap_or_default(), function);
        self.handle(location, *record.args());
    }

    fn flush(&self) {
        Logger::flush(self);
    }
}
