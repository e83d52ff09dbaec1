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

//! Levelog is a leveled logging facility writing one formatted line per message to standard
//! error.
//!
//! # Overview
//!
//! Messages carry one of four ordered [`Level`]s. A logger keeps a threshold and drops anything
//! less important; accepted messages are rendered as
//!
//! ```text
//! INFO | 2024-03-11 10:22:05 - [   42] do_work | connection established
//! ```
//!
//! Messages are built either with the formatting macros, which take an explicit level, or with a
//! chainable [`Stream`] returned by the facade functions. Streams opened by the leveled functions
//! record their level as *pending*; the stream's flush consumes it. Color streams leave the
//! pending level alone, and with the `bridge-log` feature bare `log` crate macros are routed in the
//! same way, so both are attributed to [`Level::Info`] unless a leveled function was just called.
//!
//! # Examples
//!
//! Logging through the process-wide instance:
//!
//! ```
//! use levelog::Level;
//!
//! levelog::set_threshold(Level::Verbose);
//!
//! levelog::info!("listening on {}", 8080);
//! levelog::warning().put("disk usage at").put(91).put('%');
//! levelog::red().put("alert").put(levelog::end());
//! ```
//!
//! Configuring a dedicated logger:
//!
//! ```
//! use jiff::tz::TimeZone;
//! use levelog::Level;
//! use levelog::append;
//! use levelog::layout::TextLayout;
//!
//! let logger = levelog::builder()
//!     .threshold(Level::Warning)
//!     .append(append::Stderr::default().with_layout(TextLayout::default().timezone(TimeZone::UTC)))
//!     .build();
//!
//! levelog::error!(logger: &logger, "failed to open {}", "config.toml");
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;
pub mod color;
pub mod filter;
pub mod layout;
pub mod record;
pub mod trap;

mod error;
mod level;
mod logger;
mod macros;
mod stream;

pub use self::append::Append;
pub use self::error::Error;
pub use self::filter::Filter;
pub use self::layout::Layout;
pub use self::level::Level;
pub use self::level::ParseLevelError;
pub use self::logger::*;
pub use self::stream::Stream;
pub use self::trap::Trap;

#[doc(hidden)]
pub mod __private {
    pub use crate::macros::short_function_name;
}

/// Open a [`Level::Verbose`] stream on the process-wide logger.
#[track_caller]
pub fn verbose() -> Stream<'static> {
    Logger::instance().verbose()
}

/// Open a [`Level::Info`] stream on the process-wide logger.
#[track_caller]
pub fn info() -> Stream<'static> {
    Logger::instance().info()
}

/// Open a [`Level::Warning`] stream on the process-wide logger.
#[track_caller]
pub fn warning() -> Stream<'static> {
    Logger::instance().warning()
}

/// Open a [`Level::Error`] stream on the process-wide logger.
#[track_caller]
pub fn error() -> Stream<'static> {
    Logger::instance().error()
}

/// Open a black stream on the process-wide logger.
#[track_caller]
pub fn black() -> Stream<'static> {
    Logger::instance().black()
}

/// Open a red stream on the process-wide logger.
#[track_caller]
pub fn red() -> Stream<'static> {
    Logger::instance().red()
}

/// Open a green stream on the process-wide logger.
#[track_caller]
pub fn green() -> Stream<'static> {
    Logger::instance().green()
}

/// Open a yellow stream on the process-wide logger.
#[track_caller]
pub fn yellow() -> Stream<'static> {
    Logger::instance().yellow()
}

/// Open a blue stream on the process-wide logger.
#[track_caller]
pub fn blue() -> Stream<'static> {
    Logger::instance().blue()
}

/// Open a violet stream on the process-wide logger.
#[track_caller]
pub fn violet() -> Stream<'static> {
    Logger::instance().violet()
}

/// Open a sky blue stream on the process-wide logger.
#[track_caller]
pub fn sky_blue() -> Stream<'static> {
    Logger::instance().sky_blue()
}

/// Open a white stream on the process-wide logger.
#[track_caller]
pub fn white() -> Stream<'static> {
    Logger::instance().white()
}

/// The escape sequence that resets colors.
pub const fn end() -> &'static str {
    color::end()
}

/// Replace the threshold of the process-wide logger.
pub fn set_threshold(level: Level) {
    Logger::instance().set_threshold(level);
}

/// Replace the threshold of the process-wide logger with a level parsed from its name.
///
/// See [`Logger::set_threshold_by_name`].
pub fn set_threshold_by_name(name: &str) -> Result<Level, ParseLevelError> {
    Logger::instance().set_threshold_by_name(name)
}

/// The threshold of the process-wide logger.
pub fn threshold() -> Level {
    Logger::instance().threshold()
}

/// Whether the process-wide logger emits [`Level::Verbose`] messages.
pub fn is_verbose_enabled() -> bool {
    Logger::instance().is_verbose_enabled()
}

/// Whether the process-wide logger emits [`Level::Info`] messages.
pub fn is_info_enabled() -> bool {
    Logger::instance().is_info_enabled()
}

/// Whether the process-wide logger emits [`Level::Warning`] messages.
pub fn is_warning_enabled() -> bool {
    Logger::instance().is_warning_enabled()
}

/// Whether the process-wide logger emits [`Level::Error`] messages.
pub fn is_error_enabled() -> bool {
    Logger::instance().is_error_enabled()
}
