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

use std::fmt::Write;

use jiff::tz::TimeZone;

use crate::Error;
use crate::layout::Layout;
use crate::record::Record;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A layout that formats log record as a single text line.
///
/// Output format:
///
/// ```text
/// VERB | 2024-03-11 10:22:05 - [   40] do_work | resolving peer
/// INFO | 2024-03-11 10:22:05 - [   42] do_work | connection established
/// WARN | 2024-03-11 10:22:06 - [   57] do_work | retrying handshake
/// ERR  | 2024-03-11 10:22:07 - [   61] do_work | handshake failed
/// ```
///
/// The level name is left-aligned in a 4-wide field, the line number right-aligned in a 5-wide
/// field. Timestamps use the system time zone unless one is [configured](TextLayout::timezone).
///
/// # Examples
///
/// ```
/// use levelog::layout::TextLayout;
///
/// let text_layout = TextLayout::default();
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextLayout {
    tz: Option<TimeZone>,
}

impl TextLayout {
    /// Render timestamps in the given time zone.
    ///
    /// # Examples
    ///
    /// ```
    /// use jiff::tz::TimeZone;
    /// use levelog::layout::TextLayout;
    ///
    /// let layout = TextLayout::default().timezone(TimeZone::UTC);
    /// ```
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.tz = Some(tz);
        self
    }
}

impl Layout for TextLayout {
    fn format(&self, record: &Record) -> Result<Vec<u8>, Error> {
        let time = match &self.tz {
            Some(tz) => record.time().to_zoned(tz.clone()),
            None => record.time().to_zoned(TimeZone::system()),
        };

        let mut text = String::new();
        write!(
            &mut text,
            "{level:<4.4} | {time} - [{line:>5}] {function} | {message}",
            level = record.level().name(),
            time = time.strftime(DATETIME_FORMAT),
            line = record.line(),
            function = record.function(),
            message = record.args(),
        )
        .map_err(Error::from_fmt_error)?;

        Ok(text.into_bytes())
    }
}
