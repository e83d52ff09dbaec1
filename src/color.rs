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

//! ANSI color escape sequences for colorized console output.
//!
//! # Examples
//!
//! ```
//! use levelog::color;
//!
//! let text = format!("{}alert{}", color::RED, color::end());
//! assert_eq!(text, "\x1b[31malert\x1b[0m");
//! ```

use std::fmt;

/// Escape sequence for a black foreground.
pub const BLACK: &str = "\x1b[30m";
/// Escape sequence for a red foreground.
pub const RED: &str = "\x1b[31m";
/// Escape sequence for a green foreground.
pub const GREEN: &str = "\x1b[32m";
/// Escape sequence for a yellow foreground.
pub const YELLOW: &str = "\x1b[33m";
/// Escape sequence for a blue foreground.
pub const BLUE: &str = "\x1b[34m";
/// Escape sequence for a violet (magenta) foreground.
pub const VIOLET: &str = "\x1b[35m";
/// Escape sequence for a sky blue (cyan) foreground.
pub const SKY_BLUE: &str = "\x1b[36m";
/// Escape sequence for a white foreground.
pub const WHITE: &str = "\x1b[37m";
/// Escape sequence resetting all attributes.
pub const RESET: &str = "\x1b[0m";

/// The sequence to append after colored text.
pub const fn end() -> &'static str {
    RESET
}

/// The eight standard foreground colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Violet,
    SkyBlue,
    White,
}

impl Color {
    /// The escape sequence switching the foreground to this color.
    pub const fn escape(&self) -> &'static str {
        match self {
            Color::Black => BLACK,
            Color::Red => RED,
            Color::Green => GREEN,
            Color::Yellow => YELLOW,
            Color::Blue => BLUE,
            Color::Violet => VIOLET,
            Color::SkyBlue => SKY_BLUE,
            Color::White => WHITE,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.escape())
    }
}
