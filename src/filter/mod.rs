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

//! Filters deciding whether a message at some level is emitted.

use std::fmt;

use crate::Level;

mod threshold;

pub use self::threshold::Threshold;

/// The result of a filter check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterResult {
    /// The message will be processed without further filtering.
    Accept,
    /// The message should not be processed.
    Reject,
    /// No decision could be made, further filtering should occur.
    Neutral,
}

/// A filter that can be applied to messages before they reach a sink.
pub trait Filter: fmt::Debug + Send + Sync + 'static {
    /// Decide about a message attributed to the given level.
    fn enabled(&self, level: Level) -> FilterResult;
}

impl<T: Filter> From<T> for Box<dyn Filter> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

/// A fixed minimum level: rejects anything less important.
impl Filter for Level {
    fn enabled(&self, level: Level) -> FilterResult {
        if level >= *self {
            FilterResult::Neutral
        } else {
            FilterResult::Reject
        }
    }
}
