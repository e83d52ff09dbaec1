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

use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use crate::Level;
use crate::ParseLevelError;
use crate::filter::Filter;
use crate::filter::FilterResult;

/// The severity gate of a logger.
///
/// It holds two levels behind a single lock:
///
/// * the threshold, the minimum level a message needs to be emitted;
/// * the pending level, the level the next message flushed without an explicit level is
///   attributed to. It is consumed, and reset to [`Level::Info`], on every flush.
///
/// Both start at [`Level::Info`].
#[derive(Debug)]
pub struct Threshold {
    state: Mutex<State>,
}

#[derive(Debug, Clone, Copy)]
struct State {
    threshold: Level,
    pending: Level,
}

impl Default for Threshold {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

impl Threshold {
    /// Create a gate with the given threshold and an [`Level::Info`] pending level.
    pub fn new(threshold: Level) -> Self {
        Self {
            state: Mutex::new(State {
                threshold,
                pending: Level::Info,
            }),
        }
    }

    // the state is two plain levels, so a poisoned lock still guards consistent data
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The current threshold.
    pub fn threshold(&self) -> Level {
        self.lock().threshold
    }

    /// Replace the threshold.
    pub fn set_threshold(&self, level: Level) {
        self.lock().threshold = level;
    }

    /// Replace the threshold with a level parsed from its name.
    ///
    /// Names are matched case-insensitively. On error the threshold is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use levelog::Level;
    /// use levelog::filter::Threshold;
    ///
    /// let gate = Threshold::default();
    /// assert_eq!(gate.set_threshold_by_name("WARN"), Ok(Level::Warning));
    /// assert!(gate.set_threshold_by_name("bogus").is_err());
    /// assert_eq!(gate.threshold(), Level::Warning);
    /// ```
    pub fn set_threshold_by_name(&self, name: &str) -> Result<Level, ParseLevelError> {
        let level = name.parse()?;
        self.set_threshold(level);
        Ok(level)
    }

    /// Whether a message at `level` passes the threshold.
    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.threshold()
    }

    /// The level the next implicitly-leveled message is attributed to.
    pub fn pending(&self) -> Level {
        self.lock().pending
    }

    /// Replace the pending level.
    pub fn set_pending(&self, level: Level) {
        self.lock().pending = level;
    }

    /// Consume the pending level, resetting it to [`Level::Info`].
    pub fn take_pending(&self) -> Level {
        let mut state = self.lock();
        std::mem::replace(&mut state.pending, Level::Info)
    }
}

impl Filter for Threshold {
    fn enabled(&self, level: Level) -> FilterResult {
        if self.is_enabled(level) {
            FilterResult::Neutral
        } else {
            FilterResult::Reject
        }
    }
}
