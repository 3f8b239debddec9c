// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debounce gate for click delivery.
//!
//! ```
//! use understory_press::debounce::DebounceGate;
//!
//! let mut gate = DebounceGate::new(Some(1000));
//! assert!(gate.should_fire(0));
//! assert!(!gate.should_fire(500));
//! assert!(gate.should_fire(1000));
//! ```

/// Suppresses clicks that arrive within a cool-down window of the last delivered one.
///
/// The gate is stateful: a `true` from [`DebounceGate::should_fire`] records
/// that time as the last delivered click, so consult it exactly once per
/// click you are about to deliver.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DebounceGate {
    window: Option<u64>,
    last_fire: Option<u64>,
}

impl DebounceGate {
    /// Create a gate. `None` disables debouncing.
    pub const fn new(window: Option<u64>) -> Self {
        Self {
            window,
            last_fire: None,
        }
    }

    /// A gate that always fires.
    pub const fn disabled() -> Self {
        Self::new(None)
    }

    /// Configured window, if debouncing is enabled.
    pub const fn window(&self) -> Option<u64> {
        self.window
    }

    /// Time of the last click let through.
    pub const fn last_fire(&self) -> Option<u64> {
        self.last_fire
    }

    /// Decide whether a click at `now` may be delivered, and record it if so.
    ///
    /// The first click always fires. A clock that runs backwards reads as
    /// zero elapsed time.
    pub fn should_fire(&mut self, now: u64) -> bool {
        let Some(window) = self.window else {
            return true;
        };
        if let Some(last) = self.last_fire
            && now.saturating_sub(last) < window
        {
            return false;
        }
        self.last_fire = Some(now);
        true
    }

    /// Forget the last delivered click.
    pub fn reset(&mut self) {
        self.last_fire = None;
    }
}
