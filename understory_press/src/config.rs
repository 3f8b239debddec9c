// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration.

use crate::easing::Easing;

/// Default press and release animation duration, in milliseconds.
pub const DEFAULT_DURATION: u64 = 100;

/// Default scale factor while pressed.
pub const DEFAULT_SCALE: f64 = 0.9;

/// Default debounce window, in milliseconds.
pub const DEFAULT_DEBOUNCE_WINDOW: u64 = 1000;

/// Configuration supplied once when building a [`PressController`](crate::controller::PressController).
///
/// ## Defaults
///
/// | field | default |
/// |---|---|
/// | `duration` | [`DEFAULT_DURATION`] |
/// | `scale` | [`DEFAULT_SCALE`] |
/// | `debounce_enabled` | `true` |
/// | `debounce_window` | [`DEFAULT_DEBOUNCE_WINDOW`] |
/// | `press_easing` | [`Easing::AccelerateIn`] |
/// | `release_easing` | [`Easing::FastOutSlowIn`] |
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PressConfig {
    /// Duration of each of the press and release animations, in milliseconds.
    /// Also the minimum time between press start and release start.
    pub duration: u64,
    /// Scale factor applied to both axes while pressed. Must be in `(0, 1]`.
    pub scale: f64,
    /// Whether the debounce gate suppresses rapid repeat clicks.
    pub debounce_enabled: bool,
    /// Minimum time between two delivered clicks, in milliseconds.
    pub debounce_window: u64,
    /// Easing of the shrink animation.
    pub press_easing: Easing,
    /// Easing of the restore animation.
    pub release_easing: Easing,
}

impl Default for PressConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            scale: DEFAULT_SCALE,
            debounce_enabled: true,
            debounce_window: DEFAULT_DEBOUNCE_WINDOW,
            press_easing: Easing::AccelerateIn,
            release_easing: Easing::FastOutSlowIn,
        }
    }
}

impl PressConfig {
    /// Set the animation duration.
    #[must_use]
    pub fn with_duration(mut self, duration: u64) -> Self {
        self.duration = duration;
        self
    }

    /// Set the pressed scale factor.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Enable debouncing with the given window.
    #[must_use]
    pub fn with_debounce(mut self, window: u64) -> Self {
        self.debounce_enabled = true;
        self.debounce_window = window;
        self
    }

    /// Deliver every qualifying click.
    #[must_use]
    pub fn without_debounce(mut self) -> Self {
        self.debounce_enabled = false;
        self
    }

    /// Set press and release easings.
    #[must_use]
    pub fn with_easing(mut self, press: Easing, release: Easing) -> Self {
        self.press_easing = press;
        self.release_easing = release;
        self
    }

    /// Check the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // NaN fails both comparisons.
        if !(self.scale > 0.0 && self.scale <= 1.0) {
            return Err(ConfigError::ScaleOutOfRange(self.scale));
        }
        Ok(())
    }
}

/// Rejected configuration.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The pressed scale factor is not in `(0, 1]`.
    #[error("pressed scale {0} is outside (0, 1]")]
    ScaleOutOfRange(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let c = PressConfig::default();
        assert_eq!(c.duration, 100);
        assert_eq!(c.scale, 0.9);
        assert!(c.debounce_enabled);
        assert_eq!(c.debounce_window, 1000);
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn builder_overrides() {
        let c = PressConfig::default()
            .with_duration(250)
            .with_scale(0.5)
            .without_debounce();
        assert_eq!(c.duration, 250);
        assert_eq!(c.scale, 0.5);
        assert!(!c.debounce_enabled);

        let c = c.with_debounce(300);
        assert!(c.debounce_enabled);
        assert_eq!(c.debounce_window, 300);
    }

    #[test]
    fn scale_bounds() {
        assert!(PressConfig::default().with_scale(1.0).validate().is_ok());
        assert_eq!(
            PressConfig::default().with_scale(0.0).validate(),
            Err(ConfigError::ScaleOutOfRange(0.0))
        );
        assert!(PressConfig::default().with_scale(1.5).validate().is_err());
        assert!(PressConfig::default().with_scale(-0.1).validate().is_err());
        assert!(PressConfig::default().with_scale(f64::NAN).validate().is_err());
    }

    #[test]
    fn error_message_names_the_value() {
        use alloc::string::ToString;
        let msg = ConfigError::ScaleOutOfRange(2.0).to_string();
        assert_eq!(msg, "pressed scale 2 is outside (0, 1]");
    }
}
