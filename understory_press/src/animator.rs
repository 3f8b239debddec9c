// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press and release scale animations.
//!
//! ## Overview
//!
//! [`ScaleAnimator`] owns an [`AnimationEngine`] and two composite animations,
//! built on first use and reused for the animator's lifetime:
//!
//! - press: both scale axes toward the configured factor, with the press easing;
//! - release: both scale axes back to `1.0`, with the release easing.
//!
//! ## Minimum visible cycle
//!
//! A release that follows the press by less than the configured duration is
//! delayed by the remainder, so even a very quick tap shows the full shrink
//! before the restore. Because the press started no later than the last touch,
//! it always ends by the time a delayed release begins. The press animations
//! are registered before the release ones, so on the tick where both touch
//! the scale the release starts from the fully pressed value (see
//! [`AnimationEngine::advance`]).

use crate::config::PressConfig;
use crate::easing::Easing;
use crate::engine::{AnimationEngine, AnimationTarget};
use crate::types::Property;

#[derive(Copy, Clone, Debug)]
struct AnimationPair<H> {
    press: H,
    release: H,
}

/// Drives the press/release scale animations on an engine.
#[derive(Debug)]
pub struct ScaleAnimator<E: AnimationEngine> {
    engine: E,
    pair: Option<AnimationPair<E::Handle>>,
    duration: u64,
    scale: f64,
    press_easing: Easing,
    release_easing: Easing,
}

impl<E: AnimationEngine> ScaleAnimator<E> {
    /// Create an animator for `config` on top of `engine`.
    pub fn new(engine: E, config: &PressConfig) -> Self {
        Self {
            engine,
            pair: None,
            duration: config.duration,
            scale: config.scale,
            press_easing: config.press_easing,
            release_easing: config.release_easing,
        }
    }

    /// Underlying engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Handles of the press and release composites, once they exist.
    pub fn handles(&self) -> Option<(E::Handle, E::Handle)> {
        self.pair.map(|p| (p.press, p.release))
    }

    fn pair(&mut self) -> AnimationPair<E::Handle> {
        if let Some(pair) = self.pair {
            return pair;
        }
        let e = &mut self.engine;
        let (d, s) = (self.duration, self.scale);
        let down_x = e.play_from_to(Property::ScaleX, None, s, d, self.press_easing);
        let down_y = e.play_from_to(Property::ScaleY, None, s, d, self.press_easing);
        let up_x = e.play_from_to(Property::ScaleX, None, 1.0, d, self.release_easing);
        let up_y = e.play_from_to(Property::ScaleY, None, 1.0, d, self.release_easing);
        let pair = AnimationPair {
            press: e.combine(&[down_x, down_y]),
            release: e.combine(&[up_x, up_y]),
        };
        tracing::trace!(?pair, "built press/release animations");
        self.pair = Some(pair);
        pair
    }

    /// Start the shrink.
    ///
    /// Any release in flight is stopped and its completion discarded.
    pub fn play_press(&mut self, now: u64) {
        let pair = self.pair();
        self.engine.clear_on_complete(pair.release);
        self.engine.cancel(pair.release);
        self.engine.cancel(pair.press);
        self.engine.start(pair.press, now, 0);
    }

    /// Start the restore and return the delay applied before it begins.
    ///
    /// `touch_time` is the time of the last pointer down, if any. With
    /// `attach_completion`, the next [`ScaleAnimator::advance`] that sees the
    /// release run to its end reports it.
    pub fn play_release(
        &mut self,
        now: u64,
        touch_time: Option<u64>,
        attach_completion: bool,
    ) -> u64 {
        let pair = self.pair();
        let delay = touch_time.map_or(0, |t| {
            let elapsed = now.saturating_sub(t);
            self.duration.saturating_sub(elapsed)
        });
        if delay == 0 {
            self.engine.cancel(pair.press);
        }
        self.engine.cancel(pair.release);
        if attach_completion {
            self.engine.on_complete(pair.release);
        }
        self.engine.start(pair.release, now, delay);
        tracing::trace!(now, delay, attach_completion, "release scheduled");
        delay
    }

    /// Stop both animations where they are.
    pub fn cancel_all(&mut self) {
        if let Some(pair) = self.pair {
            self.engine.cancel(pair.press);
            self.engine.cancel(pair.release);
        }
    }

    /// Advance the engine into `target`.
    ///
    /// Returns the finish time of the release if it completed with its
    /// completion armed.
    pub fn advance<T: AnimationTarget + ?Sized>(
        &mut self,
        now: u64,
        target: &mut T,
    ) -> Option<u64> {
        let done = self.engine.advance(now, target);
        let release = self.pair?.release;
        done.iter().find(|c| c.handle == release).map(|c| c.at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::Timeline;

    #[derive(Debug)]
    struct Scale(f64, f64);

    impl AnimationTarget for Scale {
        fn value(&self, p: Property) -> f64 {
            match p {
                Property::ScaleX => self.0,
                Property::ScaleY => self.1,
            }
        }
        fn set_value(&mut self, p: Property, v: f64) {
            match p {
                Property::ScaleX => self.0 = v,
                Property::ScaleY => self.1 = v,
            }
        }
    }

    fn linear() -> PressConfig {
        PressConfig::default().with_easing(Easing::Linear, Easing::Linear)
    }

    #[test]
    fn animations_are_built_once() {
        let mut a = ScaleAnimator::new(Timeline::new(), &linear());
        assert!(a.handles().is_none());
        a.play_press(0);
        let first = a.handles();
        let len = a.engine().len();
        let _ = a.play_release(200, Some(0), false);
        a.play_press(300);
        assert_eq!(a.handles(), first);
        assert_eq!(a.engine().len(), len);
    }

    #[test]
    fn quick_tap_delays_release() {
        let mut a = ScaleAnimator::new(Timeline::new(), &linear());
        a.play_press(0);
        let delay = a.play_release(10, Some(0), true);
        assert_eq!(delay, 90);
        let (press, release) = a.handles().unwrap();
        assert_eq!(a.engine().scheduled_begin(release), Some(100));
        // The press keeps running through the delay.
        assert!(a.engine().is_running(press));
    }

    #[test]
    fn slow_release_starts_now_and_stops_press() {
        let mut a = ScaleAnimator::new(Timeline::new(), &linear());
        a.play_press(0);
        let delay = a.play_release(150, Some(0), false);
        assert_eq!(delay, 0);
        let (press, release) = a.handles().unwrap();
        assert!(!a.engine().is_running(press));
        assert_eq!(a.engine().scheduled_begin(release), Some(150));
    }

    #[test]
    fn release_without_touch_has_no_delay() {
        let mut a = ScaleAnimator::new(Timeline::new(), &linear());
        assert_eq!(a.play_release(5, None, false), 0);
    }

    #[test]
    fn full_cycle_reports_completion_once() {
        let mut a = ScaleAnimator::new(Timeline::new(), &linear());
        let mut s = Scale(1.0, 1.0);
        a.play_press(0);
        assert_eq!(a.advance(0, &mut s), None);
        let _ = a.play_release(10, Some(0), true);
        assert_eq!(a.advance(100, &mut s), None);
        assert!((s.0 - 0.9).abs() < 1e-9, "fully shrunk before restore");
        assert_eq!(a.advance(150, &mut s), None);
        assert!((s.0 - 0.95).abs() < 1e-9);
        assert_eq!(a.advance(200, &mut s), Some(200));
        assert_eq!((s.0, s.1), (1.0, 1.0));
        assert_eq!(a.advance(300, &mut s), None);
    }

    #[test]
    fn press_discards_pending_completion() {
        let mut a = ScaleAnimator::new(Timeline::new(), &linear());
        let mut s = Scale(1.0, 1.0);
        a.play_press(0);
        let _ = a.play_release(10, Some(0), true);
        a.play_press(50);
        let (_, release) = a.handles().unwrap();
        assert!(!a.engine().has_completion(release));
        let _ = a.play_release(300, Some(50), false);
        assert_eq!(a.advance(1000, &mut s), None);
    }

    #[test]
    fn cancel_all_halts_both() {
        let mut a = ScaleAnimator::new(Timeline::new(), &linear());
        a.cancel_all();
        a.play_press(0);
        a.cancel_all();
        let (press, release) = a.handles().unwrap();
        assert!(!a.engine().is_running(press));
        assert!(!a.engine().is_running(release));
    }
}
