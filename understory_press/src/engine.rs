// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation engine abstraction.
//!
//! The [`ScaleAnimator`](crate::animator::ScaleAnimator) only talks to this
//! trait, so any backend that can run property animations in parallel and
//! report their completion can drive the press feedback. [`Timeline`](crate::timeline::Timeline)
//! is the bundled backend.
//!
//! ## Model
//!
//! - [`AnimationEngine::play_from_to`] registers a stopped animation of one
//!   [`Property`] and returns a handle that stays valid for the engine's lifetime.
//! - [`AnimationEngine::combine`] groups handles into a composite whose members
//!   all start at the same instant.
//! - [`AnimationEngine::start`] (re)starts an animation, optionally after a delay.
//! - [`AnimationEngine::on_complete`] arms a one-shot completion. It is reported
//!   by [`AnimationEngine::advance`] only if the animation runs to its end;
//!   [`AnimationEngine::cancel`] discards it.
//!
//! Engines are driven by the host calling [`AnimationEngine::advance`] on
//! the UI thread. Nothing here is `Send`.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::easing::Easing;
use crate::types::Property;

/// Something whose properties an engine writes.
pub trait AnimationTarget {
    /// Current value of `property`.
    fn value(&self, property: Property) -> f64;

    /// Set `property`.
    fn set_value(&mut self, property: Property, value: f64);
}

/// A natural finish of an animation that had a completion armed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Completion<H> {
    /// Animation that finished.
    pub handle: H,
    /// Time the animation reached its end, in milliseconds.
    ///
    /// This is the scheduled end, not the tick that observed it.
    pub at: u64,
}

/// Animation backend used by the press controller.
pub trait AnimationEngine {
    /// Handle to a single or composite animation.
    type Handle: Copy + Eq + Debug;

    /// Register an animation of `property` from `start` to `end`.
    ///
    /// With `start == None` the animation begins from the property's value at
    /// the moment it actually starts running (after any delay).
    /// The animation does not run until [`AnimationEngine::start`].
    fn play_from_to(
        &mut self,
        property: Property,
        start: Option<f64>,
        end: f64,
        duration: u64,
        easing: Easing,
    ) -> Self::Handle;

    /// Group animations to run in parallel.
    fn combine(&mut self, handles: &[Self::Handle]) -> Self::Handle;

    /// Start `handle` at `now + delay`, restarting it if it is already running.
    fn start(&mut self, handle: Self::Handle, now: u64, delay: u64);

    /// Stop `handle` where it is and discard any armed completion.
    fn cancel(&mut self, handle: Self::Handle);

    /// Arm a one-shot completion for `handle`.
    fn on_complete(&mut self, handle: Self::Handle);

    /// Disarm the completion for `handle`, if any.
    fn clear_on_complete(&mut self, handle: Self::Handle);

    /// Returns `true` while `handle` is scheduled or running.
    fn is_running(&self, handle: Self::Handle) -> bool;

    /// Advance to `now`, writing current values into `target`.
    ///
    /// Animations are applied in the order they were registered. When two
    /// animations of the same property are both active on one tick, the one
    /// registered later sees the value the earlier one wrote, so a delayed
    /// follow-up that begins as its predecessor ends starts from the
    /// predecessor's final value.
    ///
    /// Returns the armed animations that reached their end, in handle order.
    fn advance<T: AnimationTarget + ?Sized>(
        &mut self,
        now: u64,
        target: &mut T,
    ) -> Vec<Completion<Self::Handle>>;
}
