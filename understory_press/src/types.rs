// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the press controller: pointer events, press flags, and animatable properties.
//!
//! ## Overview
//!
//! These types describe what flows into the [`controller`](crate::controller) and
//! what the [animation engine](crate::engine) writes back to the element.
//! Timestamps are monotonic milliseconds from an arbitrary origin.

use kurbo::Point;

/// Kind of pointer event delivered to a [`PressController`](crate::controller::PressController).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PointerKind {
    /// Pointer went down on the element.
    Down,
    /// Pointer moved while down.
    Move,
    /// Pointer went up.
    Up,
    /// The gesture was taken away (for example by an enclosing scroll container).
    Cancel,
    /// Any other pointer event (hover, wheel, …). Ignored by the controller.
    Other,
}

/// A single pointer event.
///
/// `position` is expressed in absolute (screen) coordinates, the same space as
/// [`Pressable::visible_bounds`](crate::element::Pressable::visible_bounds).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// What happened.
    pub kind: PointerKind,
    /// Absolute pointer position.
    pub position: Point,
    /// Event time in milliseconds.
    pub time: u64,
}

impl PointerEvent {
    /// Create an event of the given kind.
    pub const fn new(kind: PointerKind, position: Point, time: u64) -> Self {
        Self {
            kind,
            position,
            time,
        }
    }

    /// Pointer down at `position`.
    pub const fn down(position: Point, time: u64) -> Self {
        Self::new(PointerKind::Down, position, time)
    }

    /// Pointer moved to `position`.
    pub const fn moved(position: Point, time: u64) -> Self {
        Self::new(PointerKind::Move, position, time)
    }

    /// Pointer up at `position`.
    pub const fn up(position: Point, time: u64) -> Self {
        Self::new(PointerKind::Up, position, time)
    }

    /// Gesture cancelled at `position`.
    pub const fn cancel(position: Point, time: u64) -> Self {
        Self::new(PointerKind::Cancel, position, time)
    }
}

/// Whether a pointer event was consumed.
///
/// Only `Down` is consumed; everything else passes through so an enclosing
/// scrollable container can still claim a drag.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Handled {
    /// The event was consumed.
    Yes,
    /// The event should continue to other handlers.
    No,
}

impl Handled {
    /// Returns `true` for [`Handled::Yes`].
    pub const fn is_handled(self) -> bool {
        matches!(self, Self::Yes)
    }
}

bitflags::bitflags! {
    /// Raw press flags.
    ///
    /// Steady states are exactly [`PressFlags::RELEASED`] (idle) and
    /// [`PressFlags::PRESSED`]. Any other combination is never observable from
    /// outside the controller.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PressFlags: u8 {
        /// Pointer is down on the element.
        const PRESSED  = 0b0000_0001;
        /// No press in progress.
        const RELEASED = 0b0000_0010;
    }
}

impl Default for PressFlags {
    fn default() -> Self {
        Self::RELEASED
    }
}

impl PressFlags {
    /// Semantic state for these flags.
    ///
    /// Anything other than a pure `PRESSED` reads as idle.
    pub fn state(self) -> PressState {
        if self == Self::PRESSED {
            PressState::Pressed
        } else {
            PressState::Idle
        }
    }

    /// Returns `true` when the flags are one of the two steady states.
    pub fn is_steady(self) -> bool {
        self == Self::PRESSED || self == Self::RELEASED
    }
}

/// Semantic press state.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum PressState {
    /// No press in progress.
    #[default]
    Idle,
    /// Pointer is down on the element.
    Pressed,
}

/// Element properties driven by the animation engine.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Property {
    /// Horizontal scale factor.
    ScaleX,
    /// Vertical scale factor.
    ScaleY,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_are_idle() {
        let f = PressFlags::default();
        assert_eq!(f, PressFlags::RELEASED);
        assert_eq!(f.state(), PressState::Idle);
        assert!(f.is_steady());
    }

    #[test]
    fn transient_flags_read_as_idle() {
        // Both cleared only happens mid-cancel; both set is never produced.
        assert_eq!(PressFlags::empty().state(), PressState::Idle);
        assert!(!PressFlags::empty().is_steady());
        assert!(!PressFlags::all().is_steady());
        assert_eq!(PressFlags::PRESSED.state(), PressState::Pressed);
    }

    #[test]
    fn only_yes_is_handled() {
        assert!(Handled::Yes.is_handled());
        assert!(!Handled::No.is_handled());
    }

    #[test]
    fn event_constructors_set_kind() {
        let p = Point::new(1.0, 2.0);
        assert_eq!(PointerEvent::down(p, 3).kind, PointerKind::Down);
        assert_eq!(PointerEvent::moved(p, 3).kind, PointerKind::Move);
        assert_eq!(PointerEvent::up(p, 3).kind, PointerKind::Up);
        assert_eq!(PointerEvent::cancel(p, 3).kind, PointerKind::Cancel);
        assert_eq!(PointerEvent::down(p, 3).time, 3);
    }
}
