// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The element a controller is bound to, and the weak handle used to reach it.
//!
//! The controller never owns its element. It holds an [`ElementRef`] and asks
//! for the element afresh on every access; when the element is unavailable,
//! the operation is skipped.

use alloc::rc::Weak;
use core::cell::RefCell;

use kurbo::{Rect, Vec2};

use crate::engine::AnimationTarget;
use crate::types::Property;

/// A visual element that can be pressed.
pub trait Pressable {
    /// Currently visible on-screen region, in absolute coordinates.
    fn visible_bounds(&self) -> Rect;

    /// Current `(x, y)` scale factors.
    fn scale(&self) -> Vec2;

    /// Set the `(x, y)` scale factors.
    fn set_scale(&mut self, scale: Vec2);
}

impl<P: Pressable + ?Sized> AnimationTarget for P {
    fn value(&self, property: Property) -> f64 {
        let s = self.scale();
        match property {
            Property::ScaleX => s.x,
            Property::ScaleY => s.y,
        }
    }

    fn set_value(&mut self, property: Property, value: f64) {
        let mut s = self.scale();
        match property {
            Property::ScaleX => s.x = value,
            Property::ScaleY => s.y = value,
        }
        self.set_scale(s);
    }
}

/// Weak handle to a [`Pressable`].
pub trait ElementRef {
    /// Element type behind the handle.
    type Element: Pressable + ?Sized;

    /// Run `f` against the element if it is still available.
    ///
    /// Returns `None` without calling `f` when the element is gone.
    fn with_element<R>(&self, f: impl FnOnce(&mut Self::Element) -> R) -> Option<R>;

    /// Returns `true` once the element has been dropped for good.
    ///
    /// An element can be unavailable to [`ElementRef::with_element`] for a
    /// moment without being gone, for example while someone else borrows it.
    fn is_gone(&self) -> bool;
}

/// The usual single-threaded handle: the host owns `Rc<RefCell<P>>` and the
/// controller keeps a `Weak`.
///
/// An element that is already mutably borrowed (for example by the host while
/// it dispatches the event) is treated as unavailable.
impl<P: Pressable + ?Sized> ElementRef for Weak<RefCell<P>> {
    type Element = P;

    fn with_element<R>(&self, f: impl FnOnce(&mut P) -> R) -> Option<R> {
        let strong = self.upgrade()?;
        let mut element = strong.try_borrow_mut().ok()?;
        let out = f(&mut *element);
        Some(out)
    }

    fn is_gone(&self) -> bool {
        self.strong_count() == 0
    }
}

/// Stand-in target used once the element is gone or was never attached.
///
/// Reads as the visible-at-origin, unscaled element; writes are dropped.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct Detached;

impl Pressable for Detached {
    fn visible_bounds(&self) -> Rect {
        Rect::ZERO
    }

    fn scale(&self) -> Vec2 {
        Vec2::new(1.0, 1.0)
    }

    fn set_scale(&mut self, _scale: Vec2) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;

    #[derive(Debug)]
    struct Square {
        bounds: Rect,
        scale: Vec2,
    }

    impl Pressable for Square {
        fn visible_bounds(&self) -> Rect {
            self.bounds
        }
        fn scale(&self) -> Vec2 {
            self.scale
        }
        fn set_scale(&mut self, scale: Vec2) {
            self.scale = scale;
        }
    }

    fn square() -> Rc<RefCell<Square>> {
        Rc::new(RefCell::new(Square {
            bounds: Rect::new(0.0, 0.0, 10.0, 10.0),
            scale: Vec2::new(1.0, 1.0),
        }))
    }

    #[test]
    fn live_element_is_reachable() {
        let strong = square();
        let weak = Rc::downgrade(&strong);
        let b = weak.with_element(|e| e.visible_bounds());
        assert_eq!(b, Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn dropped_element_is_gone() {
        let strong = square();
        let weak = Rc::downgrade(&strong);
        drop(strong);
        let mut called = false;
        assert!(weak.with_element(|_| called = true).is_none());
        assert!(!called);
        assert!(weak.is_gone());
    }

    #[test]
    fn borrowed_element_is_unavailable() {
        let strong = square();
        let weak = Rc::downgrade(&strong);
        let _guard = strong.borrow_mut();
        assert!(weak.with_element(|e| e.scale()).is_none());
        assert!(!weak.is_gone());
    }

    #[test]
    fn properties_map_to_scale_axes() {
        let strong = square();
        let mut s = strong.borrow_mut();
        s.set_value(Property::ScaleX, 0.5);
        s.set_value(Property::ScaleY, 0.75);
        assert_eq!(s.scale, Vec2::new(0.5, 0.75));
        assert_eq!(s.value(Property::ScaleY), 0.75);
    }

    #[test]
    fn detached_drops_writes() {
        let mut d = Detached;
        d.set_value(Property::ScaleX, 0.1);
        assert_eq!(d.value(Property::ScaleX), 1.0);
        assert_eq!(d.visible_bounds(), Rect::ZERO);
    }
}
