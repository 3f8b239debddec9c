// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit testing against the element's visible bounds.
//!
//! Bounds are refreshed by the controller on every `Down`, `Move` and `Up`
//! because the visible region can change while a window scrolls or resizes
//! mid-gesture.
//!
//! ## Uncomputed bounds
//!
//! When no bounds have been computed yet, or the element is gone, every
//! coordinate compares against zero. The origin `(0, 0)` therefore counts as
//! inside and every other point as outside.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_press::hit::is_inside;
//!
//! let r = Rect::new(0.0, 0.0, 100.0, 100.0);
//! assert!(is_inside(Point::new(100.0, 100.0), Some(r)));
//! assert!(!is_inside(Point::new(101.0, 50.0), Some(r)));
//! assert!(is_inside(Point::ZERO, None));
//! ```

use kurbo::{Point, Rect};

/// Returns `true` if `point` lies within `bounds`, edges included.
///
/// `point` and `bounds` must be in the same absolute coordinate space.
/// Unlike [`Rect::contains`], the right and bottom edges are inside.
pub fn is_inside(point: Point, bounds: Option<Rect>) -> bool {
    let r = bounds.unwrap_or(Rect::ZERO);
    point.x >= r.x0 && point.x <= r.x1 && point.y >= r.y0 && point.y <= r.y1
}
