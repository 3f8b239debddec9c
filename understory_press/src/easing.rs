// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves for press and release animations.

use kurbo::{CubicBez, ParamCurve, Point};

/// Number of bisection steps when solving a Bézier curve for `x`.
const BEZIER_STEPS: usize = 32;

/// Maps linear progress `t ∈ [0, 1]` to eased progress.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Easing {
    /// Identity.
    Linear,
    /// Starts slow and speeds up (`t²`). Default for press.
    AccelerateIn,
    /// Material "fast out, slow in" curve, the cubic Bézier `(0.4, 0, 0.2, 1)`.
    /// Default for release.
    FastOutSlowIn,
    /// Custom timing curve from `(0, 0)` to `(1, 1)`.
    ///
    /// The `x` coordinates of the inner control points must lie in `[0, 1]` so
    /// the curve is a function of `x`.
    Bezier(CubicBez),
}

impl Easing {
    /// Build a CSS-style `cubic-bezier(x1, y1, x2, y2)` easing.
    pub fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::Bezier(CubicBez::new(
            Point::ZERO,
            Point::new(x1, y1),
            Point::new(x2, y2),
            Point::new(1.0, 1.0),
        ))
    }

    /// Evaluate the curve. Input outside `[0, 1]` is clamped.
    pub fn ease(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::AccelerateIn => t * t,
            Self::FastOutSlowIn => solve_bezier(&fast_out_slow_in(), t),
            Self::Bezier(c) => solve_bezier(c, t),
        }
    }
}

fn fast_out_slow_in() -> CubicBez {
    CubicBez::new(
        Point::ZERO,
        Point::new(0.4, 0.0),
        Point::new(0.2, 1.0),
        Point::new(1.0, 1.0),
    )
}

/// Find `y` where the curve crosses `x`, assuming `x(t)` is monotonic.
fn solve_bezier(curve: &CubicBez, x: f64) -> f64 {
    if x <= 0.0 {
        return curve.p0.y;
    }
    if x >= 1.0 {
        return curve.p3.y;
    }
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    let mut mid = x;
    for _ in 0..BEZIER_STEPS {
        mid = 0.5 * (lo + hi);
        let p = curve.eval(mid);
        if p.x < x {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    curve.eval(mid).y
}
