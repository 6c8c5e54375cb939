// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clamping and axis-ordering helpers shared by the engine.

use kurbo::{Rect, Vec2};

/// Clamps `v` into `[min, max]` without panicking on inverted or
/// non-finite bounds.
///
/// Composed as `max(min(v, max), min)`, so `min` wins when the range is
/// inverted. Inputs are not sanitized: NaN and infinite values resolve
/// by IEEE min/max rules and callers get the degenerate result.
#[must_use]
pub fn clamp(min: f64, max: f64, v: f64) -> f64 {
    v.min(max).max(min)
}

/// Clamps a translation componentwise into the rectangle `bounds`.
#[must_use]
pub fn clamp_coords(bounds: &Rect, v: Vec2) -> Vec2 {
    Vec2::new(
        clamp(bounds.x0, bounds.x1, v.x),
        clamp(bounds.y0, bounds.y1, v.y),
    )
}

/// Returns the pair `(a, b)` ordered ascending.
#[must_use]
pub fn minmax(a: f64, b: f64) -> (f64, f64) {
    if b < a { (b, a) } else { (a, b) }
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Vec2};

    use super::{clamp, clamp_coords, minmax};

    #[test]
    fn clamp_bounds_value_into_range() {
        assert_eq!(clamp(0.0, 10.0, 5.0), 5.0);
        assert_eq!(clamp(0.0, 10.0, -1.0), 0.0);
        assert_eq!(clamp(0.0, 10.0, 11.0), 10.0);
    }

    #[test]
    fn clamp_with_unbounded_range_is_identity() {
        assert_eq!(clamp(f64::NEG_INFINITY, f64::INFINITY, -1e12), -1e12);
        assert_eq!(clamp(f64::NEG_INFINITY, f64::INFINITY, 1e12), 1e12);
    }

    #[test]
    fn clamp_inverted_range_does_not_panic() {
        // min wins; no panic, unlike `f64::clamp`.
        assert_eq!(clamp(5.0, 2.0, 3.0), 5.0);
    }

    #[test]
    fn clamp_nonfinite_bound_bounds_to_finite_edge() {
        assert_eq!(clamp(0.5, 40.0, f64::INFINITY), 40.0);
        assert_eq!(clamp(0.5, 40.0, f64::NEG_INFINITY), 0.5);
    }

    #[test]
    fn clamp_coords_is_componentwise() {
        let bounds = Rect::new(-10.0, -20.0, 10.0, 20.0);
        let v = clamp_coords(&bounds, Vec2::new(100.0, -100.0));
        assert_eq!(v, Vec2::new(10.0, -20.0));
    }

    #[test]
    fn minmax_orders_ascending() {
        assert_eq!(minmax(1.0, 2.0), (1.0, 2.0));
        assert_eq!(minmax(2.0, 1.0), (1.0, 2.0));
        assert_eq!(minmax(3.0, 3.0), (3.0, 3.0));
    }
}
