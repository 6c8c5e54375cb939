// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration: container offset, scale bounds, coordinate bounds.

use kurbo::{Point, Rect};

use crate::geometry;

/// Coordinate bounds that never clamp.
pub const UNBOUNDED: Rect = Rect::new(
    f64::NEG_INFINITY,
    f64::NEG_INFINITY,
    f64::INFINITY,
    f64::INFINITY,
);

/// Inclusive clamp range for the viewport scale factor.
///
/// A `min` of zero or below is degenerate (a zero scale collapses the
/// world-space viewport); `min > 0` is the recommended contract, but it
/// is not enforced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBounds {
    /// Smallest permitted scale.
    pub min: f64,
    /// Largest permitted scale.
    pub max: f64,
}

impl ScaleBounds {
    /// Creates a bounds pair, normalized so that `min <= max`.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Clamps `scale` into this range.
    ///
    /// A non-finite `scale` is still bounded to a finite edge when one
    /// exists.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        geometry::clamp(self.min, self.max, scale)
    }
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self {
            min: 0.5,
            max: 40.0,
        }
    }
}

/// Configuration consulted by the engine on every event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    /// Pixel offset of the container origin within the page. Subtracted
    /// from page coordinates before any gesture math.
    pub offset: Point,
    /// Clamp range for the scale factor.
    pub scale: ScaleBounds,
    /// Componentwise clamp range for accumulated coordinates.
    pub coords: Rect,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            offset: Point::ZERO,
            scale: ScaleBounds::default(),
            coords: UNBOUNDED,
        }
    }
}
