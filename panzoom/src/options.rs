// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction options.

use kurbo::{Point, Rect};
use panzoom_gesture::{ScaleBounds, UNBOUNDED};

/// Options recognized by [`Pointer::new`](crate::Pointer::new).
///
/// The defaults: no container offset, scale clamped to `[0.5, 40]`,
/// unbounded coordinates, listeners wired at construction, wheel zoom
/// enabled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerOptions {
    /// Pixel offset of the container origin within the page.
    pub offset: Point,
    /// Clamp range for the scale factor.
    pub scale: ScaleBounds,
    /// Componentwise clamp range for accumulated coordinates.
    pub coords: Rect,
    /// When true, listeners are not wired at construction; call
    /// [`activate_listeners`](crate::Pointer::activate_listeners)
    /// explicitly.
    pub manual_activation: bool,
    /// When true, no wheel listener is registered and wheel zoom is
    /// unavailable.
    pub disable_wheel: bool,
}

impl Default for PointerOptions {
    fn default() -> Self {
        Self {
            offset: Point::ZERO,
            scale: ScaleBounds::default(),
            coords: UNBOUNDED,
            manual_activation: false,
            disable_wheel: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::PointerOptions;

    #[test]
    fn defaults_match_the_documented_values() {
        let options = PointerOptions::default();
        assert_eq!(options.offset, Point::ZERO);
        assert_eq!(options.scale.min, 0.5);
        assert_eq!(options.scale.max, 40.0);
        assert!(options.coords.x0.is_infinite());
        assert!(!options.manual_activation);
        assert!(!options.disable_wheel);
    }
}
