// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The input event model consumed by the engine.

use kurbo::{Point, Vec2};

/// One pointer input event, in page coordinates.
///
/// The engine does not bind to any windowing or DOM stack; an embedding
/// layer converts its native events into this vocabulary. The intended
/// mapping from DOM-style sources:
///
/// - `Down`: `mousedown`, `touchstart`
/// - `Up`: `mouseup`, `mouseleave`, `touchend`
/// - `Move`: `mousemove`, `touchmove`
/// - `Wheel`: wheel rotation with `wheel_delta` sign conventions
///   (positive Y is scroll-up)
///
/// Touch lists are borrowed slices so the crate stays `no_std` and
/// allocation-free.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent<'a> {
    /// A primary button press or touch start.
    Down,
    /// A release. `touches` lists the touch points still active after the
    /// release; empty for a plain mouse release.
    Up {
        /// Touch points still on the surface, page space.
        touches: &'a [Point],
    },
    /// Pointer motion. When `touches` is nonempty its first entry is the
    /// primary position; otherwise `page` is.
    Move {
        /// Mouse position, page space.
        page: Point,
        /// Active touch points, page space.
        touches: &'a [Point],
    },
    /// Wheel rotation at `page`.
    Wheel {
        /// Pointer position at rotation time, page space.
        page: Point,
        /// Wheel delta per axis. Events with a significant horizontal
        /// component are not interpreted as zoom.
        delta: Vec2,
    },
}
