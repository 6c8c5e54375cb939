// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-event change sets.

use bitflags::bitflags;

bitflags! {
    /// The set of [`GestureState`](crate::GestureState) fields an event
    /// handler wrote.
    ///
    /// Every handler returns one of these, so a wiring layer knows which
    /// observable outputs to re-emit without diffing the whole state. A
    /// bit is set whenever the field was written, including writes that
    /// store the value already present (release handlers re-assert zero
    /// counters, and downstream observers are expected to see that).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct Dirty: u16 {
        /// `mousedown` was written.
        const MOUSEDOWN = 1 << 0;
        /// `dragging` was written.
        const DRAGGING = 1 << 1;
        /// `pinching` was written.
        const PINCHING = 1 << 2;
        /// `wheeling` toggled for the duration of a wheel event.
        const WHEELING = 1 << 3;
        /// `scale` was written.
        const SCALE = 1 << 4;
        /// `initial_pinch_scale` was written.
        const INITIAL_PINCH_SCALE = 1 << 5;
        /// `touch_radius` was written.
        const TOUCH_RADIUS = 1 << 6;
        /// `last_move` was written.
        const LAST_MOVE = 1 << 7;
        /// `movement` was staged.
        const MOVEMENT = 1 << 8;
        /// `coords` accumulated a staged movement.
        const COORDS = 1 << 9;
    }
}
