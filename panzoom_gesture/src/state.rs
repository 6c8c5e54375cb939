// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture state and the coordinate accumulation reducer.

use kurbo::{Point, Rect, Vec2};

use crate::dirty::Dirty;
use crate::geometry;

/// Mutable state of one gesture engine instance.
///
/// The counters double as activity flags: zero means inactive, and a
/// nonzero value additionally counts events seen since activation. Some
/// consumers depend on the counting behavior (a long-press recognizer
/// can watch `mousedown` grow), so the duality is part of the contract
/// rather than an implementation detail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureState {
    /// Nonzero while a primary button or tap is held. Increments on each
    /// move event seen while held; a has-moved-while-down signal, not a
    /// pixel distance.
    pub mousedown: u32,
    /// Nonzero while a single-pointer drag is recognized. Set to the
    /// `mousedown` count, so it doubles as a count of move events since
    /// the drag was recognized.
    pub dragging: u32,
    /// Nonzero while two or more touches are active; counts pinch move
    /// events.
    pub pinching: u32,
    /// True only while a single wheel event is being processed; never
    /// observed as true outside that synchronous step.
    pub wheeling: bool,
    /// Current viewport scale, always within the configured bounds.
    pub scale: f64,
    /// Scale snapshot taken at pinch end and after each wheel event; the
    /// multiplicative base for ratio-based pinch scaling.
    pub initial_pinch_scale: f64,
    /// Distance between the two touch points, sampled at pinch start;
    /// the divisor base for ratio-based pinch scaling.
    pub touch_radius: f64,
    /// Last known container-relative pointer position.
    pub last_move: Point,
    /// Accumulated world-space translation; the primary output. Apply as
    /// the container translation before scaling.
    pub coords: Vec2,
    /// Last staged drift/delta, exposed so a consumer can apply
    /// incremental transforms without recomputing from `coords`.
    pub movement: Vec2,
}

impl Default for GestureState {
    fn default() -> Self {
        Self {
            mousedown: 0,
            dragging: 0,
            pinching: 0,
            wheeling: false,
            scale: 1.0,
            initial_pinch_scale: 1.0,
            touch_radius: 1.0,
            last_move: Point::ZERO,
            coords: Vec2::ZERO,
            movement: Vec2::ZERO,
        }
    }
}

impl GestureState {
    /// Returns true while any of drag, pinch, or wheel is active.
    ///
    /// Outside these states the pointer is merely hovering: its motion is
    /// tracked but never accumulated into `coords`.
    #[must_use]
    pub fn is_gesturing(&self) -> bool {
        self.dragging > 0 || self.pinching > 0 || self.wheeling
    }

    /// Stages `delta` as the latest movement and folds it into `coords`.
    ///
    /// The fold happens only if a gesture is active at the moment the
    /// movement arrives; the guard is re-checked here rather than trusted
    /// to callers. `coords` is clamped componentwise into `bounds` after
    /// the fold.
    pub fn stage_movement(&mut self, delta: Vec2, bounds: &Rect) -> Dirty {
        self.movement = delta;
        let mut dirty = Dirty::MOVEMENT;
        if self.is_gesturing() {
            self.coords = geometry::clamp_coords(bounds, self.coords + delta);
            dirty |= Dirty::COORDS;
        }
        dirty
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Vec2};

    use super::{Dirty, GestureState};
    use crate::settings::UNBOUNDED;

    #[test]
    fn initial_state_matches_lifecycle_contract() {
        let state = GestureState::default();
        assert_eq!(state.mousedown, 0);
        assert_eq!(state.dragging, 0);
        assert_eq!(state.pinching, 0);
        assert!(!state.wheeling);
        assert_eq!(state.scale, 1.0);
        assert_eq!(state.initial_pinch_scale, 1.0);
        assert_eq!(state.touch_radius, 1.0);
        assert_eq!(state.last_move, Point::ZERO);
        assert_eq!(state.coords, Vec2::ZERO);
        assert_eq!(state.movement, Vec2::ZERO);
        assert!(!state.is_gesturing());
    }

    #[test]
    fn each_mode_flag_makes_state_gesturing() {
        let mut state = GestureState::default();
        state.dragging = 2;
        assert!(state.is_gesturing());

        let mut state = GestureState::default();
        state.pinching = 1;
        assert!(state.is_gesturing());

        let mut state = GestureState::default();
        state.wheeling = true;
        assert!(state.is_gesturing());
    }

    #[test]
    fn staged_movement_is_ignored_while_hovering() {
        let mut state = GestureState::default();
        let dirty = state.stage_movement(Vec2::new(5.0, -3.0), &UNBOUNDED);

        // The movement itself is recorded, the fold is not.
        assert_eq!(dirty, Dirty::MOVEMENT);
        assert_eq!(state.movement, Vec2::new(5.0, -3.0));
        assert_eq!(state.coords, Vec2::ZERO);
    }

    #[test]
    fn staged_movement_accumulates_while_dragging() {
        let mut state = GestureState {
            dragging: 2,
            ..GestureState::default()
        };

        let dirty = state.stage_movement(Vec2::new(5.0, -3.0), &UNBOUNDED);
        assert_eq!(dirty, Dirty::MOVEMENT | Dirty::COORDS);
        assert_eq!(state.coords, Vec2::new(5.0, -3.0));

        state.stage_movement(Vec2::new(1.0, 1.0), &UNBOUNDED);
        assert_eq!(state.coords, Vec2::new(6.0, -2.0));
    }

    #[test]
    fn accumulated_coords_respect_bounds() {
        let bounds = Rect::new(-10.0, -10.0, 10.0, 10.0);
        let mut state = GestureState {
            dragging: 2,
            ..GestureState::default()
        };

        state.stage_movement(Vec2::new(100.0, -100.0), &bounds);
        assert_eq!(state.coords, Vec2::new(10.0, -10.0));
    }
}
