// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Priority-ordered classification of move events.

use crate::state::GestureState;

/// How a move event will be interpreted.
///
/// A move is classified into exactly one kind, in priority order, before
/// any state mutation. Pinch must outrank the drag reading: the move
/// stream carries both mouse and touch events, and if a mouse pointer
/// happens to sit on screen while two fingers pinch, letting the drag
/// path run would clobber the pinch position with the mouse's.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    /// Two or more active touches: pinch-to-zoom.
    Pinch,
    /// A residual single-touch move delivered while pinch state is still
    /// active (mid-teardown). Ignored entirely.
    Suppressed,
    /// An active single-pointer drag: the button/tap has been held across
    /// at least one prior move.
    Drag,
    /// Plain hover motion: tracked for future deltas, never accumulated.
    Track,
}

/// Classifies a move event carrying `touch_count` active touch points.
#[must_use]
pub fn classify_move(state: &GestureState, touch_count: usize) -> MoveKind {
    if touch_count > 1 {
        MoveKind::Pinch
    } else if state.pinching > 0 {
        MoveKind::Suppressed
    } else if state.mousedown > 1 {
        MoveKind::Drag
    } else {
        MoveKind::Track
    }
}

#[cfg(test)]
mod tests {
    use super::{MoveKind, classify_move};
    use crate::state::GestureState;

    #[test]
    fn two_touches_always_classify_as_pinch() {
        let mut state = GestureState::default();
        assert_eq!(classify_move(&state, 2), MoveKind::Pinch);

        // Even with a drag-ready mouse state.
        state.mousedown = 5;
        state.dragging = 5;
        assert_eq!(classify_move(&state, 3), MoveKind::Pinch);
    }

    #[test]
    fn single_touch_during_pinch_teardown_is_suppressed() {
        let state = GestureState {
            pinching: 4,
            ..GestureState::default()
        };
        assert_eq!(classify_move(&state, 1), MoveKind::Suppressed);
        assert_eq!(classify_move(&state, 0), MoveKind::Suppressed);
    }

    #[test]
    fn held_pointer_with_prior_move_classifies_as_drag() {
        let state = GestureState {
            mousedown: 2,
            ..GestureState::default()
        };
        assert_eq!(classify_move(&state, 0), MoveKind::Drag);
        assert_eq!(classify_move(&state, 1), MoveKind::Drag);
    }

    #[test]
    fn first_move_after_press_is_only_tracked() {
        // mousedown == 1 means the press happened but no move was seen
        // yet; recognizing a drag here would jump from the press point.
        let state = GestureState {
            mousedown: 1,
            ..GestureState::default()
        };
        assert_eq!(classify_move(&state, 0), MoveKind::Track);
    }

    #[test]
    fn idle_motion_is_tracked() {
        let state = GestureState::default();
        assert_eq!(classify_move(&state, 0), MoveKind::Track);
        assert_eq!(classify_move(&state, 1), MoveKind::Track);
    }
}
