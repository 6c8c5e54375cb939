// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The raw event vocabulary exchanged with an [`EventTarget`](crate::EventTarget).

use std::cell::Cell as Flag;

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

/// The abstract event kinds a pointer instance listens for.
///
/// An embedding adapter maps its native event names onto these; from a
/// DOM-style source the expected mapping is:
///
/// - `Down`: `mousedown`, `touchstart`
/// - `Up`: `mouseup`, `mouseleave`, `touchend`
/// - `Move`: `mousemove`, `touchmove`
/// - `Wheel`: `mousewheel`/`wheel`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A primary button press or touch start.
    Down,
    /// A release, including the pointer leaving the container.
    Up,
    /// Pointer or touch motion.
    Move,
    /// Wheel rotation.
    Wheel,
}

/// A raw input event as delivered by an [`EventTarget`](crate::EventTarget).
///
/// One shape serves every [`EventKind`]; fields irrelevant to a kind are
/// left at their defaults. Touch points ride inline (two fit without
/// spilling, which covers the pinch path).
#[derive(Debug, Default)]
pub struct RawEvent {
    /// Mouse position, page space.
    pub page: Point,
    /// Active touch points, page space. For an `Up`, the points still on
    /// the surface after the release.
    pub touches: SmallVec<[Point; 2]>,
    /// Wheel delta per axis, `wheel_delta` sign conventions (positive Y
    /// is scroll-up).
    pub wheel_delta: Vec2,
    default_prevented: Flag<bool>,
}

impl RawEvent {
    /// A mouse event at `page`.
    #[must_use]
    pub fn mouse(page: Point) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    /// A touch event carrying `touches`; the first point doubles as the
    /// primary position.
    #[must_use]
    pub fn touch(touches: impl IntoIterator<Item = Point>) -> Self {
        let touches: SmallVec<[Point; 2]> = touches.into_iter().collect();
        Self {
            page: touches.first().copied().unwrap_or(Point::ZERO),
            touches,
            ..Self::default()
        }
    }

    /// A wheel event at `page` with the given per-axis delta.
    #[must_use]
    pub fn wheel(page: Point, delta: Vec2) -> Self {
        Self {
            page,
            wheel_delta: delta,
            ..Self::default()
        }
    }

    /// Requests suppression of the event's default action (page scroll,
    /// text selection). The embedder reads the flag back after dispatch.
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    /// Whether default-action suppression was requested.
    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::RawEvent;

    #[test]
    fn touch_constructor_promotes_first_point_to_primary() {
        let event = RawEvent::touch([Point::new(10.0, 20.0), Point::new(30.0, 40.0)]);
        assert_eq!(event.page, Point::new(10.0, 20.0));
        assert_eq!(event.touches.len(), 2);

        let empty = RawEvent::touch([]);
        assert_eq!(empty.page, Point::ZERO);
    }

    #[test]
    fn default_prevention_is_sticky() {
        let event = RawEvent::wheel(Point::ZERO, Vec2::new(0.0, 1.0));
        assert!(!event.default_prevented());
        event.prevent_default();
        event.prevent_default();
        assert!(event.default_prevented());
    }
}
