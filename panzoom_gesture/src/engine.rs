// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::classify::{MoveKind, classify_move};
use crate::dirty::Dirty;
use crate::event::InputEvent;
use crate::geometry;
use crate::settings::Settings;
use crate::state::GestureState;

/// Interprets interleaved pointer, touch, and wheel events into a
/// fixed-point-preserving pan+zoom transform.
///
/// `PointerEngine` owns a single [`GestureState`] and mutates it through
/// one [`handle`](Self::handle) entry point. Events are processed to
/// completion synchronously, in delivery order; the current container
/// size is injected per event so the engine never consults a display
/// surface.
///
/// The computed transform assumes the visual container's transform
/// origin is its top-left corner. That is a documented precondition of
/// the drift math, not something the engine enforces.
///
/// The event stream is trusted: a zero-size container or non-finite
/// coordinates propagate as non-finite scale/coords rather than being
/// validated away.
#[derive(Clone, Debug)]
pub struct PointerEngine {
    settings: Settings,
    state: GestureState,
}

impl PointerEngine {
    /// Creates an engine with the given settings and initial state
    /// (scale 1, origin coords, no gesture active).
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            state: GestureState::default(),
        }
    }

    /// Returns the engine's configuration.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replaces the container offset.
    ///
    /// The offset participates in every page-to-container conversion, so
    /// a change takes effect from the next event.
    pub fn set_offset(&mut self, offset: Point) {
        self.settings.offset = offset;
    }

    /// Returns the current gesture state.
    #[must_use]
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Feeds one event through the engine.
    ///
    /// `viewport` is the container's rendered size at delivery time.
    /// Returns the set of state fields the event wrote.
    pub fn handle(&mut self, event: InputEvent<'_>, viewport: Size) -> Dirty {
        match event {
            InputEvent::Down => self.on_down(),
            InputEvent::Up { touches } => self.on_up(touches),
            InputEvent::Move { page, touches } => self.on_move(page, touches, viewport),
            InputEvent::Wheel { page, delta } => self.on_wheel(page, delta, viewport),
        }
    }

    /// Snapshot of the current engine state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PointerDebugInfo {
        PointerDebugInfo {
            settings: self.settings,
            state: self.state,
            gesturing: self.state.is_gesturing(),
        }
    }

    /// A press or touch start. Dragging is only recognized on a later
    /// move, so a stationary press never pans.
    fn on_down(&mut self) -> Dirty {
        self.state.mousedown += 1;
        Dirty::MOUSEDOWN
    }

    /// A release. `touches` lists the touch points still active.
    ///
    /// Pinch state is reset only when the release still carries touch
    /// points: a plain mouse release (and a final `touchend` whose list
    /// is already empty) leaves `pinching` untouched. A stale nonzero
    /// `pinching` after a cross-modality release is a known quirk of the
    /// recognizer, kept rather than silently changed.
    fn on_up(&mut self, touches: &[Point]) -> Dirty {
        self.state.mousedown = 0;
        self.state.dragging = 0;
        let mut dirty = Dirty::MOUSEDOWN | Dirty::DRAGGING;
        if !touches.is_empty() {
            self.state.pinching = 0;
            self.state.initial_pinch_scale = self.state.scale;
            dirty |= Dirty::PINCHING | Dirty::INITIAL_PINCH_SCALE;
        }
        dirty
    }

    /// Pointer motion from either the mouse or any number of touches.
    fn on_move(&mut self, page: Point, touches: &[Point], viewport: Size) -> Dirty {
        let mut dirty = Dirty::empty();
        match classify_move(&self.state, touches.len()) {
            MoveKind::Pinch => {
                // The counter doubles as "which pinch frame is this".
                self.state.pinching += 1;
                dirty |= Dirty::PINCHING;
                if let [a, b, ..] = touches {
                    dirty |= self.on_pinch(*a, *b, viewport);
                }
            }
            MoveKind::Suppressed => {}
            kind @ (MoveKind::Drag | MoveKind::Track) => {
                let primary = touches.first().copied().unwrap_or(page);
                let local = self.to_local(primary);
                if kind == MoveKind::Drag {
                    self.state.dragging = self.state.mousedown;
                    let delta = local - self.state.last_move;
                    dirty |= Dirty::DRAGGING;
                    dirty |= self.state.stage_movement(delta, &self.settings.coords);
                }
                // Unconditional, so the next transition into dragging
                // computes its delta from a current position.
                self.state.last_move = local;
                dirty |= Dirty::LAST_MOVE;
            }
        }

        // Moves arrive with or without the button held; only keep
        // counting if a press already started the count.
        if self.state.mousedown > 0 {
            self.state.mousedown += 1;
            dirty |= Dirty::MOUSEDOWN;
        }
        dirty
    }

    /// A move event carrying at least two touches; only the first two
    /// participate.
    fn on_pinch(&mut self, a: Point, b: Point, viewport: Size) -> Dirty {
        let a = self.to_local(a);
        let b = self.to_local(b);
        let (x1, x2) = geometry::minmax(a.x, b.x);
        let (y1, y2) = geometry::minmax(a.y, b.y);
        let dx = x2 - x1;
        let dy = y2 - y1;
        let radius = Vec2::new(dx, dy).hypot();

        if self.state.pinching == 1 {
            // First recognized pinch frame: calibrate only. There is no
            // prior radius to compare against, so no scale change yet.
            self.state.touch_radius = radius;
            Dirty::TOUCH_RADIUS
        } else {
            let zoompoint = Point::new(x2 - dx / 2.0, y2 - dy / 2.0);
            let desired = self.state.initial_pinch_scale * radius / self.state.touch_radius;
            self.apply_scale(zoompoint, desired, viewport)
        }
    }

    /// A wheel rotation. Near-pure-vertical motion is the zoom signal;
    /// events with a significant horizontal component (trackpad
    /// horizontal scroll) are not interpreted at all.
    fn on_wheel(&mut self, page: Point, delta: Vec2, viewport: Size) -> Dirty {
        if delta.x.abs() >= 0.1 {
            return Dirty::empty();
        }

        self.state.wheeling = true;
        let zoompoint = self.to_local(page);

        // The increment grows with the current scale so zooming feels
        // proportionally consistent at every zoom level.
        let step = 0.01 + self.state.scale * 0.1;
        let desired = self.state.scale + if delta.y > 0.0 { -step } else { step };
        let mut dirty = self.apply_scale(zoompoint, desired, viewport);

        // Sync the pinch base with the wheel-adjusted scale; otherwise
        // switching from one input to the other jumps.
        self.state.initial_pinch_scale = self.state.scale;
        self.state.wheeling = false;
        dirty | Dirty::WHEELING | Dirty::INITIAL_PINCH_SCALE
    }

    /// Rescales around `zoompoint`, staging the translation drift that
    /// keeps the point visually stationary.
    ///
    /// The zoompoint's fractional position is computed within a
    /// world-space viewport rectangle at the current and at the desired
    /// scale; both rectangles share `coords` as their origin (this is
    /// where the top-left transform-origin precondition comes from). The
    /// difference of the two ratios, scaled back to world units, is the
    /// drift that cancels the apparent movement of the zoompoint.
    fn apply_scale(&mut self, zoompoint: Point, desired_scale: f64, viewport: Size) -> Dirty {
        let current = self.state.scale;
        let next = self.settings.scale.clamp(desired_scale);

        let offset = self.settings.offset;
        let bounds = Size::new(viewport.width - offset.x, viewport.height - offset.y);

        // Viewport rectangles in world space, before the drift is applied.
        let origin = self.state.coords;
        let current_size = Size::new(bounds.width / current, bounds.height / current);
        let next_size = Size::new(bounds.width / next, bounds.height / next);

        let ratio_current = Vec2::new(
            (zoompoint.x - origin.x) / current_size.width,
            (zoompoint.y - origin.y) / current_size.height,
        );
        let ratio_next = Vec2::new(
            (zoompoint.x - origin.x) / next_size.width,
            (zoompoint.y - origin.y) / next_size.height,
        );

        let drift = Vec2::new(
            (ratio_next.x - ratio_current.x) * current_size.width * -1.0,
            (ratio_next.y - ratio_current.y) * current_size.height * -1.0,
        );

        let mut dirty = self.state.stage_movement(drift, &self.settings.coords);
        self.state.last_move = zoompoint;
        self.state.scale = next;
        dirty | Dirty::LAST_MOVE | Dirty::SCALE
    }

    fn to_local(&self, page: Point) -> Point {
        Point::new(
            page.x - self.settings.offset.x,
            page.y - self.settings.offset.y,
        )
    }
}

/// Snapshot of a [`PointerEngine`] state.
#[derive(Clone, Copy, Debug)]
pub struct PointerDebugInfo {
    /// Configuration at snapshot time.
    pub settings: Settings,
    /// Gesture state at snapshot time.
    pub state: GestureState,
    /// Whether any gesture was active.
    pub gesturing: bool,
}
