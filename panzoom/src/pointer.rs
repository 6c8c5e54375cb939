// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::{Cell as Flag, RefCell};
use std::rc::Rc;

use kurbo::{Point, Rect, Vec2};
use panzoom_cell::{Cell, EndSignal};
use panzoom_gesture::{Dirty, InputEvent, PointerDebugInfo, PointerEngine, ScaleBounds, Settings};

use crate::events::{EventKind, RawEvent};
use crate::options::PointerOptions;
use crate::target::{EventTarget, ListenerId, ViewportSize};

/// The observable output surface of a [`Pointer`].
///
/// Each field is a [`Cell`] sharing the pointer's end signal. `coords`
/// is the translation to apply to the container before scaling; `scale`
/// the factor to scale it by; `movement` the last incremental delta for
/// consumers applying transforms incrementally. The mode cells
/// (`dragging`, `pinching`, `wheeling`, `mousedown`) expose the gesture
/// classifier's view for UI feedback, with the counter cells keeping
/// their zero-means-inactive contract.
///
/// `offset` is settable at runtime; the engine reads it back on the next
/// event.
#[derive(Clone, Debug)]
pub struct PointerOutputs {
    /// Accumulated world-space translation.
    pub coords: Cell<Vec2>,
    /// Current viewport scale.
    pub scale: Cell<f64>,
    /// Last staged drift/delta.
    pub movement: Cell<Vec2>,
    /// Last known container-relative pointer position.
    pub last_move: Cell<Point>,
    /// Nonzero while a drag is recognized; counts drag move events.
    pub dragging: Cell<u32>,
    /// Nonzero while a pinch is active; counts pinch move events.
    pub pinching: Cell<u32>,
    /// True only for the synchronous duration of a wheel event.
    pub wheeling: Cell<bool>,
    /// Nonzero while a button/tap is held; counts moves while held.
    pub mousedown: Cell<u32>,
    /// The scale base the next pinch ratio will grow from.
    pub initial_pinch_scale: Cell<f64>,
    /// Two-touch distance sampled at pinch start.
    pub touch_radius: Cell<f64>,
    /// Container offset within the page; settable at runtime.
    pub offset: Cell<Point>,
}

struct Inner<T, V> {
    target: T,
    viewport: V,
    engine: RefCell<PointerEngine>,
    outputs: PointerOutputs,
    end: EndSignal,
    listeners: RefCell<Vec<(EventKind, ListenerId)>>,
    activated: Flag<bool>,
    disable_wheel: bool,
}

/// A live pan/zoom pointer instance.
///
/// `Pointer` owns a [`PointerEngine`] and mirrors its outputs into the
/// [`PointerOutputs`] cells after every event. Events arrive either
/// through listeners registered on the injected [`EventTarget`] or by
/// feeding [`handle`](Self::handle) directly.
///
/// Everything runs on the thread delivering events; the type is
/// deliberately `!Send`. Teardown via [`end`](Self::end) is one-shot:
/// listeners are released, cells go inert, and later events are ignored.
/// A `Pointer` dropped without `end` leaves its (now inert) listeners
/// registered on the target.
pub struct Pointer<T, V> {
    inner: Rc<Inner<T, V>>,
}

impl<T: EventTarget + 'static, V: ViewportSize + 'static> Pointer<T, V> {
    /// Creates a pointer over `target`, querying `viewport` for the
    /// container size at each scale computation.
    ///
    /// Unless [`PointerOptions::manual_activation`] is set, listeners
    /// are registered before this returns.
    pub fn new(target: T, viewport: V, options: PointerOptions) -> Self {
        let end = EndSignal::new();
        let engine = PointerEngine::new(Settings {
            offset: options.offset,
            scale: options.scale,
            coords: options.coords,
        });
        let state = *engine.state();
        let outputs = PointerOutputs {
            coords: Cell::new(state.coords, &end),
            scale: Cell::new(state.scale, &end),
            movement: Cell::new(state.movement, &end),
            last_move: Cell::new(state.last_move, &end),
            dragging: Cell::new(state.dragging, &end),
            pinching: Cell::new(state.pinching, &end),
            wheeling: Cell::new(state.wheeling, &end),
            mousedown: Cell::new(state.mousedown, &end),
            initial_pinch_scale: Cell::new(state.initial_pinch_scale, &end),
            touch_radius: Cell::new(state.touch_radius, &end),
            offset: Cell::new(options.offset, &end),
        };

        let inner = Rc::new(Inner {
            target,
            viewport,
            engine: RefCell::new(engine),
            outputs,
            end,
            listeners: RefCell::new(Vec::new()),
            activated: Flag::new(false),
            disable_wheel: options.disable_wheel,
        });

        // Runtime offset changes flow back into the engine.
        let weak = Rc::downgrade(&inner);
        inner.outputs.offset.subscribe(move |offset| {
            if let Some(inner) = weak.upgrade() {
                inner.engine.borrow_mut().set_offset(*offset);
            }
        });

        // Teardown releases every listener this instance registered.
        let weak = Rc::downgrade(&inner);
        inner.end.on_end(move || {
            if let Some(inner) = weak.upgrade() {
                for (kind, id) in inner.listeners.take() {
                    inner.target.remove_listener(kind, id);
                }
            }
        });

        let pointer = Self { inner };
        if !options.manual_activation {
            pointer.activate_listeners();
        }
        pointer
    }

    /// Registers one listener per event kind on the target.
    ///
    /// Runs at construction unless deferred by
    /// [`PointerOptions::manual_activation`]. Idempotent, and a no-op
    /// after [`end`](Self::end). The wheel listener is omitted when
    /// [`PointerOptions::disable_wheel`] is set.
    pub fn activate_listeners(&self) {
        let inner = &self.inner;
        if inner.end.is_ended() || inner.activated.replace(true) {
            return;
        }

        let mut kinds = vec![EventKind::Down, EventKind::Up, EventKind::Move];
        if !inner.disable_wheel {
            kinds.push(EventKind::Wheel);
        }

        for kind in kinds {
            let weak = Rc::downgrade(inner);
            let listener: Rc<dyn Fn(&RawEvent)> = Rc::new(move |event| {
                if let Some(inner) = weak.upgrade() {
                    inner.dispatch(kind, event);
                }
            });
            let id = inner.target.add_listener(kind, listener);
            inner.listeners.borrow_mut().push((kind, id));
        }
    }

    /// Feeds one event through the engine, bypassing the target's
    /// listeners. No-op after [`end`](Self::end).
    pub fn handle(&self, kind: EventKind, event: &RawEvent) {
        self.inner.dispatch(kind, event);
    }

    /// The observable output cells.
    #[must_use]
    pub fn outputs(&self) -> &PointerOutputs {
        &self.inner.outputs
    }

    /// The configured scale clamp range.
    #[must_use]
    pub fn scale_bounds(&self) -> ScaleBounds {
        self.inner.engine.borrow().settings().scale
    }

    /// The configured coordinate clamp range.
    #[must_use]
    pub fn coord_bounds(&self) -> Rect {
        self.inner.engine.borrow().settings().coords
    }

    /// Snapshot of the engine state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PointerDebugInfo {
        self.inner.engine.borrow().debug_info()
    }

    /// Fires the end signal: listeners are removed from the target, the
    /// output cells stop propagating, and later events are ignored.
    ///
    /// One-shot and monotonic; subsequent calls are no-ops.
    pub fn end(&self) {
        self.inner.end.fire();
    }

    /// Returns true once [`end`](Self::end) has run.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.inner.end.is_ended()
    }
}

impl<T, V> std::fmt::Debug for Pointer<T, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pointer")
            .field("outputs", &self.inner.outputs)
            .field("ended", &self.inner.end.is_ended())
            .finish_non_exhaustive()
    }
}

impl<T: EventTarget + 'static, V: ViewportSize + 'static> Inner<T, V> {
    fn dispatch(&self, kind: EventKind, event: &RawEvent) {
        if self.end.is_ended() {
            return;
        }
        let viewport = self.viewport.size();
        let dirty = {
            let mut engine = self.engine.borrow_mut();
            match kind {
                EventKind::Down => engine.handle(InputEvent::Down, viewport),
                EventKind::Up => engine.handle(
                    InputEvent::Up {
                        touches: &event.touches,
                    },
                    viewport,
                ),
                EventKind::Move => {
                    let dirty = engine.handle(
                        InputEvent::Move {
                            page: event.page,
                            touches: &event.touches,
                        },
                        viewport,
                    );
                    // Keep the page from scrolling or selecting under an
                    // active drag/pinch.
                    event.prevent_default();
                    dirty
                }
                EventKind::Wheel => engine.handle(
                    InputEvent::Wheel {
                        page: event.page,
                        delta: event.wheel_delta,
                    },
                    viewport,
                ),
            }
        };
        self.sync(dirty);
    }

    /// Mirrors the fields an event wrote into their cells.
    ///
    /// The wheel transient brackets the other emissions: `wheeling` goes
    /// true before the scale/coords updates land and false after, so
    /// subscribers can tell wheel-driven updates apart.
    fn sync(&self, dirty: Dirty) {
        let state = *self.engine.borrow().state();
        let out = &self.outputs;
        if dirty.contains(Dirty::WHEELING) {
            out.wheeling.set(true);
        }
        if dirty.contains(Dirty::DRAGGING) {
            out.dragging.set(state.dragging);
        }
        if dirty.contains(Dirty::PINCHING) {
            out.pinching.set(state.pinching);
        }
        if dirty.contains(Dirty::TOUCH_RADIUS) {
            out.touch_radius.set(state.touch_radius);
        }
        if dirty.contains(Dirty::MOVEMENT) {
            out.movement.set(state.movement);
        }
        if dirty.contains(Dirty::COORDS) {
            out.coords.set(state.coords);
        }
        if dirty.contains(Dirty::LAST_MOVE) {
            out.last_move.set(state.last_move);
        }
        if dirty.contains(Dirty::SCALE) {
            out.scale.set(state.scale);
        }
        if dirty.contains(Dirty::INITIAL_PINCH_SCALE) {
            out.initial_pinch_scale.set(state.initial_pinch_scale);
        }
        if dirty.contains(Dirty::MOUSEDOWN) {
            out.mousedown.set(state.mousedown);
        }
        if dirty.contains(Dirty::WHEELING) {
            out.wheeling.set(false);
        }
    }
}
