// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panzoom: pan/zoom pointer instances over observable transform cells.
//!
//! This crate is the construction and wiring surface over
//! [`panzoom_gesture`]: it subscribes to an injected event source,
//! feeds events through the gesture engine in delivery order, and
//! mirrors the resulting viewport transform into [`panzoom_cell`]
//! cells that a rendering layer can watch. The produced values:
//!
//! - `coords`: the translation to apply to the container, before scaling.
//! - `scale`: the factor to scale it by (transform origin: top-left).
//! - `movement`: the last incremental delta, for incremental consumers.
//! - `dragging` / `pinching` / `wheeling` / `mousedown`: gesture mode
//!   feedback.
//!
//! Nothing is rendered here and no transform is applied anywhere; both
//! the event source ([`EventTarget`]) and the container size oracle
//! ([`ViewportSize`]) are injected, so an instance can be driven
//! entirely from tests.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::rc::Rc;
//! use kurbo::{Point, Size, Vec2};
//! use panzoom::{EventKind, EventTarget, ListenerId, Pointer, PointerOptions, RawEvent};
//!
//! // A target that discards listeners; events are fed manually below.
//! struct Headless;
//! impl EventTarget for Headless {
//!     fn add_listener(&self, _: EventKind, _: Rc<dyn Fn(&RawEvent)>) -> ListenerId {
//!         ListenerId(0)
//!     }
//!     fn remove_listener(&self, _: EventKind, _: ListenerId) {}
//! }
//!
//! let pointer = Pointer::new(
//!     Headless,
//!     || Size::new(800.0, 600.0),
//!     PointerOptions::default(),
//! );
//!
//! // Wheel-zoom in at the window centre; the zoompoint stays fixed.
//! pointer.handle(
//!     EventKind::Wheel,
//!     &RawEvent::wheel(Point::new(400.0, 300.0), Vec2::new(0.0, -1.0)),
//! );
//! assert!(pointer.outputs().scale.get() > 1.0);
//! assert!(pointer.outputs().coords.get().x < 0.0);
//!
//! // Teardown is one-shot; the cells go inert.
//! pointer.end();
//! ```

mod events;
mod options;
mod pointer;
mod target;

pub use events::{EventKind, RawEvent};
pub use options::PointerOptions;
pub use pointer::{Pointer, PointerOutputs};
pub use target::{EventTarget, ListenerId, ViewportSize};

pub use panzoom_cell::{Cell, EndSignal, Subscription};
pub use panzoom_gesture::{
    Dirty, GestureState, PointerDebugInfo, ScaleBounds, Settings, UNBOUNDED,
};
