// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panzoom Gesture: a gesture-to-transform engine for pan/zoom surfaces.
//!
//! This crate interprets interleaved pointer, touch, and wheel events
//! into a continuously updated 2D viewport transform: an accumulated
//! translation (`coords`) and a clamped scale factor (`scale`), computed
//! so that the point under the cursor or fingers stays visually fixed
//! while scale changes. It focuses on:
//! - Gesture arbitration: a priority-ordered classifier deciding whether
//!   a move event is a pinch frame, a drag step, residual pinch noise,
//!   or plain hover motion.
//! - The zoom-drift computation: the translation that cancels the
//!   apparent movement of the zoom point across a scale change.
//! - Accumulation: folding per-event deltas into clamped world-space
//!   coordinates, only while a gesture is actually active.
//!
//! It does **not** subscribe to any event source, own a render surface,
//! or apply the transform anywhere. Callers are expected to:
//! - Convert native input events into [`InputEvent`] values and feed
//!   them to [`PointerEngine::handle`] in delivery order, together with
//!   the container's current size.
//! - Read the resulting [`GestureState`] (or watch the [`Dirty`] set
//!   returned per event) and apply `coords`/`scale` to their own visual
//!   container: translation first, then scale, with the transform
//!   origin at the container's top-left corner.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use panzoom_gesture::{InputEvent, PointerEngine, Settings};
//!
//! let mut engine = PointerEngine::new(Settings::default());
//! let viewport = Size::new(800.0, 600.0);
//!
//! // Scroll down at the window centre: zoom in around that point.
//! engine.handle(
//!     InputEvent::Wheel {
//!         page: Point::new(400.0, 300.0),
//!         delta: Vec2::new(0.0, -1.0),
//!     },
//!     viewport,
//! );
//!
//! assert!(engine.state().scale > 1.0);
//! // The staged drift keeps (400, 300) visually stationary.
//! assert!(engine.state().coords.x < 0.0);
//! ```
//!
//! ## Design notes
//!
//! - All handlers run to completion synchronously; there is no internal
//!   queue and no timeout. Gesture phases end only on release events.
//! - Counters double as activity flags (`0` means inactive); see
//!   [`GestureState`] for the contract.
//! - The event stream is trusted. Zero-size containers and non-finite
//!   coordinates produce non-finite outputs instead of errors; callers
//!   own input sanitation.
//!
//! This crate is `no_std`.

#![no_std]

mod classify;
mod dirty;
mod engine;
mod event;
pub mod geometry;
mod settings;
mod state;

pub use classify::{MoveKind, classify_move};
pub use dirty::Dirty;
pub use engine::{PointerDebugInfo, PointerEngine};
pub use event::InputEvent;
pub use settings::{ScaleBounds, Settings, UNBOUNDED};
pub use state::GestureState;
