// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panzoom Cell: push-based value cells with a shared teardown signal.
//!
//! This crate provides the small observable primitive the panzoom facade
//! publishes its outputs through:
//!
//! - [`Cell`]: a current value plus an ordered subscriber list, notified
//!   on every [`set`](Cell::set).
//! - [`EndSignal`]: a one-shot, monotonic end-of-life token shared by a
//!   family of cells. Once fired, every cell tied to it stops storing
//!   and propagating values, and `on_end` callbacks run (releasing event
//!   listeners, typically).
//!
//! There is no dependency graph and no scheduler: propagation is a plain
//! synchronous callback walk, which matches the single-threaded,
//! run-to-completion event model of the engine these cells mirror.
//!
//! ## Minimal example
//!
//! ```rust
//! use panzoom_cell::{Cell, EndSignal};
//! use std::cell::Cell as Flag;
//! use std::rc::Rc;
//!
//! let end = EndSignal::new();
//! let scale = Cell::new(1.0_f64, &end);
//!
//! let last = Rc::new(Flag::new(0.0));
//! let seen = Rc::clone(&last);
//! scale.subscribe(move |v| seen.set(*v));
//!
//! scale.set(1.5);
//! assert_eq!(scale.get(), 1.5);
//! assert_eq!(last.get(), 1.5);
//!
//! // After teardown the cell goes inert.
//! end.fire();
//! scale.set(9.0);
//! assert_eq!(scale.get(), 1.5);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod cell;
mod end;

pub use cell::{Cell, Subscription};
pub use end::EndSignal;
