// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot teardown signal shared by a family of cells.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell as Flag, RefCell};
use core::fmt;

/// A one-shot, monotonic end-of-life signal.
///
/// An `EndSignal` starts active and can be fired exactly once; the
/// transition is never reversed. Every [`Cell`](crate::Cell) created
/// against a signal stops storing and propagating values once the signal
/// has fired, and callbacks registered with [`on_end`](Self::on_end) run
/// at that moment (releasing event listeners, typically).
///
/// Handles are cheap clones sharing one underlying signal.
#[derive(Clone, Default)]
pub struct EndSignal {
    inner: Rc<EndInner>,
}

#[derive(Default)]
struct EndInner {
    fired: Flag<bool>,
    callbacks: RefCell<Vec<Box<dyn FnOnce()>>>,
}

impl EndSignal {
    /// Creates a fresh, unfired signal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once the signal has fired.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.inner.fired.get()
    }

    /// Fires the signal, running every registered callback once.
    ///
    /// Subsequent calls are no-ops.
    pub fn fire(&self) {
        if self.inner.fired.replace(true) {
            return;
        }
        let callbacks = self.inner.callbacks.take();
        for callback in callbacks {
            callback();
        }
    }

    /// Registers a callback to run when the signal fires.
    ///
    /// If the signal has already fired, the callback runs immediately.
    pub fn on_end(&self, callback: impl FnOnce() + 'static) {
        if self.is_ended() {
            callback();
        } else {
            self.inner.callbacks.borrow_mut().push(Box::new(callback));
        }
    }
}

impl fmt::Debug for EndSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndSignal")
            .field("fired", &self.is_ended())
            .finish_non_exhaustive()
    }
}
