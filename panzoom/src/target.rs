// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Injection points for the event source and the size oracle.
//!
//! The natural host for this kind of engine is a browser window: an
//! ambient event source that is also the authority on the container's
//! rendered size. Both roles are injected here as explicit trait
//! parameters instead, so a pointer instance can be driven entirely from
//! tests or from any windowing stack.

use std::rc::Rc;

use kurbo::Size;

use crate::events::{EventKind, RawEvent};

/// Identifier for a registered listener, scoped to its event kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// An event source a pointer instance can attach to.
///
/// Implementations adapt a concrete source (a DOM node, a winit window,
/// a test script) to the [`EventKind`]/[`RawEvent`] vocabulary. Shared
/// `&self` receivers keep the trait object-safe for sources that hand
/// out non-exclusive handles.
pub trait EventTarget {
    /// Registers `listener` for `kind`, returning an id for later removal.
    fn add_listener(&self, kind: EventKind, listener: Rc<dyn Fn(&RawEvent)>) -> ListenerId;

    /// Removes a previously registered listener. Unknown ids are ignored.
    fn remove_listener(&self, kind: EventKind, id: ListenerId);
}

/// Size oracle queried at each scale computation.
///
/// The engine needs the container's rendered size at the moment of each
/// wheel or pinch frame; implementations should return the current
/// value, not a construction-time snapshot.
pub trait ViewportSize {
    /// The container's current rendered size.
    fn size(&self) -> Size;
}

impl<F: Fn() -> Size> ViewportSize for F {
    fn size(&self) -> Size {
        self()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::ViewportSize;

    #[test]
    fn closures_are_size_oracles() {
        let provider = || Size::new(800.0, 600.0);
        assert_eq!(provider.size(), Size::new(800.0, 600.0));
    }
}
