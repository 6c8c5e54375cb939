// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The value cell: a current value plus an ordered subscriber list.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell as Flag, RefCell};
use core::fmt;

use crate::end::EndSignal;

/// Token identifying a subscription on a [`Cell`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subscription(u64);

/// A readable-and-settable value with push notification.
///
/// A `Cell` holds a current value and an ordered list of subscribers.
/// [`set`](Self::set) stores the value and then notifies subscribers in
/// registration order, unless the shared [`EndSignal`] has fired, in
/// which case `set` stores nothing and notifies no one. Handles are
/// cheap clones sharing one underlying cell.
///
/// Subscribers may subscribe or unsubscribe (including themselves) from
/// inside a notification; additions only see the next `set`. Calling
/// `set` from inside a subscriber is not supported and may skip
/// notifications for the outer value.
pub struct Cell<T> {
    inner: Rc<CellInner<T>>,
    end: EndSignal,
}

struct CellInner<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<Subscriber<T>>>,
    next_id: Flag<u64>,
}

struct Subscriber<T> {
    id: u64,
    // Taken out for the duration of its own invocation, so the list can
    // be re-borrowed by re-entrant (un)subscriptions.
    callback: Option<Box<dyn FnMut(&T)>>,
}

impl<T: Clone> Cell<T> {
    /// Creates a cell holding `initial`, tied to `end`.
    #[must_use]
    pub fn new(initial: T, end: &EndSignal) -> Self {
        Self {
            inner: Rc::new(CellInner {
                value: RefCell::new(initial),
                subscribers: RefCell::new(Vec::new()),
                next_id: Flag::new(0),
            }),
            end: end.clone(),
        }
    }

    /// Returns a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Stores `value` and notifies subscribers in registration order.
    ///
    /// No-op once the end signal has fired. Subscribers are notified on
    /// every `set`, including sets that store the value already present.
    pub fn set(&self, value: T) {
        if self.end.is_ended() {
            return;
        }
        *self.inner.value.borrow_mut() = value.clone();

        // Only subscribers present at entry are notified; additions made
        // from inside a callback see the next set.
        let count = self.inner.subscribers.borrow().len();
        let mut index = 0;
        while index < count {
            let taken = {
                let mut subscribers = self.inner.subscribers.borrow_mut();
                match subscribers.get_mut(index) {
                    None => break,
                    Some(sub) => sub.callback.take().map(|callback| (sub.id, callback)),
                }
            };
            if let Some((id, mut callback)) = taken {
                callback(&value);
                // Put the callback back unless it unsubscribed itself.
                let mut subscribers = self.inner.subscribers.borrow_mut();
                if let Some(sub) = subscribers.iter_mut().find(|s| s.id == id) {
                    sub.callback = Some(callback);
                }
            }
            index += 1;
        }
    }

    /// Registers `callback` to run on each subsequent [`set`](Self::set).
    ///
    /// The callback does not run for the value already present; use
    /// [`get`](Self::get) to read that.
    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.subscribers.borrow_mut().push(Subscriber {
            id,
            callback: Some(Box::new(callback)),
        });
        Subscription(id)
    }

    /// Removes a subscription. Unknown tokens are ignored.
    pub fn unsubscribe(&self, subscription: Subscription) {
        self.inner
            .subscribers
            .borrow_mut()
            .retain(|s| s.id != subscription.0);
    }

    /// The end signal this cell is tied to.
    #[must_use]
    pub fn end_signal(&self) -> &EndSignal {
        &self.end
    }
}

impl<T> Clone for Cell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            end: self.end.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Cell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cell")
            .field("value", &self.inner.value.borrow())
            .field("subscribers", &self.inner.subscribers.borrow().len())
            .field("ended", &self.end.is_ended())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use super::{Cell, EndSignal};

    #[test]
    fn get_returns_initial_then_latest() {
        let end = EndSignal::new();
        let cell = Cell::new(1, &end);
        assert_eq!(cell.get(), 1);

        cell.set(5);
        assert_eq!(cell.get(), 5);
    }

    #[test]
    fn subscribers_run_in_registration_order() {
        let end = EndSignal::new();
        let cell = Cell::new(0, &end);
        let seen = Rc::new(RefCell::new(Vec::new()));

        for tag in ["a", "b"] {
            let seen = Rc::clone(&seen);
            cell.subscribe(move |v| seen.borrow_mut().push((tag, *v)));
        }

        cell.set(1);
        cell.set(2);
        assert_eq!(
            *seen.borrow(),
            alloc::vec![("a", 1), ("b", 1), ("a", 2), ("b", 2)]
        );
    }

    #[test]
    fn set_notifies_even_when_value_is_unchanged() {
        let end = EndSignal::new();
        let cell = Cell::new(7, &end);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let log = Rc::clone(&seen);
        cell.subscribe(move |v| log.borrow_mut().push(*v));

        cell.set(7);
        cell.set(7);
        assert_eq!(*seen.borrow(), alloc::vec![7, 7]);
    }

    #[test]
    fn subscribe_does_not_replay_the_current_value() {
        let end = EndSignal::new();
        let cell = Cell::new(3, &end);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let log = Rc::clone(&seen);
        cell.subscribe(move |v| log.borrow_mut().push(*v));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let end = EndSignal::new();
        let cell = Cell::new(0, &end);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let log = Rc::clone(&seen);
        let sub = cell.subscribe(move |v| log.borrow_mut().push(*v));

        cell.set(1);
        cell.unsubscribe(sub);
        cell.set(2);
        assert_eq!(*seen.borrow(), alloc::vec![1]);
    }

    #[test]
    fn self_unsubscribe_during_notification_is_supported() {
        let end = EndSignal::new();
        let cell = Cell::new(0, &end);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let handle = cell.clone();
        let slot = Rc::new(RefCell::new(None));
        let log = Rc::clone(&seen);
        let token = Rc::clone(&slot);
        let sub = cell.subscribe(move |v| {
            log.borrow_mut().push(*v);
            if let Some(token) = token.borrow_mut().take() {
                handle.unsubscribe(token);
            }
        });
        *slot.borrow_mut() = Some(sub);

        cell.set(1);
        cell.set(2);
        assert_eq!(*seen.borrow(), alloc::vec![1]);
    }

    #[test]
    fn ended_cell_neither_stores_nor_notifies() {
        let end = EndSignal::new();
        let cell = Cell::new(0, &end);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let log = Rc::clone(&seen);
        cell.subscribe(move |v| log.borrow_mut().push(*v));

        cell.set(1);
        end.fire();
        cell.set(2);

        assert_eq!(cell.get(), 1);
        assert_eq!(*seen.borrow(), alloc::vec![1]);
        assert!(cell.end_signal().is_ended());
    }

    #[test]
    fn clones_share_value_and_subscribers() {
        let end = EndSignal::new();
        let cell = Cell::new(0, &end);
        let handle = cell.clone();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let log = Rc::clone(&seen);
        cell.subscribe(move |v| log.borrow_mut().push(*v));

        handle.set(9);
        assert_eq!(cell.get(), 9);
        assert_eq!(*seen.borrow(), alloc::vec![9]);
    }
}
