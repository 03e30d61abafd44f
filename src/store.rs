//! The observable current view.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};
use crate::view::View;

type Subscriber = Rc<dyn Fn(Option<View>)>;

struct Inner {
    value: Cell<Option<View>>,
    subscribers: RefCell<Vec<(usize, Subscriber)>>,
    next_id: Cell<usize>,
    pending: RefCell<VecDeque<(Subscriber, Option<View>)>>,
    notifying: Cell<bool>,
}

/// A shared handle to the currently resolved view.
///
/// The value is `None` until the first resolution. Clones share the same value and subscribers.
#[derive(Clone)]
pub struct CurrentRoute {
    inner: Rc<Inner>,
}

impl Default for CurrentRoute {
    fn default() -> Self {
        CurrentRoute {
            inner: Rc::new(Inner {
                value: Cell::new(None),
                subscribers: RefCell::new(vec![]),
                next_id: Cell::new(0),
                pending: RefCell::new(VecDeque::new()),
                notifying: Cell::new(false),
            }),
        }
    }
}

impl fmt::Debug for CurrentRoute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CurrentRoute")
            .field("value", &self.inner.value.get())
            .field("subscribers", &self.inner.subscribers.borrow().len())
            .finish()
    }
}

impl CurrentRoute {
    /// Create an unresolved route.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current view, if one has been resolved.
    pub fn get(&self) -> Option<View> {
        self.inner.value.get()
    }

    /// Store a new view and notify subscribers if it changed.
    ///
    /// Returns `true` if the value changed.
    pub fn set(&self, view: View) -> bool {
        if self.inner.value.get() == Some(view) {
            return false;
        }

        self.inner.value.set(Some(view));

        // queue a notification for every subscriber
        {
            let subscribers = self.inner.subscribers.borrow();
            let mut pending = self.inner.pending.borrow_mut();
            for (_, subscriber) in subscribers.iter() {
                pending.push_back((Rc::clone(subscriber), Some(view)));
            }
        }

        // a subscriber set the value while being notified, the outer call drains the queue
        if self.inner.notifying.get() {
            return true;
        }

        let _guard = Notifying::start(&self.inner);
        loop {
            let next = self.inner.pending.borrow_mut().pop_front();
            match next {
                Some((subscriber, value)) => subscriber(value),
                None => break,
            }
        }

        true
    }

    /// Subscribe to changes.
    ///
    /// The callback is called right away with the current value and then after every change. The
    /// subscription ends when the returned `Subscription` is dropped.
    #[must_use = "the subscription ends when dropped"]
    pub fn subscribe<F>(&self, f: F) -> Subscription
    where
        F: Fn(Option<View>) + 'static,
    {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);

        let subscriber: Subscriber = Rc::new(f);
        self.inner.subscribers.borrow_mut().push((id, Rc::clone(&subscriber)));

        subscriber(self.inner.value.get());

        Subscription {
            inner: Rc::downgrade(&self.inner),
            id: id,
        }
    }

    /// The number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }
}

/// Marks a notification pass, ended even if a subscriber panics.
struct Notifying<'a> {
    inner: &'a Inner,
}

impl<'a> Notifying<'a> {
    fn start(inner: &'a Inner) -> Self {
        inner.notifying.set(true);
        Notifying { inner: inner }
    }
}

impl<'a> Drop for Notifying<'a> {
    fn drop(&mut self) {
        // notifications left over from a panicking subscriber are dropped
        self.inner.pending.borrow_mut().clear();
        self.inner.notifying.set(false);
    }
}

/// A subscription to a [`CurrentRoute`], removed when dropped.
///
/// [`CurrentRoute`]: struct.CurrentRoute.html
pub struct Subscription {
    inner: Weak<Inner>,
    id: usize,
}

impl Subscription {
    /// Stop receiving updates.
    pub fn unsubscribe(self) {
        // handled by drop
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Subscription({})", self.id)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.subscribers.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}
