//! Listener registry and RAII subscription handles.
//!
//! DESIGN
//! ======
//! The session store and in-memory navigator both publish change
//! notifications through `Listeners`. Listeners are snapshotted before being
//! invoked, so a listener may subscribe, unsubscribe, or trigger another
//! notification without hitting an outstanding `RefCell` borrow.

#[cfg(test)]
#[path = "observer_test.rs"]
mod observer_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Entry<T> = (u64, Rc<dyn Fn(&T)>);

struct Registry<T: ?Sized> {
    next_id: Cell<u64>,
    entries: RefCell<Vec<Entry<T>>>,
}

/// Ordered set of change listeners for values of type `T`.
pub struct Listeners<T: ?Sized> {
    registry: Rc<Registry<T>>,
}

impl<T: ?Sized + 'static> Listeners<T> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(Registry { next_id: Cell::new(0), entries: RefCell::new(Vec::new()) }),
        }
    }

    /// Register `listener`; it stays registered until the returned handle drops.
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let id = self.registry.next_id.get();
        self.registry.next_id.set(id + 1);
        self.registry.entries.borrow_mut().push((id, Rc::new(listener)));

        let weak: Weak<Registry<T>> = Rc::downgrade(&self.registry);
        Subscription::new(move || {
            if let Some(registry) = weak.upgrade() {
                registry.entries.borrow_mut().retain(|(entry_id, _)| *entry_id != id);
            }
        })
    }

    /// Invoke every listener registered at the time of the call.
    pub fn notify(&self, value: &T) {
        let snapshot: Vec<Rc<dyn Fn(&T)>> =
            self.registry.entries.borrow().iter().map(|(_, listener)| Rc::clone(listener)).collect();
        for listener in snapshot {
            listener(value);
        }
    }

    pub fn len(&self) -> usize {
        self.registry.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: ?Sized + 'static> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle that unregisters its listener when dropped.
#[must_use = "dropping a Subscription unregisters the listener immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    /// A handle with nothing to cancel, for sources whose lifetime is owned elsewhere.
    pub fn detached() -> Self {
        Self { cancel: None }
    }

    /// Keep the listener registered for the lifetime of its source.
    pub fn keep(mut self) {
        self.cancel = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.cancel.is_some()).finish()
    }
}
