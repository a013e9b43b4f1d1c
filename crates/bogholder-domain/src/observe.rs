//! `PropertyChanged`-style notification machinery shared by models and
//! view-models.
//!
//! Everything here is single-threaded: dispatch happens synchronously on the
//! calling thread and handlers are expected to be side-effect-light.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Identifies one installed change handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Rc<dyn Fn(&str)>;

#[derive(Default)]
struct NotifierInner {
    next_id: Cell<u64>,
    handlers: RefCell<Vec<(SubscriptionId, Handler)>>,
}

/// Subscriber list for property-change notifications.
///
/// The notifier is a cheap-to-clone handle; clones share one subscriber
/// list. `raise` snapshots the handler list before dispatching, so a handler
/// may subscribe or unsubscribe re-entrantly without invalidating the
/// dispatch in progress.
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    inner: Rc<NotifierInner>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `handler` and returns its id.
    pub fn subscribe(&self, handler: impl Fn(&str) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(self.inner.next_id.get() + 1);
        self.inner
            .handlers
            .borrow_mut()
            .push((id, Rc::new(handler)));
        id
    }

    /// Removes the handler registered under `id`. Returns `false` when it was
    /// already removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.inner.handlers.borrow_mut();
        let before = handlers.len();
        handlers.retain(|(existing, _)| *existing != id);
        handlers.len() != before
    }

    /// Notifies every subscriber that `property` changed.
    ///
    /// Panics when `property` is empty: an unnamed notification is a wiring
    /// error, not a user input error.
    pub fn raise(&self, property: &str) {
        assert!(!property.is_empty(), "property name must not be empty");
        let snapshot: Vec<Handler> = self
            .inner
            .handlers
            .borrow()
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        for handler in snapshot {
            handler(property);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.inner.handlers.borrow().len()
    }
}

/// Grants access to an entity's change notifier.
pub trait Observable {
    /// Returns a handle to the entity's notifier.
    fn notifier(&self) -> ChangeNotifier;
}

/// Guard for one installed change handler.
///
/// Detaching is idempotent: the first call to [`Subscription::detach`] (or
/// the drop of the guard, whichever comes first) removes the handler, and
/// later calls are no-ops. Collection removal and view-model teardown are
/// the only places a subscription is detached.
pub struct Subscription {
    source: ChangeNotifier,
    id: SubscriptionId,
    active: Cell<bool>,
}

impl Subscription {
    pub fn new(source: ChangeNotifier, id: SubscriptionId) -> Self {
        Self {
            source,
            id,
            active: Cell::new(true),
        }
    }

    /// Removes the handler from its source notifier, exactly once.
    pub fn detach(&self) {
        if self.active.replace(false) {
            self.source.unsubscribe(self.id);
        }
    }

    pub fn is_attached(&self) -> bool {
        self.active.get()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}
