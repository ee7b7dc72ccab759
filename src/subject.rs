use std::sync::Arc;

use crate::error::NotRegistered;
use crate::observer::Observer;
use crate::registry::ObserverSet;
use crate::state::{StateCell, StateReader};

/// Holds the observable state value and the registry of observers interested
/// in it.
///
/// The subject is the only writer. Observers hold [`StateReader`] views
/// obtained from [`reader`](Self::reader) and are notified synchronously on
/// every [`set_state`](Self::set_state).
pub struct Subject<T> {
    state: StateCell<T>,
    observers: ObserverSet,
}

impl<T> Subject<T> {
    pub fn new(initial: T) -> Self { Self { state: StateCell::new(initial), observers: ObserverSet::new() } }

    /// Assigns a new state value, then synchronously notifies every registered
    /// observer. This is the sole notification trigger in the system, and it
    /// is unconditional: assigning a value equal to the current one still
    /// triggers a round.
    pub fn set_state(&self, value: T) {
        // The write lock is released before the round starts; observers pull
        // the value through their readers during update()
        self.state.set(value);
        self.notify_observers();
    }

    /// Invokes `update` on every live registered observer, once each, in
    /// registration order.
    pub fn notify_observers(&self) { self.observers.notify() }

    /// Adds an observer to the registry. Idempotent if the observer is already
    /// registered: set semantics, no duplicate notification.
    pub fn register(&self, observer: &Arc<dyn Observer>) { self.observers.insert(observer); }

    /// Removes an observer from the registry, excluding it from future
    /// notification rounds.
    pub fn deregister(&self, observer: &Arc<dyn Observer>) -> Result<(), NotRegistered> { self.observers.remove(observer) }

    /// Read-only handle onto this subject's state, for observers to keep as
    /// their back-reference.
    pub fn reader(&self) -> StateReader<T> { self.state.reader() }

    /// Number of live registered observers.
    pub fn observer_count(&self) -> usize { self.observers.len() }
}

impl<T: Clone> Subject<T> {
    /// Returns a clone of the current state value.
    pub fn state(&self) -> T { self.state.value() }
}

impl<T: Default> Default for Subject<T> {
    fn default() -> Self { Self::new(T::default()) }
}
