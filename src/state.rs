use std::sync::{Arc, RwLock};

/// Shared storage for a subject's state. The subject keeps the writable cell
/// and hands out [`StateReader`] views onto the same storage.
pub struct StateCell<T>(Arc<RwLock<T>>);

/// Read-only view of a [`StateCell`]. This is the back-reference an observer
/// keeps to the subject it watches.
pub struct StateReader<T>(Arc<RwLock<T>>);

impl<T> Clone for StateReader<T> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<T> StateCell<T> {
    pub fn new(value: T) -> Self { Self(Arc::new(RwLock::new(value))) }

    /// Replaces the stored value.
    pub fn set(&self, value: T) {
        let mut current = self.0.write().unwrap();
        *current = value;
    }

    /// Create a read-only view sharing this cell's storage.
    pub fn reader(&self) -> StateReader<T> { StateReader(self.0.clone()) }
}

impl<T: Clone> StateCell<T> {
    pub fn value(&self) -> T { self.0.read().unwrap().clone() }
}

impl<T> StateReader<T> {
    /// Calls a closure with a borrow of the current value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.0.read().unwrap();
        f(&*guard)
    }
}

impl<T: Clone> StateReader<T> {
    /// Returns a clone of the current value.
    pub fn get(&self) -> T { self.0.read().unwrap().clone() }
}
