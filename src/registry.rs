use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, Weak};

use tracing::debug;

use crate::error::NotRegistered;
use crate::observer::{Observer, ObserverId};

/// Monotonic key for registry entries. Iteration order is registration order,
/// which makes notification order deterministic for a fixed call sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct RegistrationId(u64);

struct Registered {
    /// The stored `Weak` keeps the observer's allocation address reserved, so
    /// a dead entry can never collide with a newly allocated observer's id.
    id: ObserverId,
    observer: Weak<dyn Observer>,
}

/// The set of observers registered with a subject.
///
/// Membership is unique by [`ObserverId`]. Entries hold `Weak` references:
/// the registry references observers, it does not own them. An observer whose
/// last `Arc` has been dropped is skipped by [`notify`](Self::notify) and no
/// longer counted by [`len`](Self::len).
pub struct ObserverSet {
    entries: RwLock<BTreeMap<RegistrationId, Registered>>,
    next_id: AtomicU64,
}

impl ObserverSet {
    pub fn new() -> Self { Self { entries: RwLock::new(BTreeMap::new()), next_id: AtomicU64::new(0) } }

    /// Adds an observer. Idempotent: re-registering a present observer leaves
    /// the set unchanged. Returns whether the observer was newly added.
    pub fn insert(&self, observer: &Arc<dyn Observer>) -> bool {
        let id = ObserverId::of(observer);
        let mut entries = self.entries.write().unwrap();
        if entries.values().any(|registered| registered.id == id) {
            debug!("Observer {} is already registered", id);
            return false;
        }
        let key = RegistrationId(self.next_id.fetch_add(1, Ordering::Relaxed));
        entries.insert(key, Registered { id, observer: Arc::downgrade(observer) });
        debug!("Registered observer {}", id);
        true
    }

    /// Removes an observer. Errors if it is not currently registered.
    pub fn remove(&self, observer: &Arc<dyn Observer>) -> Result<(), NotRegistered> {
        let id = ObserverId::of(observer);
        let mut entries = self.entries.write().unwrap();
        let key = entries.iter().find(|(_, registered)| registered.id == id).map(|(key, _)| *key);
        match key {
            Some(key) => {
                entries.remove(&key);
                debug!("Deregistered observer {}", id);
                Ok(())
            }
            None => Err(NotRegistered(id)),
        }
    }

    pub fn contains(&self, observer: &Arc<dyn Observer>) -> bool {
        let id = ObserverId::of(observer);
        self.entries.read().unwrap().values().any(|registered| registered.id == id)
    }

    /// Number of live registered observers.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().values().filter(|registered| registered.observer.strong_count() > 0).count()
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Invokes `update` on every live observer, once each, in registration
    /// order. The snapshot is taken up front so no lock is held while observer
    /// callbacks run; registrations and deregistrations made during a round
    /// take effect from the next one.
    pub fn notify(&self) {
        let observers = self.live();
        debug!("Notifying {} observers", observers.len());
        for observer in observers {
            observer.update();
        }
    }

    /// Snapshot of the live observers in registration order.
    fn live(&self) -> Vec<Arc<dyn Observer>> {
        self.entries.read().unwrap().values().filter_map(|registered| registered.observer.upgrade()).collect()
    }
}

impl std::fmt::Debug for ObserverSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ObserverSet {{ live: {} }}", self.len())
    }
}
