use std::sync::Arc;

/// An observer reacts to a subject's state changes.
///
/// `update` carries no payload: the observer reads whatever it needs through
/// the [`StateReader`](crate::StateReader) it holds onto the subject.
pub trait Observer: Send + Sync {
    fn update(&self);
}

/// Identity of an observer, derived from its `Arc` allocation address.
/// Stable across clones of the same `Arc` and across unsizing coercions,
/// which makes it suitable for registration set membership.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ObserverId(usize);

impl ObserverId {
    pub fn of(observer: &Arc<dyn Observer>) -> Self { Self(Arc::as_ptr(observer) as *const () as usize) }
}

impl std::fmt::Display for ObserverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}

/// Wraps a plain closure as an [`Observer`], for callers that do not want a
/// dedicated observer type.
pub struct CallbackObserver(Box<dyn Fn() + Send + Sync>);

impl CallbackObserver {
    /// Observers are registered by `Arc` identity, so the closure is wrapped
    /// into its final allocation here.
    pub fn new<F: Fn() + Send + Sync + 'static>(callback: F) -> Arc<Self> { Arc::new(Self(Box::new(callback))) }
}

impl Observer for CallbackObserver {
    fn update(&self) { (self.0)() }
}

/// A channel sender can stand in as an observer: each notification round
/// sends one unit message.
impl Observer for std::sync::mpsc::Sender<()> {
    fn update(&self) {
        let _ = self.send(()); // Ignore send errors
    }
}
