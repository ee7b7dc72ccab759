//! The demonstration's observer variants: each renders the subject's current
//! state in one numeric base when notified.

use std::fmt;
use std::sync::Arc;

use crate::observer::Observer;
use crate::state::StateReader;
use crate::subject::Subject;

/// Destination for rendered lines. The demo wires [`stdout_sink`]; tests wire
/// a collecting closure instead.
pub type LineSink = Arc<dyn Fn(&str) + Send + Sync>;

/// A sink that prints each rendered line to standard output.
pub fn stdout_sink() -> LineSink { Arc::new(|line: &str| println!("{line}")) }

/// Renders the state as a `0b`-prefixed binary literal on every notification.
pub struct BinaryObserver<T> {
    state: StateReader<T>,
    out: LineSink,
}

impl<T> BinaryObserver<T>
where T: fmt::Binary + Send + Sync + 'static
{
    /// Creates the observer and registers it with `subject`. The subject holds
    /// a weak reference: dropping the returned `Arc` retires the observer.
    pub fn new(subject: &Subject<T>, out: LineSink) -> Arc<Self> {
        let observer = Arc::new(Self { state: subject.reader(), out });
        let registered: Arc<dyn Observer> = observer.clone();
        subject.register(&registered);
        observer
    }
}

impl<T> Observer for BinaryObserver<T>
where T: fmt::Binary + Send + Sync + 'static
{
    fn update(&self) { self.state.with(|value| (self.out)(&format!("\t in binary: {value:#b}"))) }
}

/// Renders the state as a `0o`-prefixed octal literal on every notification.
pub struct OctalObserver<T> {
    state: StateReader<T>,
    out: LineSink,
}

impl<T> OctalObserver<T>
where T: fmt::Octal + Send + Sync + 'static
{
    /// Creates the observer and registers it with `subject`.
    pub fn new(subject: &Subject<T>, out: LineSink) -> Arc<Self> {
        let observer = Arc::new(Self { state: subject.reader(), out });
        let registered: Arc<dyn Observer> = observer.clone();
        subject.register(&registered);
        observer
    }
}

impl<T> Observer for OctalObserver<T>
where T: fmt::Octal + Send + Sync + 'static
{
    fn update(&self) { self.state.with(|value| (self.out)(&format!("\t in octal: {value:#o}"))) }
}

/// Renders the state as a `0x`-prefixed lowercase hexadecimal literal on every
/// notification.
pub struct HexObserver<T> {
    state: StateReader<T>,
    out: LineSink,
}

impl<T> HexObserver<T>
where T: fmt::LowerHex + Send + Sync + 'static
{
    /// Creates the observer and registers it with `subject`.
    pub fn new(subject: &Subject<T>, out: LineSink) -> Arc<Self> {
        let observer = Arc::new(Self { state: subject.reader(), out });
        let registered: Arc<dyn Observer> = observer.clone();
        subject.register(&registered);
        observer
    }
}

impl<T> Observer for HexObserver<T>
where T: fmt::LowerHex + Send + Sync + 'static
{
    fn update(&self) { self.state.with(|value| (self.out)(&format!("\t in hexadecimal: {value:#x}"))) }
}
