/*!
Subject/observer state watching, rendered in three numeric bases

A [`Subject`] owns a piece of state and a set of registered observers. Every
call to [`Subject::set_state`] stores the new value and then runs one
notification round, synchronously, on the calling thread. The bundled
variants ([`BinaryObserver`], [`OctalObserver`], [`HexObserver`]) each pull
the current value through a [`StateReader`] and render it as a prefixed
numeric literal.

# Basic usage

```rust
use std::sync::{Arc, Mutex};
use radixwatch::*;

let subject = Subject::new(0u64);

let lines = Arc::new(Mutex::new(Vec::new()));
let sink: LineSink = {
    let lines = lines.clone();
    Arc::new(move |line: &str| lines.lock().unwrap().push(line.to_string()))
};

let _binary = BinaryObserver::new(&subject, sink.clone());
let _octal = OctalObserver::new(&subject, sink);

subject.set_state(9);
assert_eq!(*lines.lock().unwrap(), ["\t in binary: 0b1001", "\t in octal: 0o11"]);
```
*/

mod error;
mod numerals;
mod observer;
mod registry;
mod state;
mod subject;

pub use error::*;
pub use numerals::*;
pub use observer::*;
pub use registry::*;
pub use state::*;
pub use subject::*;
