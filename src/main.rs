use radixwatch::{BinaryObserver, HexObserver, OctalObserver, Subject, stdout_sink};
use tracing::Level;

fn main() {
    // initialize tracing
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let subject = Subject::new(0u64);
    let _binary = BinaryObserver::new(&subject, stdout_sink());
    let _octal = OctalObserver::new(&subject, stdout_sink());
    let _hex = HexObserver::new(&subject, stdout_sink());

    println!("First state change:\n");
    subject.set_state(1024);

    println!("Second state change:\n");
    subject.set_state(255);
}
