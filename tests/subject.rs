use std::sync::{Arc, Mutex, mpsc};

use radixwatch::*;

#[test]
fn registering_twice_notifies_once_per_round() {
    let subject = Subject::new(0u32);
    let calls = Arc::new(Mutex::new(0));
    let observer: Arc<dyn Observer> = {
        let calls = calls.clone();
        CallbackObserver::new(move || *calls.lock().unwrap() += 1)
    };

    subject.register(&observer);
    subject.register(&observer);
    assert_eq!(subject.observer_count(), 1);

    subject.set_state(1);
    assert_eq!(*calls.lock().unwrap(), 1);
}

#[test]
fn deregistering_an_unknown_observer_errors() {
    let subject = Subject::new(0u32);
    let observer: Arc<dyn Observer> = CallbackObserver::new(|| {});

    assert_eq!(subject.deregister(&observer), Err(NotRegistered(ObserverId::of(&observer))));
}

#[test]
fn observers_read_the_value_stored_by_the_round() {
    let subject = Subject::new(0u32);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let observer: Arc<dyn Observer> = {
        let seen = seen.clone();
        let reader = subject.reader();
        CallbackObserver::new(move || seen.lock().unwrap().push(reader.get()))
    };
    subject.register(&observer);

    subject.set_state(5);
    subject.set_state(11);
    assert_eq!(*seen.lock().unwrap(), [5, 11]);
}

#[test]
fn setting_an_equal_value_still_notifies() {
    let subject = Subject::new(3u32);
    let calls = Arc::new(Mutex::new(0));
    let observer: Arc<dyn Observer> = {
        let calls = calls.clone();
        CallbackObserver::new(move || *calls.lock().unwrap() += 1)
    };
    subject.register(&observer);

    subject.set_state(3);
    subject.set_state(3);
    assert_eq!(*calls.lock().unwrap(), 2);
}

#[test]
fn dropped_observers_are_skipped() {
    let subject = Subject::new(0u32);
    let calls = Arc::new(Mutex::new(0));
    let observer: Arc<dyn Observer> = {
        let calls = calls.clone();
        CallbackObserver::new(move || *calls.lock().unwrap() += 1)
    };
    subject.register(&observer);
    assert_eq!(subject.observer_count(), 1);

    drop(observer);
    assert_eq!(subject.observer_count(), 0);

    subject.set_state(1);
    assert_eq!(*calls.lock().unwrap(), 0);
}

#[test]
fn a_channel_sender_can_observe() {
    let subject = Subject::new(0u32);
    let (sender, receiver) = mpsc::channel();
    let observer: Arc<dyn Observer> = Arc::new(sender);

    subject.register(&observer);
    subject.set_state(1);
    subject.set_state(2);

    assert_eq!(receiver.try_iter().count(), 2);
}

#[test]
fn default_subject_starts_empty() {
    let subject: Subject<u64> = Subject::default();
    assert_eq!(subject.state(), 0);
    assert_eq!(subject.observer_count(), 0);
}

#[test]
fn readers_share_the_subject_state() {
    let subject = Subject::new(1u32);
    let reader = subject.reader();
    let clone = reader.clone();

    subject.set_state(8);
    assert_eq!(reader.get(), 8);
    assert_eq!(clone.with(|value| *value), 8);
}
