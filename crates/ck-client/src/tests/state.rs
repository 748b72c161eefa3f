use crate::state::{ConnectionState, ConnectionStatus, LoadingTracker};

#[test]
fn given_new_status_then_disconnected() {
    let status = ConnectionStatus::new();

    assert_eq!(status.get(), ConnectionState::Disconnected);
    assert!(!status.is_connected());
}

#[test]
fn given_transition_then_state_updated() {
    let status = ConnectionStatus::new();

    status.set(ConnectionState::Connecting);
    status.set(ConnectionState::Connected);

    assert!(status.is_connected());
}

#[test]
fn given_failed_transition_then_not_connected() {
    let status = ConnectionStatus::new();
    status.set(ConnectionState::Connected);

    status.set(ConnectionState::Failed);

    assert_eq!(status.get(), ConnectionState::Failed);
}

#[test]
fn given_no_guards_then_not_loading() {
    let tracker = LoadingTracker::new();

    assert!(!tracker.is_loading());
    assert_eq!(tracker.in_flight(), 0);
}

#[test]
fn given_live_guard_then_loading() {
    let tracker = LoadingTracker::new();

    let _guard = tracker.start();

    assert!(tracker.is_loading());
    assert_eq!(tracker.in_flight(), 1);
}

#[test]
fn given_dropped_guard_then_idle_again() {
    let tracker = LoadingTracker::new();

    drop(tracker.start());

    assert!(!tracker.is_loading());
}

#[test]
fn given_nested_guards_then_loading_until_last_drop() {
    let tracker = LoadingTracker::new();

    let first = tracker.start();
    let second = tracker.start();
    assert_eq!(tracker.in_flight(), 2);

    drop(first);
    assert!(tracker.is_loading());

    drop(second);
    assert!(!tracker.is_loading());
}
