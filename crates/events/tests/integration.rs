//! Integration tests for the event channel

use droidcheck_events::{channel, AppEvent, EventEmitter, GeneralEvent, GuardEvent};

#[test]
fn test_sender_emits_in_order() {
    let (tx, rx) = channel();
    tx.emit(AppEvent::Guard(GuardEvent::VerificationCompleted {
        passed: false,
        failures: 2,
    }));
    tx.emit_warning("skipped unreadable entry");

    let events: Vec<_> = rx.try_iter().collect();
    assert_eq!(events.len(), 2);
    assert!(matches!(
        events[0],
        AppEvent::Guard(GuardEvent::VerificationCompleted {
            passed: false,
            failures: 2
        })
    ));
    assert!(matches!(
        &events[1],
        AppEvent::General(GeneralEvent::Warning { message, context: None })
            if message == "skipped unreadable entry"
    ));
}

#[test]
fn test_emit_after_receiver_dropped_is_silent() {
    let (tx, rx) = channel();
    drop(rx);
    tx.emit_debug("nobody is listening");
}

#[test]
fn test_event_serializes_with_domain_tag() {
    let event = AppEvent::General(GeneralEvent::warning_with_context("walk error", "permission denied"));
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["domain"], "general");
    assert_eq!(value["event"]["type"], "Warning");
    assert_eq!(value["event"]["context"], "permission denied");
}
