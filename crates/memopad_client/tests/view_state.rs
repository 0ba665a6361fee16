//! State-machine tests that need no running server.

use memopad_client::{EditingTarget, MemoApp, MessageKind, SubmitOutcome};

fn app() -> MemoApp {
    // Nothing listens here; flows below must not issue a request.
    MemoApp::new("http://127.0.0.1:9")
}

#[test]
fn new_app_starts_idle_with_no_message() {
    let app = app();
    assert_eq!(app.editing(), EditingTarget::None);
    assert!(app.message().is_none());
}

#[test]
fn blank_title_submit_is_rejected_without_a_request() {
    let mut app = app();

    let outcome = app.submit("   ", "some content").unwrap();
    assert_eq!(outcome, SubmitOutcome::RejectedEmptyTitle);

    let message = app.message().expect("validation failure sets a message");
    assert_eq!(message.kind, MessageKind::Error);
    assert_eq!(app.editing(), EditingTarget::None);
}

#[test]
fn cancel_edit_returns_to_idle() {
    let mut app = app();
    // Force edit mode through the only mutation path available without a
    // server: a failed begin_edit must NOT enter edit mode.
    assert!(app.begin_edit(1).is_err());
    assert_eq!(app.editing(), EditingTarget::None);

    app.cancel_edit();
    assert_eq!(app.editing(), EditingTarget::None);
}

#[test]
fn take_message_clears_the_slot() {
    let mut app = app();
    let _ = app.submit("", "");

    assert!(app.take_message().is_some());
    assert!(app.message().is_none());
}

#[test]
fn network_failure_sets_a_cannot_reach_message() {
    let mut app = app();

    let err = app.load_memos().unwrap_err();
    assert!(matches!(err, memopad_client::ClientError::Network(_)));

    let message = app.message().expect("network failure sets a message");
    assert_eq!(message.kind, MessageKind::Error);
    assert!(message.text.contains("Cannot reach the server"));
}
