//! End-to-end client tests against an in-process server instance.

use memopad_client::{ClientError, EditingTarget, MemoApp, MessageKind, SubmitOutcome};
use memopad_core::{open_db_in_memory, MemoService, SqliteMemoRepository};
use memopad_server::{serve_on, AppState};
use std::sync::mpsc;

/// Runs the real server on an ephemeral port in a background thread and
/// returns its base URL.
fn spawn_server() -> String {
    let (addr_tx, addr_rx) = mpsc::channel();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("test runtime");

        runtime.block_on(async move {
            let conn = open_db_in_memory().unwrap();
            let repo = SqliteMemoRepository::try_new(conn).unwrap();
            let state = AppState::new(MemoService::new(repo));

            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            addr_tx.send(listener.local_addr().unwrap()).unwrap();
            serve_on(listener, state).await.unwrap();
        });
    });

    let addr = addr_rx.recv().expect("server address");
    format!("http://{addr}")
}

#[test]
fn create_edit_delete_full_flow() {
    let base = spawn_server();
    let mut app = MemoApp::new(base);

    // Create through the form flow.
    let outcome = app.submit("  groceries  ", "  milk  ").unwrap();
    let id = match outcome {
        SubmitOutcome::Created(id) => id,
        other => panic!("expected creation, got {other:?}"),
    };
    assert_eq!(app.editing(), EditingTarget::None);
    assert_eq!(app.message().unwrap().kind, MessageKind::Success);

    // The list reflects the trimmed values.
    let memos = app.load_memos().unwrap();
    assert_eq!(memos.len(), 1);
    assert_eq!(memos[0].title, "groceries");
    assert_eq!(memos[0].content, "milk");
    // A settled load clears the loading message.
    assert!(app.message().is_none());

    // Edit: prefill, then save updates the same memo.
    let prefill = app.begin_edit(id).unwrap();
    assert_eq!(prefill.title, "groceries");
    assert_eq!(app.editing(), EditingTarget::Memo(id));

    let outcome = app.submit("groceries v2", &prefill.content).unwrap();
    assert_eq!(outcome, SubmitOutcome::Updated(id));
    assert_eq!(app.editing(), EditingTarget::None);

    let memos = app.load_memos().unwrap();
    assert_eq!(memos[0].title, "groceries v2");
    assert_eq!(memos[0].content, "milk");

    // Delete, then the list is empty and the id is gone.
    app.delete_memo(id).unwrap();
    assert!(app.load_memos().unwrap().is_empty());

    let err = app.client().get_memo(id).unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Memo not found");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[test]
fn server_rejection_is_classified_as_api_error() {
    let base = spawn_server();
    let mut app = MemoApp::new(base);

    let err = app.begin_edit(123).unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 404, .. }));
    // A failed edit fetch must not enter edit mode.
    assert_eq!(app.editing(), EditingTarget::None);

    let message = app.message().unwrap();
    assert_eq!(message.kind, MessageKind::Error);
    assert!(message.text.contains("Server error"));
}

#[test]
fn health_roundtrip() {
    let base = spawn_server();
    let app = MemoApp::new(base);

    let health = app.client().health().unwrap();
    assert_eq!(health.status, "OK");
    assert_eq!(health.message, "Server is running");
}

#[test]
fn deleting_the_memo_under_edit_leaves_edit_mode() {
    let base = spawn_server();
    let mut app = MemoApp::new(base);

    let id = match app.submit("temp", "").unwrap() {
        SubmitOutcome::Created(id) => id,
        other => panic!("expected creation, got {other:?}"),
    };

    app.begin_edit(id).unwrap();
    assert_eq!(app.editing(), EditingTarget::Memo(id));

    app.delete_memo(id).unwrap();
    assert_eq!(app.editing(), EditingTarget::None);
}
