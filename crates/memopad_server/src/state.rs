//! Shared request-handling state.
//!
//! # Responsibility
//! - Hold the one store instance constructed at startup.
//!
//! # Invariants
//! - The store mutex is never held across an `.await` point.
//! - Shutdown reclaims the store for an explicit close.

use memopad_core::{MemoService, SqliteMemoRepository};
use std::sync::{Arc, Mutex};

pub type SharedState = Arc<AppState>;

/// Application state shared by all route handlers.
///
/// SQLite serializes writes on its own; the mutex only makes the single
/// connection safe to share across the async runtime's worker threads.
pub struct AppState {
    pub store: Mutex<MemoService<SqliteMemoRepository>>,
}

impl AppState {
    /// Wraps an explicitly constructed store for router consumption.
    pub fn new(store: MemoService<SqliteMemoRepository>) -> SharedState {
        Arc::new(Self {
            store: Mutex::new(store),
        })
    }

    /// Reclaims the store from the state, once all router clones are gone.
    pub fn into_store(state: SharedState) -> Option<MemoService<SqliteMemoRepository>> {
        Arc::try_unwrap(state)
            .ok()
            .and_then(|app| app.store.into_inner().ok())
    }
}
