//! HTTP API layer for Memopad.
//!
//! # Responsibility
//! - Map the five memo REST endpoints onto `memopad_core` persistence.
//! - Translate repository results into `{success, data|error}` envelopes and
//!   HTTP status codes.
//!
//! # Invariants
//! - Handlers validate input before any persistence call.
//! - No handler performs more than one persistence call or holds cross-request
//!   state.

pub mod api;
pub mod config;
pub mod state;

pub use api::build_router;
pub use config::ServerConfig;
pub use state::{AppState, SharedState};

/// Serves the API on an already-bound listener until the task is cancelled.
///
/// Split from `main` so integration tests can run the real server on an
/// ephemeral port.
pub async fn serve_on(
    listener: tokio::net::TcpListener,
    state: SharedState,
) -> std::io::Result<()> {
    axum::serve(listener, build_router(state)).await
}
