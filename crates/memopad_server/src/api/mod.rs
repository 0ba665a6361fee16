//! REST API router.
//!
//! Endpoints:
//!   GET    /api/memos
//!   POST   /api/memos
//!   GET    /api/memos/{id}
//!   PUT    /api/memos/{id}
//!   DELETE /api/memos/{id}
//!   GET    /api/health

mod envelope;
mod health;
mod memos;

pub use envelope::{ApiError, ApiResult};

use crate::state::SharedState;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

/// Builds the API router over the shared store state.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route(
            "/api/memos",
            get(memos::list_memos).post(memos::create_memo),
        )
        .route(
            "/api/memos/{id}",
            get(memos::get_memo)
                .put(memos::update_memo)
                .delete(memos::delete_memo),
        )
        .route("/api/health", get(health::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
