//! Health-check route.

use axum::Json;
use serde_json::{json, Value};

/// Liveness probe; replies without touching persistence.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "message": "Server is running",
    }))
}
