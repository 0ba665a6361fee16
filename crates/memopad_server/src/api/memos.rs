//! Memo route handlers.
//!
//! # Responsibility
//! - Validate path/body input, invoke one persistence operation, translate
//!   the result.
//!
//! # Invariants
//! - Malformed input is rejected with 400 before touching persistence.
//! - Path ids arrive as raw strings so non-numeric ids produce the spec'd 400
//!   envelope instead of a framework rejection.

use super::envelope::{success_envelope, ApiError, ApiResult};
use crate::state::SharedState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use memopad_core::{MemoDraft, MemoId, MemoService, SqliteMemoRepository};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::MutexGuard;

/// Request body for create and update; fields are defaulted so a missing
/// title reaches the blank-title check.
#[derive(Debug, Deserialize)]
pub struct MemoPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
}

pub async fn list_memos(State(state): State<SharedState>) -> ApiResult<Json<Value>> {
    let route = "GET /api/memos";
    let store = lock_store(&state, route)?;
    let memos = store
        .list_memos()
        .map_err(|err| ApiError::from_repo(route, err))?;
    Ok(success_envelope(json!(memos)))
}

pub async fn create_memo(
    State(state): State<SharedState>,
    Json(payload): Json<MemoPayload>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let route = "POST /api/memos";
    let draft = MemoDraft::new(&payload.title, payload.content.as_deref());
    if draft.validate().is_err() {
        return Err(ApiError::bad_request("Title is required"));
    }

    let store = lock_store(&state, route)?;
    let id = store
        .create_memo(&draft.title, Some(draft.content.as_str()))
        .map_err(|err| ApiError::from_repo(route, err))?;

    Ok((
        StatusCode::CREATED,
        success_envelope(json!({
            "id": id,
            "message": "Memo created successfully",
        })),
    ))
}

pub async fn get_memo(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Value>> {
    let route = "GET /api/memos/{id}";
    let id = parse_memo_id(&raw_id)?;

    let store = lock_store(&state, route)?;
    match store
        .get_memo(id)
        .map_err(|err| ApiError::from_repo(route, err))?
    {
        Some(memo) => Ok(success_envelope(json!(memo))),
        None => Err(ApiError::not_found()),
    }
}

pub async fn update_memo(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
    Json(payload): Json<MemoPayload>,
) -> ApiResult<Json<Value>> {
    let route = "PUT /api/memos/{id}";
    let id = parse_memo_id(&raw_id)?;

    let draft = MemoDraft::new(&payload.title, payload.content.as_deref());
    if draft.validate().is_err() {
        return Err(ApiError::bad_request("Title is required"));
    }

    let store = lock_store(&state, route)?;
    store
        .update_memo(id, &draft.title, Some(draft.content.as_str()))
        .map_err(|err| ApiError::from_repo(route, err))?;

    Ok(success_envelope(json!({
        "message": "Memo updated successfully",
    })))
}

pub async fn delete_memo(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Value>> {
    let route = "DELETE /api/memos/{id}";
    let id = parse_memo_id(&raw_id)?;

    let store = lock_store(&state, route)?;
    store
        .delete_memo(id)
        .map_err(|err| ApiError::from_repo(route, err))?;

    Ok(success_envelope(json!({
        "message": "Memo deleted successfully",
    })))
}

fn parse_memo_id(raw: &str) -> Result<MemoId, ApiError> {
    match raw.trim().parse::<MemoId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::bad_request("Invalid memo ID")),
    }
}

fn lock_store<'a>(
    state: &'a SharedState,
    route: &str,
) -> Result<MutexGuard<'a, MemoService<SqliteMemoRepository>>, ApiError> {
    state
        .store
        .lock()
        .map_err(|_| ApiError::internal(route, "store lock poisoned"))
}
