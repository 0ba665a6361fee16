//! Response envelope and error translation.
//!
//! # Responsibility
//! - Produce the uniform `{success, data|error}` JSON wrapper.
//! - Map repository errors onto HTTP status codes exhaustively.
//!
//! # Invariants
//! - Storage failure detail is logged server-side and never leaked; clients
//!   see a generic internal-error message.
//! - Every error response carries the envelope, including 404 and 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use memopad_core::RepoError;
use serde_json::{json, Value};

pub type ApiResult<T> = Result<T, ApiError>;

/// Client-facing API error carrying the status and envelope message.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.to_string(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: "Memo not found".to_string(),
        }
    }

    pub fn internal(route: &str, detail: impl std::fmt::Display) -> Self {
        error!("event=api_error module=api status=error route={route} error={detail}");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Internal server error".to_string(),
        }
    }

    /// Maps a repository error onto the API taxonomy for the given route.
    pub fn from_repo(route: &str, err: RepoError) -> Self {
        match err {
            RepoError::NotFound(_) => Self::not_found(),
            RepoError::Validation(_) => Self::bad_request("Title is required"),
            other => Self::internal(route, other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "error": self.message,
        }));
        (self.status, body).into_response()
    }
}

/// Wraps payload data in the success envelope.
pub fn success_envelope(data: Value) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": data,
    }))
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use axum::http::StatusCode;
    use memopad_core::{MemoValidationError, RepoError};

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::from_repo("GET /api/memos/{id}", RepoError::NotFound(3));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Memo not found");
    }

    #[test]
    fn validation_maps_to_400() {
        let err = ApiError::from_repo(
            "POST /api/memos",
            RepoError::Validation(MemoValidationError::EmptyTitle),
        );
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Title is required");
    }

    #[test]
    fn storage_failure_maps_to_500_with_generic_message() {
        let err = ApiError::from_repo(
            "GET /api/memos",
            RepoError::InvalidData("corrupt row".to_string()),
        );
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Internal server error");
    }
}
