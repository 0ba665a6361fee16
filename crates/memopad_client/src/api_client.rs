//! REST client for the memo API.
//!
//! # Responsibility
//! - Wrap the six HTTP endpoints behind typed methods.
//! - Decode the `{success, data|error}` envelope.
//!
//! # Invariants
//! - Transport failures ("cannot reach server") and error envelopes ("server
//!   returned an error") stay distinguishable for the UI layer.
//! - No request is retried automatically.

use log::debug;
use memopad_core::{Memo, MemoId};
use serde::Deserialize;
use serde_json::{json, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client-side failure taxonomy.
#[derive(Debug)]
pub enum ClientError {
    /// The server could not be reached or the transport failed mid-request.
    Network(reqwest::Error),
    /// The server answered with an error envelope.
    Api { status: u16, message: String },
    /// The response body did not match the expected envelope shape.
    InvalidResponse(String),
}

impl Display for ClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(err) => write!(f, "cannot reach server: {err}"),
            Self::Api { status, message } => {
                write!(f, "server returned an error ({status}): {message}")
            }
            Self::InvalidResponse(detail) => write!(f, "unexpected server response: {detail}"),
        }
    }
}

impl Error for ClientError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Network(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(value: reqwest::Error) -> Self {
        Self::Network(value)
    }
}

/// Health probe response.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    error: Option<String>,
}

/// Blocking REST client for one memo API base URL.
pub struct MemoApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl MemoApiClient {
    /// Creates a client for `base_url` (e.g. `http://localhost:8080`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            // Builder only fails on TLS/resolver misconfiguration, which this
            // feature set cannot produce.
            .unwrap_or_else(|_| reqwest::blocking::Client::new());
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    /// Lists all memos, newest creation first.
    pub fn list_memos(&self) -> Result<Vec<Memo>, ClientError> {
        let response = self.http.get(self.url("/api/memos")).send()?;
        let data = Self::unwrap_envelope(response)?;
        serde_json::from_value(data)
            .map_err(|err| ClientError::InvalidResponse(format!("bad memo list: {err}")))
    }

    /// Gets one memo by id.
    pub fn get_memo(&self, id: MemoId) -> Result<Memo, ClientError> {
        let response = self.http.get(self.url(&format!("/api/memos/{id}"))).send()?;
        let data = Self::unwrap_envelope(response)?;
        serde_json::from_value(data)
            .map_err(|err| ClientError::InvalidResponse(format!("bad memo: {err}")))
    }

    /// Creates a memo and returns its server-assigned id.
    pub fn create_memo(&self, title: &str, content: &str) -> Result<MemoId, ClientError> {
        let response = self
            .http
            .post(self.url("/api/memos"))
            .json(&json!({"title": title, "content": content}))
            .send()?;
        let data = Self::unwrap_envelope(response)?;
        data.get("id")
            .and_then(Value::as_i64)
            .ok_or_else(|| ClientError::InvalidResponse("create reply misses id".to_string()))
    }

    /// Replaces a memo's title/content.
    pub fn update_memo(&self, id: MemoId, title: &str, content: &str) -> Result<(), ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/api/memos/{id}")))
            .json(&json!({"title": title, "content": content}))
            .send()?;
        Self::unwrap_envelope(response).map(|_| ())
    }

    /// Deletes a memo by id.
    pub fn delete_memo(&self, id: MemoId) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/memos/{id}")))
            .send()?;
        Self::unwrap_envelope(response).map(|_| ())
    }

    /// Checks server liveness.
    pub fn health(&self) -> Result<HealthStatus, ClientError> {
        let response = self.http.get(self.url("/api/health")).send()?;
        let status = response.status().as_u16();
        response
            .json::<HealthStatus>()
            .map_err(|_| ClientError::InvalidResponse(format!("bad health reply (status {status})")))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Splits a response into envelope data or the client error taxonomy.
    fn unwrap_envelope(response: reqwest::blocking::Response) -> Result<Value, ClientError> {
        let status = response.status().as_u16();
        debug!("event=api_response module=client status_code={status}");
        let envelope: ApiEnvelope = response.json().map_err(|err| {
            ClientError::InvalidResponse(format!("non-envelope body (status {status}): {err}"))
        })?;

        if !(200..300).contains(&status) || !envelope.success {
            return Err(ClientError::Api {
                status,
                message: envelope
                    .error
                    .unwrap_or_else(|| "unknown server error".to_string()),
            });
        }

        Ok(envelope.data.unwrap_or(Value::Null))
    }
}
