//! Client layer for Memopad.
//!
//! # Responsibility
//! - Issue REST calls against the memo API.
//! - Own the view state (edit mode, message slot) the UI renders from.
//! - Render memo lists as escaped HTML fragments.
//!
//! # Invariants
//! - The client never holds authoritative state; every local copy is a cache
//!   invalidated by the next list/get response.

pub mod api_client;
pub mod render;
pub mod view;

pub use api_client::{ClientError, MemoApiClient};
pub use view::{EditingTarget, MemoApp, MessageKind, StatusMessage, SubmitOutcome};
