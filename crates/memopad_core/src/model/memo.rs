//! Memo domain model.
//!
//! # Responsibility
//! - Define the persisted memo record and the validated write model.
//! - Own title validation so every write path shares one rule.
//!
//! # Invariants
//! - `id` is assigned by the store on insert and never reused.
//! - `title` is never empty or whitespace-only after trimming.
//! - `created_at <= updated_at` for every persisted row.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable store-assigned identifier for a memo.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type MemoId = i64;

/// Persisted memo record as returned by read operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memo {
    /// Positive AUTOINCREMENT row id; immutable after creation.
    pub id: MemoId,
    /// Non-empty trimmed title.
    pub title: String,
    /// Body text; empty string when the caller supplied none.
    pub content: String,
    /// UTC `%Y-%m-%d %H:%M:%f` timestamp set once at insert.
    pub created_at: String,
    /// UTC `%Y-%m-%d %H:%M:%f` timestamp refreshed on every update.
    pub updated_at: String,
}

/// Validation failure for memo write input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoValidationError {
    /// Title is empty or whitespace-only after trimming.
    EmptyTitle,
}

impl Display for MemoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "memo title must not be empty or whitespace-only"),
        }
    }
}

impl Error for MemoValidationError {}

/// Write model carrying normalized title/content for create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoDraft {
    /// Trimmed title; must be non-empty to pass `validate`.
    pub title: String,
    /// Trimmed body; missing input becomes the empty string.
    pub content: String,
}

impl MemoDraft {
    /// Builds a draft from raw input, trimming both fields.
    pub fn new(title: impl AsRef<str>, content: Option<&str>) -> Self {
        Self {
            title: title.as_ref().trim().to_string(),
            content: content.unwrap_or_default().trim().to_string(),
        }
    }

    /// Checks the non-empty-title invariant.
    pub fn validate(&self) -> Result<(), MemoValidationError> {
        if self.title.is_empty() {
            return Err(MemoValidationError::EmptyTitle);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoDraft, MemoValidationError};

    #[test]
    fn draft_trims_title_and_content() {
        let draft = MemoDraft::new("  shopping  ", Some("  milk, eggs  "));
        assert_eq!(draft.title, "shopping");
        assert_eq!(draft.content, "milk, eggs");
    }

    #[test]
    fn draft_defaults_missing_content_to_empty() {
        let draft = MemoDraft::new("title", None);
        assert_eq!(draft.content, "");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn whitespace_only_title_fails_validation() {
        let draft = MemoDraft::new("   \t ", Some("body"));
        assert_eq!(draft.validate(), Err(MemoValidationError::EmptyTitle));
    }

    #[test]
    fn memo_serializes_with_wire_field_names() {
        let memo = super::Memo {
            id: 7,
            title: "t".to_string(),
            content: "c".to_string(),
            created_at: "2026-08-29 10:00:00.000".to_string(),
            updated_at: "2026-08-29 10:00:00.000".to_string(),
        };

        let value = serde_json::to_value(&memo).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["title"], "t");
        assert_eq!(value["created_at"], "2026-08-29 10:00:00.000");
    }
}
