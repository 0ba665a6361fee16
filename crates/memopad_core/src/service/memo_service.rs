//! Memo use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for API callers.
//! - Normalize raw title/content input into validated drafts.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - The service layer remains storage-agnostic.

use crate::model::memo::{Memo, MemoDraft, MemoId};
use crate::repo::memo_repo::{MemoRepository, RepoResult};

/// Use-case service wrapper for memo CRUD operations.
pub struct MemoService<R: MemoRepository> {
    repo: R,
}

impl<R: MemoRepository> MemoService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a memo from raw title/content input.
    ///
    /// # Contract
    /// - Input is trimmed; missing content becomes the empty string.
    /// - Returns the store-assigned memo id.
    pub fn create_memo(&self, title: &str, content: Option<&str>) -> RepoResult<MemoId> {
        let draft = MemoDraft::new(title, content);
        self.repo.create_memo(&draft)
    }

    /// Lists all memos, newest creation first.
    pub fn list_memos(&self) -> RepoResult<Vec<Memo>> {
        self.repo.list_memos()
    }

    /// Gets one memo by id; `None` when no row matches.
    pub fn get_memo(&self, id: MemoId) -> RepoResult<Option<Memo>> {
        self.repo.get_memo(id)
    }

    /// Replaces a memo's title/content from raw input.
    ///
    /// Returns repository-level not-found or validation errors unchanged.
    pub fn update_memo(&self, id: MemoId, title: &str, content: Option<&str>) -> RepoResult<()> {
        let draft = MemoDraft::new(title, content);
        self.repo.update_memo(id, &draft)
    }

    /// Hard-deletes a memo by id.
    pub fn delete_memo(&self, id: MemoId) -> RepoResult<()> {
        self.repo.delete_memo(id)
    }

    /// Releases the underlying repository for explicit shutdown.
    pub fn into_inner(self) -> R {
        self.repo
    }
}
