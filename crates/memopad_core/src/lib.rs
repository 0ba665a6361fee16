//! Core domain logic for Memopad.
//! This crate is the single source of truth for memo persistence invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging};
pub use model::memo::{Memo, MemoDraft, MemoId, MemoValidationError};
pub use repo::memo_repo::{MemoRepository, RepoError, RepoResult, SqliteMemoRepository};
pub use service::memo_service::MemoService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
