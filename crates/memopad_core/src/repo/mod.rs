//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the memo data-access contract.
//! - Isolate SQLite query details from service/API orchestration.
//!
//! # Invariants
//! - Repository writes enforce `MemoDraft::validate()` before persistence.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod memo_repo;
