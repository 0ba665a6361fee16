//! Domain model for the memo entity.
//!
//! # Responsibility
//! - Define the canonical memo record and its validated write model.
//!
//! # Invariants
//! - Every memo is identified by a positive, store-assigned `MemoId`.
//! - Deletion is a hard delete; there is no tombstone state.

pub mod memo;
