//! Memos table schema.
//!
//! # Responsibility
//! - Define the single `memos` table and apply it idempotently.
//!
//! # Invariants
//! - `created_at`/`updated_at` defaults come from the same statement clock, so
//!   both columns are equal on insert.
//! - Timestamps are UTC text with millisecond resolution and sort
//!   lexicographically.

use super::DbResult;
use rusqlite::Connection;

const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS memos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now')),
    updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
);";

/// Applies the memos schema on the provided connection.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}
