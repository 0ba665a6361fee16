//! Memo repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the five persistence operations over the `memos` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths call `MemoDraft::validate()` before SQL mutations.
//! - Zero-row updates and deletes surface as `RepoError::NotFound`.
//! - Read paths reject invalid persisted state instead of masking it.
//! - List order is `created_at DESC, id ASC` (insertion order breaks ties).

use crate::db::{DbError, DbResult};
use crate::model::memo::{Memo, MemoDraft, MemoId, MemoValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const MEMO_SELECT_SQL: &str = "SELECT
    id,
    title,
    content,
    created_at,
    updated_at
FROM memos";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for memo persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(MemoValidationError),
    Db(DbError),
    NotFound(MemoId),
    InvalidData(String),
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "memo not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted memo data: {message}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "connection is missing required table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "table `{table}` is missing required column `{column}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MemoValidationError> for RepoError {
    fn from(value: MemoValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for memo CRUD operations.
pub trait MemoRepository {
    /// Inserts one memo and returns its store-assigned id.
    fn create_memo(&self, draft: &MemoDraft) -> RepoResult<MemoId>;
    /// Returns all memos, newest creation first.
    fn list_memos(&self) -> RepoResult<Vec<Memo>>;
    /// Gets one memo by id; `None` for a missing row.
    fn get_memo(&self, id: MemoId) -> RepoResult<Option<Memo>>;
    /// Replaces title/content and refreshes `updated_at`.
    fn update_memo(&self, id: MemoId, draft: &MemoDraft) -> RepoResult<()>;
    /// Hard-deletes one memo by id.
    fn delete_memo(&self, id: MemoId) -> RepoResult<()>;
}

/// SQLite-backed memo repository owning its connection.
///
/// Constructed once at startup and closed explicitly on shutdown; callers
/// share it behind whatever synchronization their runtime needs.
pub struct SqliteMemoRepository {
    conn: Connection,
}

impl SqliteMemoRepository {
    /// Constructs a repository from a bootstrapped connection.
    ///
    /// Rejects connections whose schema is not ready, so a misconfigured
    /// caller fails at startup instead of on the first request.
    pub fn try_new(conn: Connection) -> RepoResult<Self> {
        ensure_connection_ready(&conn)?;
        Ok(Self { conn })
    }

    /// Closes the underlying connection.
    pub fn close(self) -> DbResult<()> {
        self.conn.close().map_err(|(_, err)| DbError::Sqlite(err))
    }

    /// Borrows the underlying connection for maintenance and test fixtures.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl MemoRepository for SqliteMemoRepository {
    fn create_memo(&self, draft: &MemoDraft) -> RepoResult<MemoId> {
        draft.validate()?;

        self.conn.execute(
            "INSERT INTO memos (title, content) VALUES (?1, ?2);",
            params![draft.title.as_str(), draft.content.as_str()],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_memos(&self) -> RepoResult<Vec<Memo>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MEMO_SELECT_SQL} ORDER BY created_at DESC, id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut memos = Vec::new();
        while let Some(row) = rows.next()? {
            memos.push(parse_memo_row(row)?);
        }

        Ok(memos)
    }

    fn get_memo(&self, id: MemoId) -> RepoResult<Option<Memo>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MEMO_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_memo_row(row)?));
        }

        Ok(None)
    }

    fn update_memo(&self, id: MemoId, draft: &MemoDraft) -> RepoResult<()> {
        draft.validate()?;

        let changed = self.conn.execute(
            "UPDATE memos
             SET
                title = ?2,
                content = ?3,
                updated_at = strftime('%Y-%m-%d %H:%M:%f', 'now')
             WHERE id = ?1;",
            params![id, draft.title.as_str(), draft.content.as_str()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete_memo(&self, id: MemoId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM memos WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_memo_row(row: &Row<'_>) -> RepoResult<Memo> {
    let id: MemoId = row.get("id")?;
    if id <= 0 {
        return Err(RepoError::InvalidData(format!(
            "non-positive id `{id}` in memos.id"
        )));
    }

    let title: String = row.get("title")?;
    if title.trim().is_empty() {
        return Err(RepoError::InvalidData(format!(
            "blank title in memos.title for id `{id}`"
        )));
    }

    Ok(Memo {
        id,
        title,
        content: row.get("content")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    if !table_exists(conn, "memos")? {
        return Err(RepoError::MissingRequiredTable("memos"));
    }

    for column in ["id", "title", "content", "created_at", "updated_at"] {
        if !table_has_column(conn, "memos", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "memos",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &'static str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
