use memopad_core::db::{ensure_schema, open_db, open_db_in_memory};
use memopad_core::{RepoError, SqliteMemoRepository};
use rusqlite::Connection;
use tempfile::TempDir;

#[test]
fn open_db_creates_file_and_schema() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("memopad.db");

    let conn = open_db(&path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM memos;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
    assert!(path.exists());
}

#[test]
fn reopening_file_db_preserves_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("memopad.db");

    {
        let conn = open_db(&path).unwrap();
        conn.execute(
            "INSERT INTO memos (title, content) VALUES ('persisted', 'row');",
            [],
        )
        .unwrap();
    }

    let conn = open_db(&path).unwrap();
    let title: String = conn
        .query_row("SELECT title FROM memos;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(title, "persisted");
}

#[test]
fn open_db_enables_foreign_keys() {
    let conn = open_db_in_memory().unwrap();
    let enabled: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(enabled, 1);
}

#[test]
fn ensure_schema_is_idempotent_on_populated_db() {
    let conn = open_db_in_memory().unwrap();
    conn.execute("INSERT INTO memos (title) VALUES ('kept');", [])
        .unwrap();

    ensure_schema(&conn).unwrap();

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM memos;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn repository_rejects_connection_without_memos_table() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteMemoRepository::try_new(conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("memos"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE memos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            content TEXT
        );",
    )
    .unwrap();

    let result = SqliteMemoRepository::try_new(conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "memos",
            column: "created_at"
        })
    ));
}

#[test]
fn insert_defaults_set_equal_timestamps() {
    let conn = open_db_in_memory().unwrap();
    conn.execute("INSERT INTO memos (title) VALUES ('stamped');", [])
        .unwrap();

    let (created_at, updated_at): (String, String) = conn
        .query_row(
            "SELECT created_at, updated_at FROM memos;",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(created_at, updated_at);
    // Millisecond-resolution UTC text, e.g. `2026-08-29 10:15:00.123`.
    assert_eq!(created_at.len(), 23);
}
