//! Key-value backends for slot storage.
//!
//! # Invariants
//! - `set_item` overwrites the whole value for a key in one statement.
//! - `get_item` returns `None` for keys never written.

use crate::db::open_db;
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::path::Path;

const KV_TABLE: &str = "kv_slots";

/// Synchronous string key-value store.
pub trait KeyValueStore {
    /// Reads the raw value stored under `key`.
    fn get_item(&self, key: &str) -> RepoResult<Option<String>>;
    /// Replaces the raw value stored under `key`.
    fn set_item(&mut self, key: &str, value: &str) -> RepoResult<()>;
}

/// SQLite-backed store over the `kv_slots` table.
pub struct SqliteKeyValueStore {
    conn: Connection,
}

impl SqliteKeyValueStore {
    /// Wraps a migrated connection.
    ///
    /// # Errors
    /// - `RepoError::MissingRequiredTable` when `kv_slots` does not exist.
    pub fn try_new(conn: Connection) -> RepoResult<Self> {
        if !table_exists(&conn, KV_TABLE)? {
            return Err(RepoError::MissingRequiredTable(KV_TABLE));
        }
        Ok(Self { conn })
    }

    /// Opens the database file at `path`, migrating it when needed.
    pub fn open(path: impl AsRef<Path>) -> RepoResult<Self> {
        let conn = open_db(path)?;
        Self::try_new(conn)
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get_item(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_slots WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&mut self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO kv_slots (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}

/// Process-local store, mainly for tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    items: HashMap<String, String>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_item(&self, key: &str) -> RepoResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> RepoResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
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
