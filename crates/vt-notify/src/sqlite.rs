//! SQLite store backend (feature `sqlite`).
//!
//! A single `kv` table keyed by `key TEXT PRIMARY KEY` holding JSON text —
//! the durable rendition of the [`KvStore`][crate::KvStore] port.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension};

use crate::error::StoreResult;
use crate::store::KvStore;

/// Persists key-value pairs in an SQLite database file.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and initialise the schema.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS kv (
                 key   TEXT PRIMARY KEY,
                 value TEXT NOT NULL
             );",
        )?;

        Ok(Self { conn })
    }
}

impl KvStore for SqliteStore {
    fn get(&self, key: &str) -> StoreResult<Option<serde_json::Value>> {
        let text: Option<String> = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;

        match text {
            None    => Ok(None),
            Some(t) => Ok(Some(serde_json::from_str(&t)?)),
        }
    }

    fn set(&mut self, key: &str, value: serde_json::Value) -> StoreResult<()> {
        let text = serde_json::to_string(&value)?;
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            rusqlite::params![key, text],
        )?;
        Ok(())
    }

    fn delete(&mut self, key: &str) -> StoreResult<()> {
        self.conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(())
    }
}
