//! SQLite-backed key-value store.
//!
//! # Responsibility
//! - Open store files with the `kv_entries` schema upgraded.
//! - Persist string entries, keeping SQL details inside the store boundary.
//!
//! # Invariants
//! - `SqliteKvStore::try_new` only accepts connections at the supported
//!   schema version; `open_store*` guarantees that.
//! - `set` is an upsert and refreshes `updated_at`.

use super::schema::{ensure_current, upgrade};
use super::{KvStore, StoreError, StoreResult};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{Duration, Instant};

/// Opens (or creates) a store file and upgrades its schema.
///
/// Emits `store_open` events with duration and status.
pub fn open_store(path: impl AsRef<Path>) -> StoreResult<Connection> {
    open_with("file", || Connection::open(path))
}

/// Opens a throwaway in-memory store with the schema applied.
pub fn open_store_in_memory() -> StoreResult<Connection> {
    open_with("memory", Connection::open_in_memory)
}

fn open_with(
    mode: &'static str,
    connect: impl FnOnce() -> rusqlite::Result<Connection>,
) -> StoreResult<Connection> {
    let started_at = Instant::now();
    let opened = connect()
        .map_err(StoreError::from)
        .and_then(|mut conn| -> StoreResult<Connection> {
            conn.busy_timeout(Duration::from_secs(5))?;
            upgrade(&mut conn)?;
            Ok(conn)
        });

    match &opened {
        Ok(_) => info!(
            "event=store_open module=store status=ok mode={} duration_ms={}",
            mode,
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=store_open module=store status=error mode={} duration_ms={} error={}",
            mode,
            started_at.elapsed().as_millis(),
            err
        ),
    }
    opened
}

pub struct SqliteKvStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKvStore<'conn> {
    /// Wraps an upgraded connection.
    ///
    /// # Errors
    /// - `SchemaVersion` when the connection did not come from `open_store*`.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        ensure_current(conn)?;
        Ok(Self { conn })
    }

    /// Lists stored keys in ascending order.
    pub fn keys(&self) -> StoreResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM kv_entries ORDER BY key ASC;")?;
        let keys = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(keys)
    }

    /// Last write time of `key` in epoch milliseconds.
    pub fn updated_at(&self, key: &str) -> StoreResult<Option<i64>> {
        let value = self
            .conn
            .query_row(
                "SELECT updated_at FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;
        Ok(value)
    }
}

impl KvStore for SqliteKvStore<'_> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM kv_entries WHERE key = ?1;", [key])?;
        Ok(())
    }
}
