//! Persistence port and its implementations.
//!
//! # Responsibility
//! - Define the `KvStore` contract (`get`/`set`/`remove`) used by services.
//! - Provide in-memory and SQLite-backed implementations.
//! - Own the typed record layout (`notepads` list, per-notepad note arrays).
//!
//! # Invariants
//! - Values are UTF-8 strings; encoding is the caller's concern.
//! - `remove` on a missing key is not an error.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod records;
pub mod schema;
pub mod sqlite;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error raised by store implementations and record encoding.
#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    /// `kv_entries` schema is missing or newer than this binary understands.
    SchemaVersion { found: u32, supported: u32 },
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::SchemaVersion { found, supported } if found > supported => write!(
                f,
                "store schema version {found} is newer than supported {supported}"
            ),
            Self::SchemaVersion { found, supported } => write!(
                f,
                "store schema version {found} has not been upgraded to {supported}"
            ),
            Self::Encode(err) => write!(f, "failed to encode stored value: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::SchemaVersion { .. } => None,
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Key-value persistence port.
pub trait KvStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}
