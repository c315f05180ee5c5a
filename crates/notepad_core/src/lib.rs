//! Core domain logic for notepads.
//! This crate is the single source of truth for notepad and note invariants.

pub mod codec;
pub mod logging;
pub mod math;
pub mod model;
pub mod render;
pub mod service;
pub mod store;
pub mod transition;

pub use codec::{decode_text, encode_notes, DecodedBatch};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use math::translate;
pub use model::note::{Note, NoteMode};
pub use render::{render_note, RenderedNote};
pub use service::{NotepadError, NotepadResult, NotepadService};
pub use store::memory::MemoryKvStore;
pub use store::records::{DEFAULT_NOTEPAD, REGISTRY_KEY};
pub use store::sqlite::{open_store, open_store_in_memory, SqliteKvStore};
pub use store::{KvStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
