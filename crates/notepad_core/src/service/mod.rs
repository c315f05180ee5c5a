//! Notepad use-case service.
//!
//! # Responsibility
//! - Orchestrate pure transitions and the persistence port.
//! - Keep callers (CLI, tests) decoupled from storage details.

mod import;
mod note_list;
mod notepad_service;

pub use notepad_service::{NotepadError, NotepadResult, NotepadService};
