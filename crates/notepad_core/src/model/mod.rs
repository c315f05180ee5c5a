//! Domain model for notepads and their notes.
//!
//! # Responsibility
//! - Define the note record shared by storage, codec and rendering.
//! - Keep per-note edit state on the record itself.
//!
//! # Invariants
//! - A note is either viewing or editing, governed by `is_editing`.
//! - `edit_value` is a buffer; it never replaces `content` until confirmed.

pub mod note;
