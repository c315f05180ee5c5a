//! Pure state transitions.
//!
//! # Responsibility
//! - Apply user actions to in-memory registry and note list state.
//! - Report which persistence effect, if any, the caller must perform.
//!
//! # Invariants
//! - Transitions perform no I/O and never log note content.
//! - An ignored action leaves state untouched.

pub mod note_list;
pub mod registry;
