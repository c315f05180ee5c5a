//! Typed record layout over a `KvStore`.
//!
//! # Responsibility
//! - Read/write the notepad name list under [`REGISTRY_KEY`].
//! - Read/write each notepad's note array under the notepad's own name.
//!
//! # Invariants
//! - Malformed or missing values read as absent, never as errors.
//! - Name lists are returned as stored; `Registry::new` normalizes them.

use super::{KvStore, StoreResult};
use crate::model::note::Note;
use log::warn;

/// Key holding the JSON array of notepad names.
pub const REGISTRY_KEY: &str = "notepads";
/// Notepad created when nothing valid is persisted.
pub const DEFAULT_NOTEPAD: &str = "Default";

/// Loads notepad names, falling back to `["Default"]`.
pub fn load_notepad_names<S: KvStore + ?Sized>(store: &S) -> StoreResult<Vec<String>> {
    let Some(raw) = store.get(REGISTRY_KEY)? else {
        return Ok(vec![DEFAULT_NOTEPAD.to_string()]);
    };

    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(names) => Ok(names),
        Err(err) => {
            warn!(
                "event=registry_load module=store status=fallback reason=malformed error={}",
                err
            );
            Ok(vec![DEFAULT_NOTEPAD.to_string()])
        }
    }
}

pub fn save_notepad_names<S: KvStore + ?Sized>(store: &mut S, names: &[String]) -> StoreResult<()> {
    let encoded = serde_json::to_string(names)?;
    store.set(REGISTRY_KEY, &encoded)
}

/// Loads one notepad's notes; absent or malformed entries read as empty.
pub fn load_notes<S: KvStore + ?Sized>(store: &S, notepad: &str) -> StoreResult<Vec<Note>> {
    let Some(raw) = store.get(notepad)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str::<Vec<Note>>(&raw) {
        Ok(notes) => Ok(notes),
        Err(err) => {
            warn!(
                "event=notes_load module=store status=fallback reason=malformed error={}",
                err
            );
            Ok(Vec::new())
        }
    }
}

pub fn save_notes<S: KvStore + ?Sized>(
    store: &mut S,
    notepad: &str,
    notes: &[Note],
) -> StoreResult<()> {
    let encoded = serde_json::to_string(notes)?;
    store.set(notepad, &encoded)
}

pub fn remove_notes<S: KvStore + ?Sized>(store: &mut S, notepad: &str) -> StoreResult<()> {
    store.remove(notepad)
}

#[cfg(test)]
mod tests {
    use super::{load_notepad_names, load_notes, save_notes, DEFAULT_NOTEPAD, REGISTRY_KEY};
    use crate::model::note::{Note, NoteMode};
    use crate::store::memory::MemoryKvStore;
    use crate::store::KvStore;

    #[test]
    fn missing_registry_defaults_to_single_notepad() {
        let store = MemoryKvStore::new();
        assert_eq!(
            load_notepad_names(&store).unwrap(),
            vec![DEFAULT_NOTEPAD.to_string()]
        );
    }

    #[test]
    fn registry_names_are_returned_in_stored_order() {
        let mut store = MemoryKvStore::new();
        store.set(REGISTRY_KEY, r#"["Work","Home"]"#).unwrap();
        assert_eq!(
            load_notepad_names(&store).unwrap(),
            vec!["Work".to_string(), "Home".to_string()]
        );
    }

    #[test]
    fn malformed_registry_defaults_to_single_notepad() {
        let mut store = MemoryKvStore::new();
        store.set(REGISTRY_KEY, "{\"oops\"").unwrap();
        assert_eq!(
            load_notepad_names(&store).unwrap(),
            vec![DEFAULT_NOTEPAD.to_string()]
        );
    }

    #[test]
    fn notes_use_camel_case_fields() {
        let mut store = MemoryKvStore::new();
        save_notes(&mut store, "Default", &[Note::math("a <= b")]).unwrap();

        let raw = store.get("Default").unwrap().unwrap();
        assert_eq!(
            raw,
            r#"[{"mode":"math","content":"a <= b","isEditing":false,"editValue":"a <= b"}]"#
        );
    }

    #[test]
    fn notes_without_edit_buffer_load_with_content_as_buffer() {
        let mut store = MemoryKvStore::new();
        store
            .set("Default", r#"[{"mode":"text","content":"hi"}]"#)
            .unwrap();

        let notes = load_notes(&store, "Default").unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].mode, NoteMode::Text);
        assert_eq!(notes[0].edit_value, "hi");
        assert!(!notes[0].is_editing);
    }

    #[test]
    fn malformed_notes_read_as_empty() {
        let mut store = MemoryKvStore::new();
        store.set("Default", "{not json").unwrap();
        assert!(load_notes(&store, "Default").unwrap().is_empty());
    }
}
