//! Note list transitions for the active notepad.

use crate::model::note::{Note, NoteMode};

/// Action applied to the active note list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteAction {
    Append { mode: NoteMode, content: String },
    Delete(usize),
    /// Enters edit mode; ignored when already editing.
    BeginEdit(usize),
    ToggleEdit(usize),
    UpdateEditBuffer { index: usize, value: String },
    ConfirmEdit(usize),
    DiscardEdit(usize),
    Clear,
    /// Appends a decoded import batch.
    AppendBatch(Vec<Note>),
}

/// Persistence effect required after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteEffect {
    /// Nothing changed.
    Ignored,
    /// Write the full list.
    Persist,
    /// Remove the notepad's entry entirely.
    Remove,
}

impl NoteEffect {
    pub fn changed(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

pub fn apply(notes: &mut Vec<Note>, action: NoteAction) -> NoteEffect {
    match action {
        NoteAction::Append { mode, content } => {
            if content.trim().is_empty() {
                return NoteEffect::Ignored;
            }
            notes.push(Note::new(mode, content));
            NoteEffect::Persist
        }
        NoteAction::Delete(index) => {
            if index >= notes.len() {
                return NoteEffect::Ignored;
            }
            notes.remove(index);
            NoteEffect::Persist
        }
        NoteAction::BeginEdit(index) => match notes.get_mut(index) {
            Some(note) if !note.is_editing => {
                note.is_editing = true;
                NoteEffect::Persist
            }
            _ => NoteEffect::Ignored,
        },
        NoteAction::ToggleEdit(index) => with_note(notes, index, |note| {
            note.is_editing = !note.is_editing;
        }),
        NoteAction::UpdateEditBuffer { index, value } => with_note(notes, index, |note| {
            note.edit_value = value;
        }),
        NoteAction::ConfirmEdit(index) => with_note(notes, index, |note| {
            note.content = note.edit_value.clone();
            note.is_editing = false;
        }),
        NoteAction::DiscardEdit(index) => with_note(notes, index, |note| {
            note.edit_value = note.content.clone();
            note.is_editing = false;
        }),
        NoteAction::Clear => {
            notes.clear();
            NoteEffect::Remove
        }
        NoteAction::AppendBatch(batch) => {
            if batch.is_empty() {
                return NoteEffect::Ignored;
            }
            notes.extend(batch);
            NoteEffect::Persist
        }
    }
}

fn with_note(notes: &mut [Note], index: usize, f: impl FnOnce(&mut Note)) -> NoteEffect {
    match notes.get_mut(index) {
        Some(note) => {
            f(note);
            NoteEffect::Persist
        }
        None => NoteEffect::Ignored,
    }
}
