//! Note list operations on the active notepad.
//!
//! Every operation returns `Ok(true)` when state changed and was persisted,
//! `Ok(false)` when the action was a no-op.

use super::notepad_service::{NotepadResult, NotepadService};
use crate::model::note::{Note, NoteMode};
use crate::store::records::{remove_notes, save_notes};
use crate::store::KvStore;
use crate::transition::note_list::{apply, NoteAction, NoteEffect};
use log::debug;

impl<S: KvStore> NotepadService<S> {
    /// Notes of the active notepad, in display order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn append(&mut self, mode: NoteMode, content: impl Into<String>) -> NotepadResult<bool> {
        self.dispatch(NoteAction::Append {
            mode,
            content: content.into(),
        })
    }

    pub fn delete(&mut self, index: usize) -> NotepadResult<bool> {
        self.dispatch(NoteAction::Delete(index))
    }

    /// Enters edit mode for one note; ignored when it is already editing.
    pub fn begin_edit(&mut self, index: usize) -> NotepadResult<bool> {
        self.dispatch(NoteAction::BeginEdit(index))
    }

    pub fn toggle_edit(&mut self, index: usize) -> NotepadResult<bool> {
        self.dispatch(NoteAction::ToggleEdit(index))
    }

    /// Overwrites the edit buffer without touching committed content.
    pub fn update_edit_buffer(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> NotepadResult<bool> {
        self.dispatch(NoteAction::UpdateEditBuffer {
            index,
            value: value.into(),
        })
    }

    pub fn confirm_edit(&mut self, index: usize) -> NotepadResult<bool> {
        self.dispatch(NoteAction::ConfirmEdit(index))
    }

    pub fn discard_edit(&mut self, index: usize) -> NotepadResult<bool> {
        self.dispatch(NoteAction::DiscardEdit(index))
    }

    /// Empties the active notepad and removes its stored entry.
    pub fn clear_all(&mut self) -> NotepadResult<bool> {
        self.dispatch(NoteAction::Clear)
    }

    /// Appends an imported batch; existing notes are kept.
    pub fn replace_all(&mut self, notes: Vec<Note>) -> NotepadResult<bool> {
        self.dispatch(NoteAction::AppendBatch(notes))
    }

    /// Applies `action` to a copy of the list and keeps it only once the
    /// store write succeeds.
    fn dispatch(&mut self, action: NoteAction) -> NotepadResult<bool> {
        let label = action_label(&action);
        let mut next = self.notes.clone();
        let effect = apply(&mut next, action);
        match effect {
            NoteEffect::Ignored => {}
            NoteEffect::Persist => save_notes(&mut self.store, self.registry.active(), &next)?,
            NoteEffect::Remove => remove_notes(&mut self.store, self.registry.active())?,
        }
        if effect.changed() {
            self.notes = next;
        }
        debug!(
            "event=note_{} module=service status={} notes={}",
            label,
            if effect.changed() { "ok" } else { "ignored" },
            self.notes.len()
        );
        Ok(effect.changed())
    }
}

fn action_label(action: &NoteAction) -> &'static str {
    match action {
        NoteAction::Append { .. } => "append",
        NoteAction::Delete(_) => "delete",
        NoteAction::BeginEdit(_) => "begin_edit",
        NoteAction::ToggleEdit(_) => "toggle_edit",
        NoteAction::UpdateEditBuffer { .. } => "update_edit_buffer",
        NoteAction::ConfirmEdit(_) => "confirm_edit",
        NoteAction::DiscardEdit(_) => "discard_edit",
        NoteAction::Clear => "clear",
        NoteAction::AppendBatch(_) => "import",
    }
}
