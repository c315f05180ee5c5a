//! Notepad registry operations and service state.
//!
//! # Responsibility
//! - Own the registry, the active note list and the import staging buffer.
//! - Persist registry changes under `notepads` and drop deleted notepads.
//!
//! # Invariants
//! - Only the active notepad's notes are held in memory.
//! - Domain no-ops return `Ok(false)`; only store failures are errors.

use crate::model::note::Note;
use crate::store::records::{
    load_notepad_names, load_notes, remove_notes, save_notepad_names,
};
use crate::store::{KvStore, StoreError};
use crate::transition::registry::{Registry, RegistryAction, RegistryEffect};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type NotepadResult<T> = Result<T, NotepadError>;

/// Service error for notepad use-cases.
#[derive(Debug)]
pub enum NotepadError {
    /// Persistence-layer failure.
    Store(StoreError),
    /// Export file could not be written.
    Io(std::io::Error),
}

impl Display for NotepadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NotepadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<StoreError> for NotepadError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<std::io::Error> for NotepadError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Notepad facade over a key-value store.
pub struct NotepadService<S: KvStore> {
    pub(super) store: S,
    pub(super) registry: Registry,
    pub(super) notes: Vec<Note>,
    pub(super) staged_import: Vec<String>,
}

impl<S: KvStore> NotepadService<S> {
    /// Loads persisted state, selecting the first notepad.
    ///
    /// A missing or malformed registry yields a single `Default` notepad; it
    /// is not written back until the registry is first mutated.
    pub fn load(store: S) -> NotepadResult<Self> {
        let registry = Registry::new(load_notepad_names(&store)?);
        let notes = load_notes(&store, registry.active())?;
        info!(
            "event=service_load module=service status=ok notepads={} notes={}",
            registry.len(),
            notes.len()
        );
        Ok(Self {
            store,
            registry,
            notes,
            staged_import: Vec::new(),
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn list_notepads(&self) -> &[String] {
        self.registry.names()
    }

    pub fn active_notepad(&self) -> &str {
        self.registry.active()
    }

    /// Appends a new notepad. Empty, reserved or duplicate names are ignored.
    pub fn create_notepad(&mut self, name: &str) -> NotepadResult<bool> {
        let mut next = self.registry.clone();
        if next.apply(RegistryAction::Create(name.to_string())) != RegistryEffect::Created {
            debug!("event=notepad_create module=service status=ignored");
            return Ok(false);
        }

        save_notepad_names(&mut self.store, next.names())?;
        self.registry = next;
        info!(
            "event=notepad_create module=service status=ok notepads={}",
            self.registry.len()
        );
        Ok(true)
    }

    /// Deletes a notepad and its notes, then selects the first remaining one.
    ///
    /// Ignored when `name` is unknown or is the last notepad. In-memory state
    /// moves only once the shrunk name list is stored; a failure to drop the
    /// removed notepad's notes afterwards is still reported.
    pub fn delete_notepad(&mut self, name: &str) -> NotepadResult<bool> {
        let mut next = self.registry.clone();
        let RegistryEffect::Deleted { removed } =
            next.apply(RegistryAction::Delete(name.to_string()))
        else {
            debug!("event=notepad_delete module=service status=ignored");
            return Ok(false);
        };

        let next_notes = load_notes(&self.store, next.active())?;
        save_notepad_names(&mut self.store, next.names())?;
        self.registry = next;
        self.notes = next_notes;
        remove_notes(&mut self.store, &removed)?;
        info!(
            "event=notepad_delete module=service status=ok notepads={}",
            self.registry.len()
        );
        Ok(true)
    }

    /// Switches the active notepad and loads its notes from storage.
    pub fn select_notepad(&mut self, name: &str) -> NotepadResult<bool> {
        let mut next = self.registry.clone();
        if next.apply(RegistryAction::Select(name.to_string())) != RegistryEffect::Selected {
            return Ok(false);
        }

        self.notes = load_notes(&self.store, next.active())?;
        self.registry = next;
        debug!(
            "event=notepad_select module=service status=ok notes={}",
            self.notes.len()
        );
        Ok(true)
    }
}
