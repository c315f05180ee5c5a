//! Export and staged import for the active notepad.
//!
//! # Responsibility
//! - Encode the active list as export text and write it as `<notepad>.txt`.
//! - Stage uploaded text, then drain it into the active list on confirm.
//!
//! # Invariants
//! - A failed file read leaves the staging buffer empty.
//! - Cancelling or confirming always empties the staging buffer.

use super::notepad_service::{NotepadResult, NotepadService};
use crate::codec::{decode_lines, encode_notes, export_file_name};
use crate::store::KvStore;
use log::{info, warn};
use std::path::{Path, PathBuf};

impl<S: KvStore> NotepadService<S> {
    /// Encoded export text for the active notepad.
    pub fn export_text(&self) -> String {
        encode_notes(&self.notes)
    }

    /// File name offered for the active notepad's export.
    pub fn export_file_name(&self) -> String {
        export_file_name(self.registry.active())
    }

    /// Writes the export into `dir` and returns the written path.
    pub fn export_to_dir(&self, dir: impl AsRef<Path>) -> NotepadResult<PathBuf> {
        let path = dir.as_ref().join(self.export_file_name());
        std::fs::write(&path, self.export_text())?;
        info!(
            "event=notepad_export module=service status=ok notes={}",
            self.notes.len()
        );
        Ok(path)
    }

    /// Replaces the staging buffer with the lines of `text`.
    pub fn stage_import_text(&mut self, text: &str) -> usize {
        self.staged_import = text.split('\n').map(str::to_string).collect();
        self.staged_import.len()
    }

    /// Reads `path` into the staging buffer; returns the number of staged lines.
    ///
    /// # Errors
    /// Returns the read error after logging it; the buffer is left empty.
    pub fn stage_import_file(&mut self, path: impl AsRef<Path>) -> std::io::Result<usize> {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(text) => Ok(self.stage_import_text(&text)),
            Err(err) => {
                warn!(
                    "event=import_read module=service status=error error_kind={:?}",
                    err.kind()
                );
                self.staged_import.clear();
                Err(err)
            }
        }
    }

    pub fn staged_line_count(&self) -> usize {
        self.staged_import.len()
    }

    /// Drains staged lines into the active list; returns notes added.
    pub fn confirm_import(&mut self) -> NotepadResult<usize> {
        let lines = std::mem::take(&mut self.staged_import);
        let batch = decode_lines(&lines);
        let added = batch.notes.len();
        if batch.dropped_lines > 0 {
            warn!(
                "event=import_decode module=service status=partial dropped_lines={}",
                batch.dropped_lines
            );
        }
        self.replace_all(batch.notes)?;
        info!(
            "event=notepad_import module=service status=ok added={}",
            added
        );
        Ok(added)
    }

    pub fn cancel_import(&mut self) {
        self.staged_import.clear();
    }
}
