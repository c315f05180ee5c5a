//! Line-oriented export/import codec.
//!
//! # Responsibility
//! - Encode a note list as one tagged line per note.
//! - Decode tagged lines back into notes, dropping unrecognized lines.
//!
//! # Invariants
//! - Tags are the literal two characters `\t` / `\m` followed by a space.
//! - Content containing `\n` does not round-trip; no escaping is applied.
//! - A trailing `\r` is stripped before prefix matching, so content that
//!   itself ends in `\r` loses it on import and does not round-trip.

use crate::model::note::{Note, NoteMode};

pub const TEXT_TAG: &str = "\\t ";
pub const MATH_TAG: &str = "\\m ";
pub const EXPORT_EXTENSION: &str = "txt";

/// Result of decoding an import payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedBatch {
    /// Decoded notes in input order.
    pub notes: Vec<Note>,
    /// Non-blank lines without a recognized tag.
    pub dropped_lines: usize,
}

fn tag_for(mode: NoteMode) -> &'static str {
    match mode {
        NoteMode::Text => TEXT_TAG,
        NoteMode::Math => MATH_TAG,
    }
}

/// Encodes notes as export text; every line, including the last, ends in `\n`.
pub fn encode_notes(notes: &[Note]) -> String {
    let mut out = String::new();
    for note in notes {
        out.push_str(tag_for(note.mode));
        out.push_str(&note.content);
        out.push('\n');
    }
    out
}

/// Decodes one line, or `None` when it carries no recognized tag.
pub fn decode_line(line: &str) -> Option<Note> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if let Some(content) = line.strip_prefix(TEXT_TAG) {
        return Some(Note::text(content));
    }
    line.strip_prefix(MATH_TAG).map(Note::math)
}

pub fn decode_lines<I, L>(lines: I) -> DecodedBatch
where
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    let mut batch = DecodedBatch::default();
    for line in lines {
        let line = line.as_ref();
        match decode_line(line) {
            Some(note) => batch.notes.push(note),
            None if line.trim().is_empty() => {}
            None => batch.dropped_lines += 1,
        }
    }
    batch
}

/// Splits `text` on `\n` and decodes each line.
pub fn decode_text(text: &str) -> DecodedBatch {
    decode_lines(text.split('\n'))
}

/// File name offered for a notepad export.
pub fn export_file_name(notepad: &str) -> String {
    format!("{notepad}.{EXPORT_EXTENSION}")
}
