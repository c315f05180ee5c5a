//! Display projection for notes.
//!
//! Text notes with a leading run of one to four `#` render as a heading of
//! that level with the run stripped; anything else is a verbatim paragraph.
//! Math notes render as translated shorthand.

use crate::math::translate;
use crate::model::note::{Note, NoteMode};
use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#{1,4}").expect("valid heading regex"));

/// Rendered form of one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedNote<'a> {
    Heading { level: u8, text: &'a str },
    Paragraph(&'a str),
    Math(String),
}

pub fn render_note(note: &Note) -> RenderedNote<'_> {
    match note.mode {
        NoteMode::Text => render_text(&note.content),
        NoteMode::Math => RenderedNote::Math(translate(&note.content)),
    }
}

/// Renders text-mode content.
///
/// A five-hash prefix still yields level 4, keeping the extra `#` in the text.
pub fn render_text(content: &str) -> RenderedNote<'_> {
    match HEADING_PREFIX_RE.find(content) {
        Some(prefix) => RenderedNote::Heading {
            // The regex bounds the run to 1..=4 ASCII bytes.
            level: prefix.len() as u8,
            text: &content[prefix.end()..],
        },
        None => RenderedNote::Paragraph(content),
    }
}
