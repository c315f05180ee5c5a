//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record and its display mode.
//! - Keep the persisted JSON shape (`mode`, `content`, `isEditing`,
//!   `editValue`) stable.
//!
//! # Invariants
//! - A freshly created note is in viewing state with `edit_value == content`.
//! - Records missing `editValue` on disk load with the buffer set to `content`.

use serde::{Deserialize, Serialize};

/// Display mode of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteMode {
    /// Plain text with optional `#` heading prefix.
    Text,
    /// Math shorthand, expanded before display.
    Math,
}

impl NoteMode {
    /// Stable lowercase label, matching the persisted value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Math => "math",
        }
    }

    /// Parses a lowercase label produced by [`NoteMode::as_str`].
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "text" => Some(Self::Text),
            "math" => Some(Self::Math),
            _ => None,
        }
    }
}

/// One user-entered item in a notepad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredNote")]
pub struct Note {
    pub mode: NoteMode,
    /// Committed content, shown while viewing.
    pub content: String,
    /// Whether the note is currently shown as an editable field.
    pub is_editing: bool,
    /// In-progress edit buffer.
    pub edit_value: String,
}

impl Note {
    /// Creates a note in viewing state with the edit buffer primed.
    pub fn new(mode: NoteMode, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            mode,
            edit_value: content.clone(),
            content,
            is_editing: false,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(NoteMode::Text, content)
    }

    pub fn math(content: impl Into<String>) -> Self {
        Self::new(NoteMode::Math, content)
    }

    /// Returns whether the buffer differs from the committed content.
    pub fn has_pending_edit(&self) -> bool {
        self.edit_value != self.content
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredNote {
    mode: NoteMode,
    content: String,
    #[serde(default)]
    is_editing: bool,
    #[serde(default)]
    edit_value: Option<String>,
}

impl From<StoredNote> for Note {
    fn from(value: StoredNote) -> Self {
        let edit_value = value.edit_value.unwrap_or_else(|| value.content.clone());
        Self {
            mode: value.mode,
            content: value.content,
            is_editing: value.is_editing,
            edit_value,
        }
    }
}
