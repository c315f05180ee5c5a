//! Command-line surface.
//!
//! Flags fall back to `NOTEPAD_*` environment variables so scripted use does
//! not need to repeat them.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "notepad", version, about = "Text and math notes, grouped into notepads")]
pub struct Cli {
    /// SQLite file holding all notepads.
    #[arg(long, env = "NOTEPAD_DB_PATH", global = true)]
    pub db: Option<PathBuf>,

    /// Notepad to operate on; defaults to the first one.
    #[arg(long, short = 'n', global = true)]
    pub notepad: Option<String>,

    /// trace|debug|info|warn|error|off
    #[arg(long, env = "NOTEPAD_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, env = "NOTEPAD_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print notes with their indices and raw content.
    List,
    /// Print rendered notes (headings, paragraphs, expanded math).
    Show,
    /// Append a note.
    Add {
        /// Store as a math note.
        #[arg(long, short = 'm')]
        math: bool,
        text: String,
    },
    /// Delete the note at INDEX.
    Delete { index: usize },
    /// Replace the content of the note at INDEX.
    Edit { index: usize, text: String },
    /// Drop a pending edit on the note at INDEX.
    Discard { index: usize },
    /// Remove every note from the notepad.
    Clear,
    /// List notepads; the active one is marked with `*`.
    Notepads,
    /// Create a notepad.
    Create { name: String },
    /// Delete a notepad and its notes.
    Remove { name: String },
    /// Write `<notepad>.txt`, or print to stdout when no directory is given.
    Export {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Append notes from an exported file.
    Import { file: PathBuf },
    /// Expand math shorthand without storing anything.
    Math { text: String },
}
