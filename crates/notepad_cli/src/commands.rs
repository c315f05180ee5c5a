//! Subcommand execution against a loaded notepad service.

use crate::cli::Command;
use notepad_core::{render_note, KvStore, NoteMode, NotepadResult, NotepadService, RenderedNote};
use std::io::Write;

/// Runs one subcommand and writes user-facing output to `out`.
pub fn execute<S: KvStore>(
    service: &mut NotepadService<S>,
    command: Command,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::List => {
            for (index, note) in service.notes().iter().enumerate() {
                let marker = if note.is_editing { "*" } else { " " };
                writeln!(
                    out,
                    "{index:>3}{marker} [{}] {}",
                    note.mode.as_str(),
                    note.content
                )?;
            }
        }
        Command::Show => {
            for note in service.notes() {
                writeln!(out, "{}", format_rendered(&render_note(note)))?;
            }
        }
        Command::Add { math, text } => {
            let mode = if math { NoteMode::Math } else { NoteMode::Text };
            report(out, service.append(mode, text), "added", "empty note ignored")?;
        }
        Command::Delete { index } => {
            report(out, service.delete(index), "deleted", "no note at that index")?;
        }
        Command::Edit { index, text } => {
            let outcome = edit(service, index, text);
            report(out, outcome, "updated", "no note at that index")?;
        }
        Command::Discard { index } => {
            report(
                out,
                service.discard_edit(index),
                "edit discarded",
                "no note at that index",
            )?;
        }
        Command::Clear => {
            service.clear_all()?;
            writeln!(out, "cleared {}", service.active_notepad())?;
        }
        Command::Notepads => {
            for name in service.list_notepads() {
                let marker = if name == service.active_notepad() { '*' } else { ' ' };
                writeln!(out, "{marker} {name}")?;
            }
        }
        Command::Create { name } => {
            report(
                out,
                service.create_notepad(&name),
                "created",
                "name is empty, reserved or already taken",
            )?;
        }
        Command::Remove { name } => {
            report(
                out,
                service.delete_notepad(&name),
                "removed",
                "unknown notepad, or it is the last one",
            )?;
        }
        Command::Export { out: None } => {
            write!(out, "{}", service.export_text())?;
        }
        Command::Export { out: Some(dir) } => {
            let path = service.export_to_dir(dir)?;
            writeln!(out, "exported to {}", path.display())?;
        }
        Command::Import { file } => match service.stage_import_file(&file) {
            Ok(_) => {
                let added = service.confirm_import()?;
                writeln!(out, "imported {added} note(s)")?;
            }
            Err(err) => {
                writeln!(out, "ignored: could not read {}: {err}", file.display())?;
            }
        },
        Command::Math { text } => {
            writeln!(out, "{}", notepad_core::translate(&text))?;
        }
    }
    Ok(())
}

/// Begin, buffer and confirm in one step, as a single-shot CLI edit.
fn edit<S: KvStore>(
    service: &mut NotepadService<S>,
    index: usize,
    text: String,
) -> NotepadResult<bool> {
    if index >= service.notes().len() {
        return Ok(false);
    }
    service.begin_edit(index)?;
    service.update_edit_buffer(index, text)?;
    service.confirm_edit(index)
}

fn report(
    out: &mut impl Write,
    outcome: NotepadResult<bool>,
    done: &str,
    ignored: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if outcome? {
        writeln!(out, "{done}")?;
    } else {
        writeln!(out, "ignored: {ignored}")?;
    }
    Ok(())
}

fn format_rendered(rendered: &RenderedNote<'_>) -> String {
    match rendered {
        RenderedNote::Heading { level, text } => {
            format!("{} {}", "#".repeat(usize::from(*level)), text.trim_start())
        }
        RenderedNote::Paragraph(text) => (*text).to_string(),
        RenderedNote::Math(expanded) => format!("$$ {expanded} $$"),
    }
}
