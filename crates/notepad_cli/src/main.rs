//! `notepad` command-line entry point.
//!
//! # Responsibility
//! - Resolve configuration from flags and environment.
//! - Open the durable store and dispatch one subcommand.

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use log::info;
use notepad_core::{
    default_log_level, init_logging, open_store, LogConfig, NotepadService, SqliteKvStore,
};
use std::path::PathBuf;
use std::process::ExitCode;

const DB_DIR_NAME: &str = "notepad";
const DB_FILE_NAME: &str = "notepad.sqlite3";

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("notepad: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(&LogConfig::parse(level, log_dir)?)?;
    }

    let db_path = match cli.db {
        Some(path) => path,
        None => default_db_path()?,
    };
    let conn = open_store(&db_path)?;
    let store = SqliteKvStore::try_new(&conn)?;
    let mut service = NotepadService::load(store)?;

    if let Some(name) = cli.notepad.as_deref() {
        if name != service.active_notepad() && !service.select_notepad(name)? {
            return Err(format!("unknown notepad `{name}`").into());
        }
    }

    info!("event=cli_command module=cli status=start");
    let stdout = std::io::stdout();
    commands::execute(&mut service, cli.command, &mut stdout.lock())
}

fn default_db_path() -> std::io::Result<PathBuf> {
    let dir = dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(DB_DIR_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join(DB_FILE_NAME))
}
