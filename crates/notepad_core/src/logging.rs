//! Logging bootstrap for notepad binaries.
//!
//! # Responsibility
//! - Start file-based rolling logs at most once per process.
//! - Keep events metadata-only: counts and status, never note content.
//!
//! # Invariants
//! - Repeating `init_logging` with an identical config is a no-op.
//! - Any later config that differs from the active one is rejected.
//! - Initialization never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info, LevelFilter};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const LOG_BASENAME: &str = "notepad";
const ROTATE_AT_BYTES: u64 = 10 * 1024 * 1024;
const KEEP_ROTATED_FILES: usize = 5;
const PANIC_SUMMARY_MAX_CHARS: usize = 160;

static ACTIVE_LOGGER: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

struct ActiveLogger {
    config: LogConfig,
    _handle: LoggerHandle,
}

/// Validated logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LevelFilter,
    pub dir: PathBuf,
}

impl LogConfig {
    /// Parses a level name and an absolute directory.
    ///
    /// # Errors
    /// - `UnknownLevel` for anything outside `trace|debug|info|warn|error|off`.
    /// - `InvalidDir` for empty or relative directories.
    pub fn parse(level: &str, dir: impl AsRef<Path>) -> Result<Self, LoggingError> {
        Ok(Self {
            level: parse_level(level)?,
            dir: validate_dir(dir.as_ref())?,
        })
    }
}

/// Error raised while starting the logger.
#[derive(Debug)]
pub enum LoggingError {
    UnknownLevel(String),
    InvalidDir(String),
    CreateDir { dir: PathBuf, source: std::io::Error },
    Backend(flexi_logger::FlexiLoggerError),
    /// A logger with a different config is already running.
    AlreadyActive { active: LogConfig },
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownLevel(value) => write!(
                f,
                "unsupported log level `{value}`; expected trace|debug|info|warn|error|off"
            ),
            Self::InvalidDir(reason) => write!(f, "invalid log directory: {reason}"),
            Self::CreateDir { dir, source } => write!(
                f,
                "failed to create log directory `{}`: {source}",
                dir.display()
            ),
            Self::Backend(err) => write!(f, "failed to start logger: {err}"),
            Self::AlreadyActive { active } => write!(
                f,
                "logging already active at `{}` with level `{}`",
                active.dir.display(),
                active.level
            ),
        }
    }
}

impl Error for LoggingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CreateDir { source, .. } => Some(source),
            Self::Backend(err) => Some(err),
            _ => None,
        }
    }
}

/// Starts rolling file logs for `config`.
///
/// # Errors
/// - `AlreadyActive` when a different config was started earlier.
/// - `CreateDir`/`Backend` when the directory or logger cannot be set up.
pub fn init_logging(config: &LogConfig) -> Result<(), LoggingError> {
    let active = ACTIVE_LOGGER.get_or_try_init(|| start_logger(config))?;
    if active.config != *config {
        return Err(LoggingError::AlreadyActive {
            active: active.config.clone(),
        });
    }
    Ok(())
}

/// Returns the active config, or `None` before `init_logging` succeeds.
pub fn logging_status() -> Option<LogConfig> {
    ACTIVE_LOGGER.get().map(|active| active.config.clone())
}

/// `debug` for debug builds, `info` otherwise.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(config: &LogConfig) -> Result<ActiveLogger, LoggingError> {
    std::fs::create_dir_all(&config.dir).map_err(|source| LoggingError::CreateDir {
        dir: config.dir.clone(),
        source,
    })?;

    let level_filter = config.level.to_string().to_ascii_lowercase();
    let handle = Logger::try_with_str(&level_filter)
        .map_err(LoggingError::Backend)?
        .log_to_file(
            FileSpec::default()
                .directory(config.dir.as_path())
                .basename(LOG_BASENAME),
        )
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_ROTATED_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        // [YYYY-MM-DD HH:MM:SS.ffffff TZ] LEVEL [module] file:line: message
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(LoggingError::Backend)?;

    install_panic_hook();

    info!(
        "event=logging_init module=logging status=ok platform={} build={} version={} level={}",
        std::env::consts::OS,
        if cfg!(debug_assertions) { "debug" } else { "release" },
        env!("CARGO_PKG_VERSION"),
        config.level
    );

    Ok(ActiveLogger {
        config: config.clone(),
        _handle: handle,
    })
}

fn parse_level(level: &str) -> Result<LevelFilter, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok(LevelFilter::Trace),
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" | "warning" => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        "off" => Ok(LevelFilter::Off),
        other => Err(LoggingError::UnknownLevel(other.to_string())),
    }
}

fn validate_dir(dir: &Path) -> Result<PathBuf, LoggingError> {
    if dir.as_os_str().is_empty() {
        return Err(LoggingError::InvalidDir("path is empty".to_string()));
    }
    if !dir.is_absolute() {
        return Err(LoggingError::InvalidDir(format!(
            "`{}` is not absolute",
            dir.display()
        )));
    }
    Ok(dir.to_path_buf())
}

fn install_panic_hook() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        // Payload may carry note content; flatten and cap it.
        let payload = info
            .payload()
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        error!(
            "event=panic module=logging status=error location={} payload={}",
            location,
            single_line_summary(&payload, PANIC_SUMMARY_MAX_CHARS)
        );
        previous(info);
    }));
}

fn single_line_summary(value: &str, max_chars: usize) -> String {
    let flattened = value.replace(['\n', '\r'], " ");
    if flattened.chars().count() <= max_chars {
        return flattened;
    }
    let mut summary: String = flattened.chars().take(max_chars).collect();
    summary.push_str("...");
    summary
}

#[cfg(test)]
mod tests {
    use super::{
        init_logging, logging_status, parse_level, single_line_summary, LogConfig, LoggingError,
    };
    use log::LevelFilter;
    use std::path::PathBuf;

    fn temp_log_dir(suffix: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "notepad-logging-{suffix}-{}",
            std::process::id()
        ))
    }

    #[test]
    fn parse_level_is_case_and_space_insensitive() {
        assert_eq!(parse_level(" INFO ").unwrap(), LevelFilter::Info);
        assert_eq!(parse_level("warning").unwrap(), LevelFilter::Warn);
        assert!(matches!(
            parse_level("verbose"),
            Err(LoggingError::UnknownLevel(_))
        ));
    }

    #[test]
    fn config_rejects_relative_and_empty_dirs() {
        assert!(matches!(
            LogConfig::parse("info", "logs/dev"),
            Err(LoggingError::InvalidDir(_))
        ));
        assert!(matches!(
            LogConfig::parse("info", ""),
            Err(LoggingError::InvalidDir(_))
        ));
    }

    #[test]
    fn summary_flattens_and_truncates() {
        let summary = single_line_summary("line1\nline2\rline3", 8);
        assert!(!summary.contains('\n'));
        assert!(!summary.contains('\r'));
        assert!(summary.ends_with("..."));
        assert_eq!(single_line_summary("short", 8), "short");
    }

    #[test]
    fn init_is_idempotent_and_rejects_conflicting_config() {
        let dir = temp_log_dir("idempotent");
        let config = LogConfig::parse("info", &dir).unwrap();

        init_logging(&config).expect("first init should succeed");
        init_logging(&config).expect("same config should be idempotent");

        let other_level = LogConfig::parse("debug", &dir).unwrap();
        assert!(matches!(
            init_logging(&other_level),
            Err(LoggingError::AlreadyActive { .. })
        ));

        let other_dir = LogConfig::parse("info", temp_log_dir("other")).unwrap();
        assert!(matches!(
            init_logging(&other_dir),
            Err(LoggingError::AlreadyActive { .. })
        ));

        assert_eq!(logging_status(), Some(config));
    }
}
