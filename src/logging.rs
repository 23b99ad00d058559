//! File-backed tracing setup; the terminal itself belongs to the TUI.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive that overrides the config.
pub const LOG_ENV: &str = "CALTRACK_LOG";

/// Errors that can occur while installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log file or its directory could not be created.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The platform does not provide a data directory.
    #[error("could not determine XDG data directory")]
    NoDataDir,

    /// The configured filter directive did not parse.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber is already installed.
    #[error("logging already initialized: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Returns `~/.local/share/caltrack/caltrack.log` (or the platform equivalent).
pub fn default_log_path() -> Result<PathBuf, LoggingError> {
    let dir = dirs::data_dir().ok_or(LoggingError::NoDataDir)?;
    Ok(dir.join("caltrack").join("caltrack.log"))
}

/// Builds the filter from `$CALTRACK_LOG`, falling back to `default_directive`.
pub fn build_filter(default_directive: &str) -> Result<EnvFilter, LoggingError> {
    match std::env::var(LOG_ENV) {
        Ok(directive) if !directive.trim().is_empty() => Ok(EnvFilter::try_new(directive)?),
        _ => Ok(EnvFilter::try_new(default_directive)?),
    }
}

/// Installs a global fmt subscriber appending to `path`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init(path: &Path, default_directive: &str) -> Result<(), LoggingError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let format = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file));

    tracing_subscriber::registry()
        .with(build_filter(default_directive)?)
        .with(format)
        .try_init()?;
    Ok(())
}
