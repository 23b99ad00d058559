use crate::config::ConfigError;
use crate::logging::LoggingError;

/// Errors that can occur in the TUI layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The log subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),
}
