//! Error types for the CLI

use std::path::PathBuf;

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Configuration file could not be parsed
    #[error("Invalid configuration file {}: {source}", path.display())]
    ConfigFormat {
        /// File that failed to parse
        path: PathBuf,
        /// Underlying YAML error
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// Script token did not name a calculator action
    #[error("Invalid token: {0}")]
    Token(#[from] keycalc::ParseError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
