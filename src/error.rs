//! Error kinds surfaced by gator.
//!
//! Every variant renders as a single line; the binary prints it verbatim
//! to stderr and exits with status 1.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the library.
pub type Result<T, E = GatorError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum GatorError {
    /// The config file exists but is not valid JSON.
    #[error("Invalid JSON in configuration file: {}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The config document is valid JSON but has the wrong shape.
    #[error("{0}")]
    ConfigValidation(String),

    /// The config file is absent and the store was told not to create it.
    #[error("Configuration file not found: {}", .path.display())]
    ConfigMissing { path: PathBuf },

    /// No handler is registered under the dispatched name.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// A handler's argument contract was violated.
    #[error("{0}")]
    MissingArgument(String),

    /// The OS did not report a home directory.
    #[error("Could not determine home directory")]
    NoHomeDir,

    /// Unclassified file system failure.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing to the output sink failed.
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

impl GatorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GatorError::Io {
            path: path.into(),
            source,
        }
    }
}
