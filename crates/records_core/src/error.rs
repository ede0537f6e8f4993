//! Error types for the car records pipeline.
//!
//! Record-level rule failures are not errors: they are reported through
//! [`ValidationOutcome`](crate::ValidationOutcome). The types here cover
//! conditions that stop an operation, such as unreadable files or a bad
//! configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for car records operations.
pub type Result<T> = std::result::Result<T, RecordsError>;

/// Main error type for car records operations.
#[derive(Error, Debug)]
pub enum RecordsError {
    /// Input file could not be opened
    #[error("Error opening input file '{}': {source}", .path.display())]
    InputOpen {
        /// Path of the input file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Error log could not be created or truncated
    #[error("Error creating error file '{}': {source}", .path.display())]
    ErrorLogCreate {
        /// Path of the error log
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Error log could not be opened for reading
    #[error("Error opening error file '{}': {source}", .path.display())]
    ErrorLogOpen {
        /// Path of the error log
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Read or write failure while streaming records
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl RecordsError {
    /// Creates an input-open error.
    pub fn input_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::InputOpen {
            path: path.into(),
            source,
        }
    }

    /// Creates an error-log creation error.
    pub fn error_log_create(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ErrorLogCreate {
            path: path.into(),
            source,
        }
    }

    /// Creates an error-log read error.
    pub fn error_log_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ErrorLogOpen {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised while building or loading a [`RecordsConfig`](crate::RecordsConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A configuration value is out of its allowed range
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// Configuration file could not be read
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Read {
        /// Path of the configuration file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for this schema
    #[error("Failed to parse TOML config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    /// Creates an invalid-value error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}
