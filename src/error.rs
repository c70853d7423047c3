//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors a command handler can produce.
///
/// All of these are recoverable: the dispatcher converts them into
/// error-category output text and the loop keeps running.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A field failed validation (malformed phone or birthday).
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// A contact name was required but absent from the book.
    #[error("Contact '{0}' not found. Use 'add' to create it.")]
    NotFound(String),

    /// Wrong argument count or shape for a command.
    #[error("Invalid arguments. Usage: {usage}")]
    Usage {
        /// The command that was invoked
        command: &'static str,
        /// Expected argument shape
        usage: &'static str,
    },
}

/// Errors that can occur while loading or saving the address book snapshot.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the snapshot file failed
    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot file exists but does not parse as an address book
    #[error("Snapshot is not a valid address book: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
