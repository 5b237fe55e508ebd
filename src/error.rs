//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on the address book.
///
/// Every core operation fails with exactly one of these kinds. Validation
/// happens before any in-memory state changes.
#[derive(Error, Debug)]
pub enum BookError {
    /// A field failed its format check
    #[error("Invalid format: {0}")]
    InvalidFormat(#[from] ValidationError),

    /// A name or phone is absent where one is required
    #[error("Not found: {0}")]
    NotFound(String),

    /// A search matched nothing
    #[error("No search results for: {0}")]
    NoSearchResults(String),

    /// Malformed command or argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Persisting the snapshot failed; the in-memory change is kept
    #[error("Storage write failed: {0}")]
    StorageWrite(String),

    /// The persisted snapshot could not be read back
    #[error("Storage corrupt: {0}")]
    StorageCorrupt(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
