//! Error types for the hcalist-core library.

use thiserror::Error;

/// Result type alias for hcalist operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while discovering host channel adapters.
#[derive(Error, Debug)]
pub enum Error {
    /// The management subsystem could not be initialized.
    #[error("Management subsystem unavailable: {0}")]
    SubsystemUnavailable(String),

    /// The subsystem was reachable but could not produce a device list.
    #[error("Failed to list adapters: {0}")]
    EnumerationError(String),

    /// An adapter name does not fit the fixed-width name record.
    #[error("Invalid adapter name: {0}")]
    InvalidName(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
