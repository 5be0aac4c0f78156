//! Structured error types for the MSET toolkit.

use thiserror::Error;

/// Unified error type for all MSET operations.
#[derive(Debug, Error)]
pub enum MsetError {
    /// Sample size larger than the universe, universe too large for the index
    /// type, or a negative value supplied by a caller.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// Malformed input (unsorted or duplicated sequences, empty lists, bad
    /// configuration values)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Allocation failure while reserving trial or sample storage
    #[error("resource exhaustion: {0}")]
    ResourceExhaustion(String),

    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error (malformed configuration or list files)
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<std::collections::TryReserveError> for MsetError {
    fn from(err: std::collections::TryReserveError) -> Self {
        MsetError::ResourceExhaustion(err.to_string())
    }
}

/// Convenience alias used throughout the MSET crates.
pub type Result<T> = std::result::Result<T, MsetError>;
