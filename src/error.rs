//! Error types for nodeinfo
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using InfoError
pub type Result<T> = std::result::Result<T, InfoError>;

/// Unified error type for info protocol operations
#[derive(Debug, Error)]
pub enum InfoError {
    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    /// Read/write failure on the connection, carried through untouched.
    /// The connection should not be reused after this.
    #[error("Transport error: {0}")]
    Transport(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Malformed header: {0}")]
    MalformedHeader(String),

    #[error("Resource exhausted: body of {requested} bytes exceeds limit of {limit} bytes")]
    ResourceExhausted { requested: usize, limit: usize },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl InfoError {
    /// True if the error came from the underlying connection
    pub fn is_transport(&self) -> bool {
        matches!(self, InfoError::Transport(_))
    }
}
