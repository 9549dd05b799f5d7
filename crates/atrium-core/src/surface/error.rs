//! Player surface error types

use thiserror::Error;

/// Errors that can occur while driving a player surface
#[derive(Error, Debug)]
pub enum SurfaceError {
    /// Failed to reach the external player
    #[error("Failed to connect to player surface at {addr}: {source}")]
    Connect {
        addr: String,
        source: std::io::Error,
    },

    /// IO failure on the established connection
    #[error("Player surface IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The player sent something we could not interpret
    #[error("Malformed player surface message: {0}")]
    Protocol(String),

    /// The player answered, but refused the operation
    #[error("Player surface rejected {op}: {reason}")]
    Rejected { op: &'static str, reason: String },

    /// The player stopped answering within the response window
    #[error("Timed out waiting for player surface response to {0}")]
    Timeout(&'static str),

    /// The connection to the player is gone
    #[error("Player surface disconnected")]
    Disconnected,
}

/// Result type for surface operations
pub type SurfaceResult<T> = Result<T, SurfaceError>;
