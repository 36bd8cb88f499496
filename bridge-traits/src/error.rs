//! Error types for host bridge operations.

use thiserror::Error;

/// Errors reported by host-side bridge implementations.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The audio source could not be opened or read (e.g., unreadable media,
    /// network failure, file deleted).
    #[error("Audio source unavailable: {0}")]
    SourceUnavailable(String),

    /// The platform audio device could not be acquired.
    #[error("Audio output unavailable: {0}")]
    OutputUnavailable(String),

    /// The system now-playing surface rejected an update.
    #[error("Now-playing surface error: {0}")]
    SurfaceError(String),

    /// I/O error from the host filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BridgeError {
    /// Returns `true` if this error is transient and the operation may
    /// succeed when retried later.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            BridgeError::SourceUnavailable(_) | BridgeError::OutputUnavailable(_)
        )
    }
}

/// Convenience result type for bridge operations.
pub type Result<T> = std::result::Result<T, BridgeError>;
