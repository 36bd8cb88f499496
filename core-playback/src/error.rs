//! Error types for the playback coordinator.
//!
//! Player commands are infallible from the caller's point of view: an absent
//! playlist or output handle degrades to a silent no-op, and a failed track
//! load is logged and reported to observers rather than returned. These
//! errors exist for the internal load path and the logging bootstrap.

use bridge_traits::BridgeError;
use thiserror::Error;

/// Errors internal to the playback coordinator.
#[derive(Error, Debug)]
pub enum PlayerError {
    /// The global tracing subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    /// The host audio output rejected a track load.
    #[error("Output error: {0}")]
    Output(#[from] BridgeError),
}

/// Convenience result type for playback operations.
pub type Result<T> = std::result::Result<T, PlayerError>;
