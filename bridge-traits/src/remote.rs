//! System now-playing and remote-control surface.
//!
//! Metadata flows out through [`NowPlayingSurface`]; transport commands flow
//! back in as [`TransportCommand`] values, which the host delivers to the
//! coordinator one at a time as ordinary method calls.

use crate::media::NowPlayingInfo;
use serde::{Deserialize, Serialize};

/// Inbound transport command from the system remote-control surface
/// (lock screen, media keys, headset buttons).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportCommand {
    Play,
    Pause,
    /// Toggle between play and pause.
    Toggle,
    /// Skip to the next track.
    Next,
    /// Skip back, honoring the restart-vs-previous threshold.
    Previous,
}

/// Host-side now-playing display (e.g., an OS media center entry).
///
/// Implementations receive a full snapshot on every track or state change;
/// `None` clears the display.
pub trait NowPlayingSurface {
    /// Replace the displayed snapshot.
    fn update(&mut self, info: Option<NowPlayingInfo>);
}
