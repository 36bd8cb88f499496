//! Audio output seams.
//!
//! The host audio engine is reached through [`AudioOutput`], a factory that
//! turns an [`AudioSource`] locator into a live [`OutputHandle`]. Handles are
//! single-track and stateful: the coordinator opens a fresh one every time
//! the current track changes and stops/discards the previous one first.
//! Decoding, rendering, session routing, and level metering all live behind
//! these traits; the core never computes any of it.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Locator for playable audio, resolved by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AudioSource {
    /// Local file accessible to the host runtime.
    LocalFile { path: PathBuf },
    /// Remote HTTP(S) stream to be fetched by the host.
    RemoteStream { url: String },
}

impl AudioSource {
    /// Determine whether the source represents remote content.
    pub fn is_remote(&self) -> bool {
        matches!(self, AudioSource::RemoteStream { .. })
    }

    /// Human-readable locator string, for logging.
    pub fn describe(&self) -> String {
        match self {
            AudioSource::LocalFile { path } => path.display().to_string(),
            AudioSource::RemoteStream { url } => url.clone(),
        }
    }
}

/// Live, stateful connection to the host audio renderer for one track.
///
/// All control methods are pass-through and non-blocking; position and level
/// queries reflect the host engine's current view. The end-of-playback
/// completion signal is *not* part of this trait: the host delivers it by
/// calling the coordinator's track-finished entry point, serialized like any
/// other command.
pub trait OutputHandle {
    /// Begin or resume rendering.
    fn play(&mut self);

    /// Pause rendering, preserving position.
    fn pause(&mut self);

    /// Stop rendering and release the track. The handle is discarded
    /// afterwards; a new one must be opened to play again.
    fn stop(&mut self);

    /// Move the playhead to an absolute position.
    fn seek(&mut self, position: Duration);

    /// Current playhead position.
    fn position(&self) -> Duration;

    /// Total duration of the loaded track.
    fn duration(&self) -> Duration;

    /// Current output power level, normalized to `0.0..=1.0`.
    fn power_level(&self) -> f32;

    /// Whether the track has played to its natural end.
    fn is_finished(&self) -> bool;
}

/// Factory for output handles, implemented by the host audio engine.
pub trait AudioOutput {
    /// Handle type produced by this output.
    type Handle: OutputHandle;

    /// Open a fresh handle for the given source.
    ///
    /// # Errors
    ///
    /// Returns an error when the source cannot be opened or the audio device
    /// is unavailable. The coordinator logs and swallows these; playback for
    /// that track simply does not start.
    fn open(&mut self, source: &AudioSource) -> Result<Self::Handle>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audio_source_classification() {
        let local = AudioSource::LocalFile {
            path: PathBuf::from("/music/a.mp3"),
        };
        assert!(!local.is_remote());
        assert_eq!(local.describe(), "/music/a.mp3");

        let remote = AudioSource::RemoteStream {
            url: "https://example.com/stream".to_string(),
        };
        assert!(remote.is_remote());
    }

    #[test]
    fn audio_source_serde_tagging() {
        let source = AudioSource::RemoteStream {
            url: "https://example.com/a.flac".to_string(),
        };
        let json = serde_json::to_string(&source).unwrap();
        assert!(json.contains("\"kind\":\"remote_stream\""));

        let parsed: AudioSource = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, source);
    }
}
