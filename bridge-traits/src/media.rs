//! Media records supplied by the host catalog.
//!
//! The host media library owns these entities; the playback core only ever
//! holds references to them (cloned records, never the underlying media).

use crate::audio::AudioSource;
use core_queue::QueueItem;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Opaque identifier for a track in the host media catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    /// Construct an identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TrackId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TrackId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A track record from the host media catalog: identifier, display metadata,
/// and a resolvable audio source locator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Catalog identifier.
    pub id: TrackId,
    /// Display title.
    pub title: String,
    /// Display artist, when known.
    pub artist: Option<String>,
    /// Album or collection name, when known.
    pub album: Option<String>,
    /// Total duration as reported by the catalog.
    pub duration: Duration,
    /// Resolvable artwork locator (URL or path), when available.
    pub artwork: Option<String>,
    /// Locator for the playable audio.
    pub source: AudioSource,
}

impl Track {
    /// Create a track with the required fields; optional metadata is attached
    /// with the `with_*` builders.
    pub fn new(id: impl Into<TrackId>, title: impl Into<String>, source: AudioSource) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: None,
            album: None,
            duration: Duration::ZERO,
            artwork: None,
            source,
        }
    }

    /// Attach an artist name.
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    /// Attach an album name.
    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    /// Attach the catalog-reported duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Attach an artwork locator.
    pub fn with_artwork(mut self, artwork: impl Into<String>) -> Self {
        self.artwork = Some(artwork.into());
        self
    }
}

impl QueueItem for Track {
    fn queue_id(&self) -> &str {
        self.id.as_str()
    }
}

/// Snapshot pushed to the system now-playing surface.
///
/// `None` fields are simply absent on the host side; an absent snapshot
/// clears the surface entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NowPlayingInfo {
    /// Display title.
    pub title: String,
    /// Display artist.
    pub artist: Option<String>,
    /// Album or collection name.
    pub album: Option<String>,
    /// Total track duration.
    pub duration: Duration,
    /// Elapsed playback time at the moment of the update.
    pub elapsed: Duration,
    /// Resolvable artwork locator.
    pub artwork: Option<String>,
    /// Whether playback is currently running.
    pub is_playing: bool,
}

impl NowPlayingInfo {
    /// Build a snapshot for a track at the given elapsed time and state.
    pub fn for_track(track: &Track, elapsed: Duration, is_playing: bool) -> Self {
        Self {
            title: track.title.clone(),
            artist: track.artist.clone(),
            album: track.album.clone(),
            duration: track.duration,
            elapsed,
            artwork: track.artwork.clone(),
            is_playing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_track() -> Track {
        Track::new(
            "track-001",
            "Test Song",
            AudioSource::LocalFile {
                path: PathBuf::from("/music/test.flac"),
            },
        )
        .with_artist("Test Artist")
        .with_album("Test Album")
        .with_duration(Duration::from_secs(240))
    }

    #[test]
    fn track_builder_attaches_metadata() {
        let track = sample_track();
        assert_eq!(track.id.as_str(), "track-001");
        assert_eq!(track.artist.as_deref(), Some("Test Artist"));
        assert_eq!(track.album.as_deref(), Some("Test Album"));
        assert_eq!(track.duration, Duration::from_secs(240));
        assert!(track.artwork.is_none());
    }

    #[test]
    fn track_implements_queue_item() {
        let track = sample_track();
        assert_eq!(track.queue_id(), "track-001");
    }

    #[test]
    fn track_serde_roundtrip() {
        let track = sample_track();
        let json = serde_json::to_string(&track).unwrap();
        assert!(json.contains("track-001"));

        let parsed: Track = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, track);
    }

    #[test]
    fn now_playing_info_mirrors_track() {
        let track = sample_track();
        let info = NowPlayingInfo::for_track(&track, Duration::from_secs(12), true);
        assert_eq!(info.title, "Test Song");
        assert_eq!(info.elapsed, Duration::from_secs(12));
        assert!(info.is_playing);
    }
}
