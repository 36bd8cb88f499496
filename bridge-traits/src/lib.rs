//! # Bridge Traits
//!
//! Host capability seams for the playback core.
//!
//! The coordinator in `core-playback` never touches an audio device, a media
//! database, or an OS now-playing surface directly. Everything it consumes
//! from the host environment is expressed here as a trait or a plain data
//! record:
//!
//! - [`Track`] / [`AudioSource`] — the opaque media records a host catalog
//!   supplies. The playlist references them; it never owns the media.
//! - [`AudioOutput`] / [`OutputHandle`] — the host audio engine. One handle
//!   per loaded track; a fresh handle is opened on every track change.
//! - [`NowPlayingSurface`] / [`TransportCommand`] — the system
//!   now-playing/remote-control surface, metadata out and transport
//!   commands in.
//!
//! All traits are synchronous. The coordinator is single-owner and
//! single-threaded; the host is responsible for serializing external events
//! (end-of-track, remote commands) onto its call interface one at a time.

pub mod audio;
pub mod error;
pub mod media;
pub mod remote;

pub use audio::{AudioOutput, AudioSource, OutputHandle};
pub use error::{BridgeError, Result};
pub use media::{NowPlayingInfo, Track, TrackId};
pub use remote::{NowPlayingSurface, TransportCommand};
