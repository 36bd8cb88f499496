//! # Core Playback
//!
//! The playback coordinator: one playlist cursor, one output handle, one
//! list of observers.
//!
//! ## Overview
//!
//! [`Player`] translates user and host commands into cursor moves, output
//! commands, and observer notifications. It owns a
//! [`Playlist`](core_queue::Playlist) of [`Track`](bridge_traits::Track)
//! records and drives the host audio engine through the
//! [`AudioOutput`](bridge_traits::AudioOutput) seam. Everything is
//! synchronous and single-owner: commands execute on the caller's thread
//! with no internal locking, and the host serializes external events
//! (end-of-track, transport commands) onto the player one at a time.
//!
//! Observers register through a token-keyed registry and receive
//! track-change, state-change, queue-end, and load-failure notifications
//! synchronously, in registration order.

pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod player;

pub use config::PlayerConfig;
pub use error::{PlayerError, Result};
pub use events::{ObserverRegistry, PlayerEvent, PlayerObserver, SubscriptionId};
pub use player::{PlaybackState, Player};
