//! # Core Queue
//!
//! The ordered playlist cursor: a mutable ordered sequence of items plus a
//! current-position index, with bounds-safe movement.
//!
//! ## Overview
//!
//! [`Playlist`] is generic over any value type, with no bounds; consumers
//! that need item identity implement [`QueueItem`]. The cursor has no knowledge
//! of playback, audio, or the host platform — `core-playback` composes it
//! into the coordinator.
//!
//! Every operation is a total function: out-of-range indices clamp (the
//! documented policy for `insert` and `jump_to`) or report absence
//! (`remove`, `advance`, `current`). Nothing here panics or errors.

pub mod playlist;

pub use playlist::{Playlist, QueueItem};
