//! Player events and the observer registry.
//!
//! Notifications are delivered synchronously, in registration order, on the
//! thread that executed the triggering command. Observers must not issue
//! playback commands from inside a callback; the registry does not guard
//! against re-entrancy, it forbids it by contract.

use bridge_traits::Track;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Events emitted by the playback coordinator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum PlayerEvent {
    /// The current track changed (or became absent).
    ///
    /// Emitted once per skip/jump/load command, even when the cursor could
    /// not actually move — matching the coordinator's unconditional-notify
    /// design.
    TrackChanged { track: Option<Track> },

    /// Play/pause state changed.
    PlaybackStateChanged { is_playing: bool },

    /// The final track finished and no further track was loaded.
    QueueEnded { last: Track },

    /// The output refused to open a track; playback did not start.
    TrackLoadFailed { track: Track, reason: String },
}

impl PlayerEvent {
    /// Human-readable description of the event.
    pub fn description(&self) -> &str {
        match self {
            PlayerEvent::TrackChanged { .. } => "Current track changed",
            PlayerEvent::PlaybackStateChanged { .. } => "Playback state changed",
            PlayerEvent::QueueEnded { .. } => "End of queue reached",
            PlayerEvent::TrackLoadFailed { .. } => "Track failed to load",
        }
    }
}

/// Observer interface for player notifications.
///
/// All methods default to no-ops so implementations only handle what they
/// care about.
pub trait PlayerObserver {
    /// The current track changed; `None` means nothing is current.
    fn on_track_changed(&mut self, track: Option<&Track>) {
        let _ = track;
    }

    /// Play/pause state changed.
    fn on_playback_state_changed(&mut self, is_playing: bool) {
        let _ = is_playing;
    }

    /// The last track in the queue finished playing.
    fn on_queue_ended(&mut self, last: &Track) {
        let _ = last;
    }

    /// A track failed to load; playback for it did not start.
    fn on_track_load_failed(&mut self, track: &Track, reason: &str) {
        let _ = (track, reason);
    }
}

/// Opaque token identifying one observer registration.
///
/// Returned by [`ObserverRegistry::subscribe`] and used for removal,
/// avoiding fragile object-identity comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    /// Generate a new token.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Borrow the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SubscriptionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Ordered, token-keyed collection of observers.
///
/// Iteration order is registration order.
pub struct ObserverRegistry {
    entries: Vec<(SubscriptionId, Box<dyn PlayerObserver>)>,
}

impl ObserverRegistry {
    /// Create a registry with the given initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Register an observer, returning its removal token.
    pub fn subscribe(&mut self, observer: Box<dyn PlayerObserver>) -> SubscriptionId {
        let id = SubscriptionId::new();
        self.entries.push((id, observer));
        id
    }

    /// Remove the observer registered under `id`. Returns `false` when the
    /// token is unknown (already removed or never issued).
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no observers are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deliver an event to every observer, in registration order.
    pub fn notify(&mut self, event: &PlayerEvent) {
        for (_, observer) in &mut self.entries {
            match event {
                PlayerEvent::TrackChanged { track } => observer.on_track_changed(track.as_ref()),
                PlayerEvent::PlaybackStateChanged { is_playing } => {
                    observer.on_playback_state_changed(*is_playing)
                }
                PlayerEvent::QueueEnded { last } => observer.on_queue_ended(last),
                PlayerEvent::TrackLoadFailed { track, reason } => {
                    observer.on_track_load_failed(track, reason)
                }
            }
        }
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::AudioSource;
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::rc::Rc;

    fn track(id: &str) -> Track {
        Track::new(
            id,
            id.to_uppercase(),
            AudioSource::LocalFile {
                path: PathBuf::from(format!("/music/{id}.mp3")),
            },
        )
    }

    struct Tagger {
        tag: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl PlayerObserver for Tagger {
        fn on_track_changed(&mut self, track: Option<&Track>) {
            let id = track.map(|t| t.id.as_str().to_string()).unwrap_or_default();
            self.log.borrow_mut().push(format!("{}:{}", self.tag, id));
        }
    }

    #[test]
    fn notify_delivers_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ObserverRegistry::with_capacity(2);
        registry.subscribe(Box::new(Tagger {
            tag: "first",
            log: Rc::clone(&log),
        }));
        registry.subscribe(Box::new(Tagger {
            tag: "second",
            log: Rc::clone(&log),
        }));

        registry.notify(&PlayerEvent::TrackChanged {
            track: Some(track("a")),
        });

        assert_eq!(*log.borrow(), vec!["first:a", "second:a"]);
    }

    #[test]
    fn unsubscribe_by_token() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ObserverRegistry::with_capacity(2);
        let id = registry.subscribe(Box::new(Tagger {
            tag: "gone",
            log: Rc::clone(&log),
        }));
        registry.subscribe(Box::new(Tagger {
            tag: "kept",
            log: Rc::clone(&log),
        }));

        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));
        assert_eq!(registry.len(), 1);

        registry.notify(&PlayerEvent::TrackChanged { track: None });
        assert_eq!(*log.borrow(), vec!["kept:"]);
    }

    #[test]
    fn event_serde_tagging() {
        let event = PlayerEvent::PlaybackStateChanged { is_playing: true };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"event\":\"PlaybackStateChanged\""));

        let parsed: PlayerEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }

    #[test]
    fn event_descriptions() {
        let event = PlayerEvent::QueueEnded { last: track("z") };
        assert_eq!(event.description(), "End of queue reached");
    }
}
