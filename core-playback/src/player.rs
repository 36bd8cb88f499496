//! The playback coordinator.

use crate::config::PlayerConfig;
use crate::error::Result;
use crate::events::{ObserverRegistry, PlayerEvent, PlayerObserver, SubscriptionId};
use bridge_traits::{
    AudioOutput, NowPlayingInfo, NowPlayingSurface, OutputHandle, Track, TransportCommand,
};
use core_queue::Playlist;
use std::time::Duration;
use tracing::{debug, warn};

/// Coarse playback lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// No track loaded.
    Idle,
    /// A track is loaded but not playing.
    Paused,
    /// A track is loaded and playing.
    Playing,
}

/// Playback coordinator: owns one playlist cursor, at most one output
/// handle, and the observer registry.
///
/// Explicitly constructed and caller-owned — there is no global instance.
/// All commands execute synchronously on the caller's thread; external
/// events (end-of-track, transport commands) are delivered by the host as
/// ordinary method calls, one at a time.
///
/// Commands are infallible: operating on an empty playlist or an absent
/// output handle degrades to a silent no-op, and a failed track load is
/// logged, reported via [`PlayerEvent::TrackLoadFailed`], and otherwise
/// swallowed (no retry, no fallback to the next track).
///
/// Invariant: the "now playing" value is always exactly the playlist
/// cursor's current item, and every change of it reaches every registered
/// observer exactly once, in registration order.
pub struct Player<O: AudioOutput> {
    output: O,
    handle: Option<O::Handle>,
    queue: Playlist<Track>,
    observers: ObserverRegistry,
    surface: Option<Box<dyn NowPlayingSurface>>,
    config: PlayerConfig,
    playing: bool,
}

impl<O: AudioOutput> Player<O> {
    /// Create a player over the given host audio output with default
    /// configuration.
    pub fn new(output: O) -> Self {
        Self::with_config(output, PlayerConfig::default())
    }

    /// Create a player with an explicit configuration.
    pub fn with_config(output: O, config: PlayerConfig) -> Self {
        Self {
            output,
            handle: None,
            queue: Playlist::new(),
            observers: ObserverRegistry::with_capacity(config.observer_capacity),
            surface: None,
            config,
            playing: false,
        }
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Register an observer; the returned token removes it again.
    pub fn subscribe(&mut self, observer: Box<dyn PlayerObserver>) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    /// Remove a previously registered observer.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Attach the system now-playing surface; it immediately receives the
    /// current snapshot.
    pub fn attach_surface(&mut self, surface: Box<dyn NowPlayingSurface>) {
        self.surface = Some(surface);
        self.push_now_playing();
    }

    /// Detach and return the now-playing surface, if one was attached.
    pub fn detach_surface(&mut self) -> Option<Box<dyn NowPlayingSurface>> {
        self.surface.take()
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Whether playback is currently running.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Coarse lifecycle state.
    pub fn state(&self) -> PlaybackState {
        match (&self.handle, self.playing) {
            (None, _) => PlaybackState::Idle,
            (Some(_), true) => PlaybackState::Playing,
            (Some(_), false) => PlaybackState::Paused,
        }
    }

    /// The track under the cursor, if any.
    pub fn now_playing(&self) -> Option<&Track> {
        self.queue.current()
    }

    /// The playlist cursor.
    pub fn queue(&self) -> &Playlist<Track> {
        &self.queue
    }

    /// Duration of the loaded track (zero when nothing is loaded).
    pub fn duration(&self) -> Duration {
        self.handle
            .as_ref()
            .map(|handle| handle.duration())
            .unwrap_or_default()
    }

    /// Current playhead position (zero when nothing is loaded).
    pub fn position(&self) -> Duration {
        self.handle
            .as_ref()
            .map(|handle| handle.position())
            .unwrap_or_default()
    }

    /// Current output power level (0.0 when nothing is loaded).
    pub fn power_level(&self) -> f32 {
        self.handle
            .as_ref()
            .map(|handle| handle.power_level())
            .unwrap_or(0.0)
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Replace the playlist wholesale, jump to `start_index` (clamped), load
    /// the current track, and start playing.
    pub fn load_and_play(&mut self, tracks: Vec<Track>, start_index: usize) {
        debug!(count = tracks.len(), start_index, "loading playlist");
        self.queue = Playlist::from_items(tracks, start_index);
        self.load_current();
        self.notify_track_changed();
        if self.handle.is_some() {
            self.play();
        } else {
            self.set_playing(false);
        }
    }

    /// Start the output. Silent no-op when no track is loaded.
    pub fn play(&mut self) {
        let Some(handle) = self.handle.as_mut() else {
            return;
        };
        handle.play();
        self.playing = true;
        self.observers
            .notify(&PlayerEvent::PlaybackStateChanged { is_playing: true });
        self.push_now_playing();
    }

    /// Pause the output. Silent no-op when no track is loaded.
    pub fn pause(&mut self) {
        let Some(handle) = self.handle.as_mut() else {
            return;
        };
        handle.pause();
        self.playing = false;
        self.observers
            .notify(&PlayerEvent::PlaybackStateChanged { is_playing: false });
        self.push_now_playing();
    }

    /// Toggle between play and pause.
    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Move the playhead. No state transition, no notification.
    pub fn seek(&mut self, position: Duration) {
        if let Some(handle) = self.handle.as_mut() {
            handle.seek(position);
        }
    }

    /// Advance to the next track, reloading the output.
    ///
    /// Resumes playing only if playback was running before the skip. Always
    /// emits exactly one track-change notification, even when the cursor is
    /// already at the last element and cannot move.
    pub fn skip_next(&mut self) {
        let was_playing = self.playing;
        if self.queue.advance().is_some() {
            self.load_current();
            self.notify_track_changed();
            self.resume_if(was_playing);
        } else {
            debug!("skip next at end of queue; cursor unchanged");
            self.notify_track_changed();
        }
    }

    /// Skip back: restart the current track, or move to the previous one.
    ///
    /// The track restarts (playhead to zero, same output handle) when the
    /// cursor is at the first element, or when playback is at or beyond the
    /// configured threshold into the track — far enough that "back" means
    /// "start over". Otherwise the cursor retreats and the previous track is
    /// reloaded. Resumes playing only if playback was running before; always
    /// emits exactly one track-change notification.
    pub fn skip_previous(&mut self) {
        if self.queue.is_empty() {
            return;
        }
        let was_playing = self.playing;
        let elapsed = self.position();
        let restart_current = elapsed >= self.config.skip_back_threshold;

        if restart_current || self.queue.position() == 0 {
            if let Some(handle) = self.handle.as_mut() {
                handle.seek(Duration::ZERO);
            }
        } else {
            self.queue.retreat();
            self.load_current();
        }
        self.notify_track_changed();
        self.resume_if(was_playing);
    }

    /// Jump the cursor to `index` (clamped) and play that track, reloading
    /// the output even when the index is unchanged.
    pub fn play_at(&mut self, index: usize) {
        self.queue.jump_to(index);
        self.load_current();
        self.notify_track_changed();
        if self.handle.is_some() {
            self.play();
        } else {
            self.set_playing(false);
        }
    }

    /// End-of-output signal, delivered by the host when the loaded track
    /// finishes. Advances the queue naturally; at the end of the playlist it
    /// reports queue exhaustion and playback stops by absence of a new load.
    pub fn on_track_finished(&mut self) {
        debug!("output signalled end of track");
        if self.queue.position() + 1 < self.queue.len() {
            self.skip_next();
        } else if let Some(last) = self.queue.current().cloned() {
            self.observers.notify(&PlayerEvent::QueueEnded { last });
            self.set_playing(false);
        }
    }

    /// Route an inbound transport command from the system remote-control
    /// surface.
    pub fn handle_transport(&mut self, command: TransportCommand) {
        debug!(?command, "transport command");
        match command {
            TransportCommand::Play => self.play(),
            TransportCommand::Pause => self.pause(),
            TransportCommand::Toggle => self.toggle(),
            TransportCommand::Next => self.skip_next(),
            TransportCommand::Previous => self.skip_previous(),
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Stop and discard the current handle, then open a fresh one for the
    /// track under the cursor. A load failure is logged, reported to
    /// observers, and leaves the player without a handle.
    fn load_current(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.stop();
        }
        let Some(track) = self.queue.current().cloned() else {
            return;
        };
        match self.try_open(&track) {
            Ok(handle) => {
                debug!(track_id = %track.id, source = %track.source.describe(), "track loaded");
                self.handle = Some(handle);
            }
            Err(err) => {
                warn!(track_id = %track.id, error = %err, "failed to open audio source");
                self.observers.notify(&PlayerEvent::TrackLoadFailed {
                    track,
                    reason: err.to_string(),
                });
            }
        }
    }

    fn try_open(&mut self, track: &Track) -> Result<O::Handle> {
        Ok(self.output.open(&track.source)?)
    }

    fn notify_track_changed(&mut self) {
        let track = self.queue.current().cloned();
        self.observers.notify(&PlayerEvent::TrackChanged { track });
        self.push_now_playing();
    }

    /// Restore the pre-skip play state on a freshly loaded handle, emitting
    /// a state change only when the flag actually flips (e.g., a load
    /// failure while playback was running).
    fn resume_if(&mut self, was_playing: bool) {
        if !was_playing {
            self.set_playing(false);
            return;
        }
        if let Some(handle) = self.handle.as_mut() {
            handle.play();
            self.set_playing(true);
        } else {
            self.set_playing(false);
        }
    }

    /// Update the playing flag, notifying observers only on an actual
    /// transition.
    fn set_playing(&mut self, playing: bool) {
        if self.playing == playing {
            return;
        }
        self.playing = playing;
        self.observers
            .notify(&PlayerEvent::PlaybackStateChanged { is_playing: playing });
        self.push_now_playing();
    }

    /// Mirror the current track and state onto the system now-playing
    /// surface, when one is attached.
    fn push_now_playing(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let elapsed = self
            .handle
            .as_ref()
            .map(|handle| handle.position())
            .unwrap_or_default();
        let info = self
            .queue
            .current()
            .map(|track| NowPlayingInfo::for_track(track, elapsed, self.playing));
        surface.update(info);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::{AudioSource, BridgeError};
    use std::path::PathBuf;

    struct NullHandle;

    impl OutputHandle for NullHandle {
        fn play(&mut self) {}
        fn pause(&mut self) {}
        fn stop(&mut self) {}
        fn seek(&mut self, _position: Duration) {}
        fn position(&self) -> Duration {
            Duration::ZERO
        }
        fn duration(&self) -> Duration {
            Duration::ZERO
        }
        fn power_level(&self) -> f32 {
            0.0
        }
        fn is_finished(&self) -> bool {
            false
        }
    }

    struct NullOutput;

    impl AudioOutput for NullOutput {
        type Handle = NullHandle;

        fn open(&mut self, source: &AudioSource) -> bridge_traits::Result<NullHandle> {
            if source.describe().starts_with("/missing/") {
                return Err(BridgeError::SourceUnavailable(source.describe()));
            }
            Ok(NullHandle)
        }
    }

    fn track(id: &str) -> Track {
        Track::new(
            id,
            id,
            AudioSource::LocalFile {
                path: PathBuf::from(format!("/music/{id}.mp3")),
            },
        )
    }

    #[test]
    fn state_mapping() {
        let mut player = Player::new(NullOutput);
        assert_eq!(player.state(), PlaybackState::Idle);

        player.load_and_play(vec![track("a")], 0);
        assert_eq!(player.state(), PlaybackState::Playing);

        player.pause();
        assert_eq!(player.state(), PlaybackState::Paused);
    }

    #[test]
    fn queries_with_no_handle_are_zero() {
        let player = Player::new(NullOutput);
        assert_eq!(player.duration(), Duration::ZERO);
        assert_eq!(player.position(), Duration::ZERO);
        assert_eq!(player.power_level(), 0.0);
        assert!(player.now_playing().is_none());
    }

    #[test]
    fn now_playing_tracks_cursor() {
        let mut player = Player::new(NullOutput);
        player.load_and_play(vec![track("a"), track("b")], 0);
        assert_eq!(player.now_playing().unwrap().id.as_str(), "a");
        assert_eq!(player.now_playing(), player.queue().current());

        player.skip_next();
        assert_eq!(player.now_playing().unwrap().id.as_str(), "b");
        assert_eq!(player.now_playing(), player.queue().current());
    }
}
