//! # Player Usage Example
//!
//! This example demonstrates how to wire the playback coordinator to a host
//! audio output, register observers, and drive it with transport commands.
//!
//! Run with: `cargo run --example player_demo --package core-playback`

use bridge_traits::{
    AudioOutput, AudioSource, BridgeError, NowPlayingInfo, NowPlayingSurface, OutputHandle, Track,
    TransportCommand,
};
use core_playback::logging::{init_logging, LogFormat, LoggingConfig};
use core_playback::{Player, PlayerObserver, Result};
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// Simple Console Audio Output (for demonstration)
// ============================================================================

struct ConsoleHandle {
    source: String,
    position: Duration,
    playing: bool,
}

impl OutputHandle for ConsoleHandle {
    fn play(&mut self) {
        println!("▶️  Output playing: {}", self.source);
        self.playing = true;
    }

    fn pause(&mut self) {
        println!("⏸️  Output paused");
        self.playing = false;
    }

    fn stop(&mut self) {
        println!("⏹️  Output stopped: {}", self.source);
        self.playing = false;
    }

    fn seek(&mut self, position: Duration) {
        println!("⏩  Seeking to {:?}", position);
        self.position = position;
    }

    fn position(&self) -> Duration {
        self.position
    }

    fn duration(&self) -> Duration {
        Duration::from_secs(180)
    }

    fn power_level(&self) -> f32 {
        if self.playing {
            0.5
        } else {
            0.0
        }
    }

    fn is_finished(&self) -> bool {
        false
    }
}

struct ConsoleOutput;

impl AudioOutput for ConsoleOutput {
    type Handle = ConsoleHandle;

    fn open(&mut self, source: &AudioSource) -> bridge_traits::Result<ConsoleHandle> {
        let described = source.describe();
        if described.contains("broken") {
            return Err(BridgeError::SourceUnavailable(described));
        }
        println!("📂 Opened source: {described}");
        Ok(ConsoleHandle {
            source: described,
            position: Duration::ZERO,
            playing: false,
        })
    }
}

// ============================================================================
// Console Observer and Now-Playing Surface
// ============================================================================

struct ConsoleObserver;

impl PlayerObserver for ConsoleObserver {
    fn on_track_changed(&mut self, track: Option<&Track>) {
        match track {
            Some(track) => println!("🎵 Now playing: {} — {:?}", track.title, track.artist),
            None => println!("🎵 Nothing playing"),
        }
    }

    fn on_playback_state_changed(&mut self, is_playing: bool) {
        println!("🎮 Playback state: {}", if is_playing { "playing" } else { "paused" });
    }

    fn on_queue_ended(&mut self, last: &Track) {
        println!("🏁 Queue finished after: {}", last.title);
    }

    fn on_track_load_failed(&mut self, track: &Track, reason: &str) {
        println!("⚠️  Could not load {}: {reason}", track.title);
    }
}

struct ConsoleSurface;

impl NowPlayingSurface for ConsoleSurface {
    fn update(&mut self, info: Option<NowPlayingInfo>) {
        match info {
            Some(info) => println!(
                "🖥️  Lock screen: {} [{:.0}s / {:.0}s]",
                info.title,
                info.elapsed.as_secs_f64(),
                info.duration.as_secs_f64()
            ),
            None => println!("🖥️  Lock screen cleared"),
        }
    }
}

// ============================================================================
// Main Demo
// ============================================================================

fn local(id: &str, title: &str, artist: &str) -> Track {
    Track::new(
        id,
        title,
        AudioSource::LocalFile {
            path: PathBuf::from(format!("/music/{id}.mp3")),
        },
    )
    .with_artist(artist)
    .with_duration(Duration::from_secs(180))
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default().with_format(LogFormat::Compact))?;

    println!("🎵 Playback Coordinator Demo\n");

    let mut player = Player::new(ConsoleOutput);
    player.subscribe(Box::new(ConsoleObserver));
    player.attach_surface(Box::new(ConsoleSurface));

    let tracks = vec![
        local("intro", "Opening Theme", "Demo Band"),
        local("middle", "Second Movement", "Demo Band"),
        local("finale", "Closing Credits", "Demo Band"),
    ];

    println!("📋 Loading a three-track playlist...\n");
    player.load_and_play(tracks, 0);

    println!("\n⏭️  Skipping forward...");
    player.skip_next();

    println!("\n⏮️  Skip back early in the track (moves to the previous one)...");
    player.skip_previous();

    println!("\n⏮️  Skip back again late in the track (restarts it)...");
    player.seek(Duration::from_secs(30));
    player.skip_previous();

    println!("\n🎮 Driving via transport commands...");
    player.handle_transport(TransportCommand::Pause);
    player.handle_transport(TransportCommand::Toggle);
    player.handle_transport(TransportCommand::Next);

    println!("\n🏃 Playing through to the end of the queue...");
    player.on_track_finished();
    player.on_track_finished();

    println!("\n🎉 Demo completed successfully!");

    Ok(())
}
