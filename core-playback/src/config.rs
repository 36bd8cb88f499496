//! Playback coordinator configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Coordinator configuration.
///
/// All fields have sensible defaults; use the `with_*` builders to override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Elapsed-time threshold for the skip-previous decision.
    ///
    /// At or beyond this point into a track, skip-previous restarts the
    /// current track instead of moving to the previous one.
    ///
    /// Default: 3 seconds.
    #[serde(default = "default_skip_back_threshold")]
    pub skip_back_threshold: Duration,

    /// Initial capacity of the observer registry.
    ///
    /// Default: 4.
    #[serde(default = "default_observer_capacity")]
    pub observer_capacity: usize,
}

fn default_skip_back_threshold() -> Duration {
    Duration::from_secs(3)
}

fn default_observer_capacity() -> usize {
    4
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            skip_back_threshold: default_skip_back_threshold(),
            observer_capacity: default_observer_capacity(),
        }
    }
}

impl PlayerConfig {
    /// Override the skip-previous restart threshold.
    pub fn with_skip_back_threshold(mut self, threshold: Duration) -> Self {
        self.skip_back_threshold = threshold;
        self
    }

    /// Override the observer registry's initial capacity.
    pub fn with_observer_capacity(mut self, capacity: usize) -> Self {
        self.observer_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PlayerConfig::default();
        assert_eq!(config.skip_back_threshold, Duration::from_secs(3));
        assert_eq!(config.observer_capacity, 4);
    }

    #[test]
    fn builders_override_fields() {
        let config = PlayerConfig::default()
            .with_skip_back_threshold(Duration::from_secs(5))
            .with_observer_capacity(16);
        assert_eq!(config.skip_back_threshold, Duration::from_secs(5));
        assert_eq!(config.observer_capacity, 16);
    }

    #[test]
    fn serde_fills_missing_fields_with_defaults() {
        let config: PlayerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PlayerConfig::default());
    }
}
