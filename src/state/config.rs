/// Viewer configuration
///
/// Swipe thresholds and the slideshow interval are policy, not law:
/// they are persisted as JSON next to the gallery manifest and fall
/// back to the reference defaults when the file is absent or invalid.

use crate::state::gesture::SwipeThresholds;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Tunable viewer behavior
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ViewerConfig {
    /// Minimum horizontal travel for a touch sequence to count as a swipe
    pub swipe_min_distance: f32,

    /// Maximum duration (milliseconds) for a touch sequence to count as
    /// a swipe; slower drags are treated as scrolls
    pub swipe_max_duration_ms: u64,

    /// How often the slideshow advances, in milliseconds
    pub slideshow_interval_ms: u64,
}

impl Default for ViewerConfig {
    /// Reference defaults: 36 units / 600 ms swipe, 3.5 s slideshow
    fn default() -> Self {
        ViewerConfig {
            swipe_min_distance: 36.0,
            swipe_max_duration_ms: 600,
            slideshow_interval_ms: 3500,
        }
    }
}

impl ViewerConfig {
    /// Convert to JSON string for storage
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load from disk, falling back to defaults when the file is
    /// missing or unparseable. Configuration is never fatal.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("⚠️  Invalid config at {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// The swipe thresholds in the form the gesture classifier consumes
    pub fn swipe_thresholds(&self) -> SwipeThresholds {
        SwipeThresholds {
            min_distance: self.swipe_min_distance,
            max_duration: Duration::from_millis(self.swipe_max_duration_ms),
        }
    }

    /// The slideshow tick interval as a `Duration`
    pub fn slideshow_interval(&self) -> Duration {
        Duration::from_millis(self.slideshow_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_reference_behavior() {
        let config = ViewerConfig::default();
        assert_eq!(config.swipe_min_distance, 36.0);
        assert_eq!(config.swipe_max_duration_ms, 600);
        assert_eq!(config.slideshow_interval_ms, 3500);
    }

    #[test]
    fn test_json_round_trip() {
        let config = ViewerConfig {
            swipe_min_distance: 48.0,
            swipe_max_duration_ms: 800,
            slideshow_interval_ms: 5000,
        };

        let json = config.to_json().unwrap();
        let restored = ViewerConfig::from_json(&json).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = ViewerConfig::load_or_default(Path::new("/nonexistent/config.json"));
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"{ not json").unwrap();

        let config = ViewerConfig::load_or_default(&path);
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn test_thresholds_conversion() {
        let config = ViewerConfig::default();
        let thresholds = config.swipe_thresholds();
        assert_eq!(thresholds.min_distance, 36.0);
        assert_eq!(thresholds.max_duration, Duration::from_millis(600));
    }
}
