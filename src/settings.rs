use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::audio::level::UNMUTED_VOLUME;

/// Player settings, read from `<config dir>/video-widget/settings.json`.
/// Never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub window_title: String,
    pub heading: String,
    pub media_title: String,
    /// Length of the media the surface is opened with (seconds)
    pub media_duration_secs: f64,
    pub initial_volume: f64,
    /// Spacing between position callbacks while playing
    pub time_update_interval_ms: u64,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            window_title: "Video Player".to_string(),
            heading: "Video Player".to_string(),
            media_title: "src.mp4".to_string(),
            media_duration_secs: 125.9,
            initial_volume: UNMUTED_VOLUME,
            time_update_interval_ms: 250,
        }
    }
}

impl PlayerSettings {
    /// Default settings file location
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("video-widget").join("settings.json"))
    }

    /// Load settings, falling back to defaults when the file is missing or
    /// cannot be parsed
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings: {e:#}");
                Self::default()
            }
        }
    }

    /// Read settings from a specific file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let settings = serde_json::from_str(&json)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(settings)
    }

    pub fn time_update_interval(&self) -> Duration {
        Duration::from_millis(self.time_update_interval_ms.max(1))
    }
}
