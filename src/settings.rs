//! Game settings
//!
//! Read from a JSON file next to the binary. Missing fields fall back to
//! their defaults so a settings file only needs the values it changes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::puzzle::TrackLayout;

/// Environment variable naming an alternate settings file
pub const SETTINGS_ENV: &str = "BLOCKSHIFT_SETTINGS";
/// Settings file used when the environment variable is unset
pub const DEFAULT_SETTINGS_PATH: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Level file to play
    pub levels_path: PathBuf,
    /// Canvas span the track runs across
    pub track: TrackLayout,
    /// Failed attempts per level before the demo driver gives up
    pub autoplay_attempts: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            levels_path: PathBuf::from("assets/levels.json"),
            track: TrackLayout::default(),
            autoplay_attempts: 3,
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(_) => {
                log::info!("No settings at {}, using defaults", path.display());
                return Self::default();
            }
        };

        match serde_json::from_str(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load from `$BLOCKSHIFT_SETTINGS`, or `settings.json`
    pub fn from_env() -> Self {
        let path = std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH));
        Self::load(path)
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
