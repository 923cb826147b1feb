//! Game settings and preferences
//!
//! Purely presentational; nothing here changes gameplay. Read once at startup
//! from an optional JSON file next to the binary's working directory.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default settings file name
pub const SETTINGS_FILE: &str = "settings.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Visual Effects ===
    /// Particle trail behind the player
    pub trail: bool,
    /// Spin the player sprite while airborne
    pub spin: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,

    // === Accessibility ===
    /// Reduced motion (no trail, no spin)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            trail: true,
            spin: true,
            master_volume: 0.8,
            music_volume: 0.7,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective trail (respects reduced_motion)
    pub fn effective_trail(&self) -> bool {
        self.trail && !self.reduced_motion
    }

    /// Effective spin (respects reduced_motion)
    pub fn effective_spin(&self) -> bool {
        self.spin && !self.reduced_motion
    }

    /// Volume music should start at
    pub fn effective_music_volume(&self) -> f32 {
        (self.master_volume * self.music_volume).clamp(0.0, 1.0)
    }

    /// Load settings from `path`, falling back to defaults on any problem
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(_) => {
                log::info!("Using default settings");
                return Self::default();
            }
        };

        match serde_json::from_str(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring invalid settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
