//! Data-driven physics balance
//!
//! Every value here is in pixels (or pixels per tick). Missing fields in a
//! tuning file fall back to the compiled-in defaults from `consts`.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Default tuning file name
pub const TUNING_FILE: &str = "tuning.json";

/// Physics tuning for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Added to vertical velocity every airborne tick
    pub gravity: f32,
    /// Maximum falling speed (rise speed is not clamped)
    pub terminal_velocity: f32,
    /// Launch speed of a grounded jump
    pub jump_strength: f32,
    /// Launch speed when a booster is activated
    pub booster_strength: f32,
    /// Ticks a booster stays spent after firing (0 = fires every overlapping tick)
    pub booster_cooldown_ticks: u32,
    /// Constant forward speed, also the camera scroll delta
    pub run_speed: f32,
    /// Progress bar growth per running tick
    pub progress_increment: f32,
    /// Spawn position (center of the player box)
    pub player_start: Vec2,
    pub player_size: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            terminal_velocity: TERMINAL_VELOCITY,
            jump_strength: JUMP_STRENGTH,
            booster_strength: BOOSTER_STRENGTH,
            booster_cooldown_ticks: 0,
            run_speed: RUN_SPEED,
            progress_increment: PROGRESS_INCREMENT,
            player_start: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            player_size: PLAYER_SIZE,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a file, or the defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("No tuning file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values that would break the physics
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("gravity", self.gravity),
            ("terminal_velocity", self.terminal_velocity),
            ("jump_strength", self.jump_strength),
            ("booster_strength", self.booster_strength),
            ("player_size", self.player_size),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid { field, value });
            }
        }

        let non_negative = [
            ("run_speed", self.run_speed),
            ("progress_increment", self.progress_increment),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid { field, value });
            }
        }

        if !self.player_start.is_finite() {
            return Err(ConfigError::Invalid {
                field: "player_start",
                value: f32::NAN,
            });
        }
        Ok(())
    }
}
