//! Tile Dash - A side-scrolling tile platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `levels`: Tile-grid parsing and the level catalog
//! - `render`: Per-frame draw list and the sink it is presented to
//! - `tuning`: Data-driven physics balance
//! - `settings`: Presentation preferences

pub mod error;
pub mod levels;
pub mod render;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{ConfigError, LevelError, StartupError};
pub use levels::{LevelSet, TileGrid};
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (one tick per displayed frame)
    pub const SIM_HZ: u32 = 60;
    pub const SIM_DT: f32 = 1.0 / SIM_HZ as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Edge length of one grid cell in pixels
    pub const TILE_SIZE: f32 = 32.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 32.0;
    pub const PLAYER_START_X: f32 = 150.0; // center
    pub const PLAYER_START_Y: f32 = 150.0;

    /// Physics, all in pixels per tick
    pub const GRAVITY: f32 = 0.86;
    pub const TERMINAL_VELOCITY: f32 = 100.0;
    pub const JUMP_STRENGTH: f32 = 12.0;
    pub const BOOSTER_STRENGTH: f32 = 12.0;
    /// Constant forward speed (and therefore scroll delta)
    pub const RUN_SPEED: f32 = 6.0;

    /// Cosmetic spin while airborne (degrees per tick)
    pub const SPIN_PER_TICK: f32 = 8.1712;

    /// HUD
    pub const PROGRESS_INCREMENT: f32 = 0.5;
    pub const PROGRESS_TIER_SPAN: f32 = 100.0;
    pub const BAR_LENGTH: f32 = 600.0;
    pub const BAR_HEIGHT: f32 = 10.0;

    /// Tokens available per level run
    pub const MAX_TOKENS: u32 = 6;
}

/// Top-left pixel position of a grid cell
#[inline]
pub fn cell_to_pixel(row: usize, col: usize) -> Vec2 {
    Vec2::new(col as f32 * consts::TILE_SIZE, row as f32 * consts::TILE_SIZE)
}
