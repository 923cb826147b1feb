//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, physics in pixels per tick
//! - Seeded RNG only (and only for cosmetics)
//! - Stable iteration order (level order, row-major)
//! - No rendering or platform dependencies

pub mod camera;
pub mod collision;
pub mod hud;
pub mod level;
pub mod obstacle;
pub mod player;
pub mod rect;
pub mod state;
pub mod tick;
pub mod trail;

pub use collision::{Contacts, resolve};
pub use hud::ProgressTier;
pub use level::Level;
pub use obstacle::{Obstacle, ObstacleKind};
pub use player::{Outcome, Player};
pub use rect::Rect;
pub use state::{Attempt, GameEvent, GamePhase, GameState, MusicTrack, SessionState, Summary};
pub use tick::{TickInput, tick};
pub use trail::{Trail, TrailParticle};
