//! Obstacle registry
//!
//! Every static thing in a level is one of a closed set of kinds, each owning
//! a single collision box.

use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Solid platform; land on it, bump your head on it, die running into it
    Block,
    /// Kills on contact from any direction
    Hazard,
    /// Token pickup, consumed once per attempt
    Collectible { consumed: bool },
    /// Air jump while the jump input is held
    Booster,
    /// Looks like a block, never collides
    Passthrough,
    /// Level end marker
    Goal,
}

impl ObstacleKind {
    /// Resolve a tile-grid cell code. Unknown codes (including empty) are no obstacle.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "0" => Some(ObstacleKind::Block),
            "Coin" => Some(ObstacleKind::Collectible { consumed: false }),
            "Spike" => Some(ObstacleKind::Hazard),
            "Orb" => Some(ObstacleKind::Booster),
            "T" => Some(ObstacleKind::Passthrough),
            "End" => Some(ObstacleKind::Goal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ObstacleKind::Block => "Block",
            ObstacleKind::Hazard => "Hazard",
            ObstacleKind::Collectible { .. } => "Collectible",
            ObstacleKind::Booster => "Booster",
            ObstacleKind::Passthrough => "Passthrough",
            ObstacleKind::Goal => "Goal",
        }
    }
}

/// An obstacle instance placed in a level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub rect: Rect,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, rect: Rect) -> Self {
        Self { kind, rect }
    }

    /// False for consumed collectibles, which no longer take part in collisions
    pub fn is_active(&self) -> bool {
        !matches!(self.kind, ObstacleKind::Collectible { consumed: true })
    }

    /// Consume a collectible. Returns true only the first time.
    pub fn consume(&mut self) -> bool {
        match &mut self.kind {
            ObstacleKind::Collectible { consumed } if !*consumed => {
                *consumed = true;
                true
            }
            _ => false,
        }
    }
}
