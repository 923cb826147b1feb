//! Per-attempt obstacle layout built from a tile grid

use serde::{Deserialize, Serialize};

use super::obstacle::{Obstacle, ObstacleKind};
use super::rect::Rect;
use crate::cell_to_pixel;
use crate::consts::TILE_SIZE;
use crate::levels::TileGrid;

/// The obstacles of one attempt, in grid (row-major) order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub obstacles: Vec<Obstacle>,
    /// Pixel extent of the grid
    pub width: f32,
    pub height: f32,
}

impl Level {
    /// Build a fresh obstacle set. Called on every Reset so nothing carries over.
    pub fn from_grid(grid: &TileGrid) -> Self {
        let obstacles = grid
            .cells()
            .map(|(row, col, kind)| {
                let pos = cell_to_pixel(row, col);
                Obstacle::new(kind, Rect::new(pos.x, pos.y, TILE_SIZE, TILE_SIZE))
            })
            .collect();

        Self {
            obstacles,
            width: grid.columns() as f32 * TILE_SIZE,
            height: grid.rows() as f32 * TILE_SIZE,
        }
    }

    /// Collectibles not yet consumed this attempt
    pub fn remaining_collectibles(&self) -> usize {
        self.obstacles
            .iter()
            .filter(|o| matches!(o.kind, ObstacleKind::Collectible { consumed: false }))
            .count()
    }
}
