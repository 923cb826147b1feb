//! HUD values derived from the session
//!
//! Nothing here feeds back into gameplay.

use serde::{Deserialize, Serialize};

use crate::consts::{BAR_LENGTH, PROGRESS_TIER_SPAN};

/// Progress bar colour tier, from just started to nearly done
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressTier {
    Red,
    Orange,
    Yellow,
    LightGreen,
    Green,
}

impl ProgressTier {
    const ALL: [ProgressTier; 5] = [
        ProgressTier::Red,
        ProgressTier::Orange,
        ProgressTier::Yellow,
        ProgressTier::LightGreen,
        ProgressTier::Green,
    ];

    /// Tier for a fill value; past the last tier stays green
    pub fn for_fill(fill: f32) -> Self {
        let index = (fill.max(0.0) / PROGRESS_TIER_SPAN) as usize;
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    pub fn rgb(&self) -> [u8; 3] {
        match self {
            ProgressTier::Red => [255, 0, 0],
            ProgressTier::Orange => [255, 165, 0],
            ProgressTier::Yellow => [255, 255, 0],
            ProgressTier::LightGreen => [144, 238, 144],
            ProgressTier::Green => [0, 255, 0],
        }
    }
}

/// Grow the progress fill by one tick's worth
#[inline]
pub fn advance_progress(fill: f32, increment: f32) -> f32 {
    fill + increment
}

/// Drawn width of the bar fill (never wider than the outline)
pub fn bar_fill_width(fill: f32) -> f32 {
    fill.clamp(0.0, BAR_LENGTH)
}
