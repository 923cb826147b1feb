//! Collision detection and response
//!
//! Resolution runs once per axis. The horizontal pass is called with an axis
//! velocity of zero, so any block the scroll pushed into the player counts as
//! a wall hit. The vertical pass uses the player's vertical velocity to decide
//! between landing and a head bump.

use super::obstacle::{Obstacle, ObstacleKind};
use super::player::Player;
use crate::tuning::Tuning;

/// What a resolution pass touched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    pub died: bool,
    pub won: bool,
    /// Collectibles consumed
    pub tokens: u32,
    /// Booster activations
    pub boosts: u32,
    /// Snapped onto the top of a block
    pub landed: bool,
    /// Snapped under the bottom of a block
    pub head_bump: bool,
    /// Ran into the side of a block
    pub wall: bool,
}

impl Contacts {
    /// Combine the results of two passes in the same tick
    pub fn merge(self, other: Contacts) -> Contacts {
        Contacts {
            died: self.died || other.died,
            won: self.won || other.won,
            tokens: self.tokens + other.tokens,
            boosts: self.boosts + other.boosts,
            landed: self.landed || other.landed,
            head_bump: self.head_bump || other.head_bump,
            wall: self.wall || other.wall,
        }
    }
}

/// Resolve every overlap between the player and the obstacles, in level order
///
/// `axis_vel` is the velocity along the axis being resolved: positive means
/// falling, negative rising, zero a lateral contact. Only the first block hit
/// moves the player; the other kinds all apply independently.
pub fn resolve(
    player: &mut Player,
    obstacles: &mut [Obstacle],
    axis_vel: f32,
    tuning: &Tuning,
) -> Contacts {
    let mut contacts = Contacts::default();
    let mut snapped = false;

    for obstacle in obstacles.iter_mut() {
        if !obstacle.is_active() || !player.rect.overlaps(&obstacle.rect) {
            continue;
        }

        match obstacle.kind {
            ObstacleKind::Block => {
                if axis_vel > 0.0 {
                    if !snapped {
                        player.rect.set_bottom(obstacle.rect.top());
                        player.vel.y = 0.0;
                        player.on_ground = true;
                        player.is_jumping = false;
                        contacts.landed = true;
                        snapped = true;
                    }
                } else if axis_vel < 0.0 {
                    if !snapped {
                        player.rect.set_top(obstacle.rect.bottom());
                        contacts.head_bump = true;
                        snapped = true;
                    }
                } else {
                    player.vel.x = 0.0;
                    player.rect.set_right(obstacle.rect.left());
                    contacts.wall = true;
                    contacts.died = true;
                }
            }
            ObstacleKind::Hazard => contacts.died = true,
            ObstacleKind::Goal => contacts.won = true,
            ObstacleKind::Collectible { .. } => {
                if obstacle.consume() {
                    contacts.tokens += 1;
                }
            }
            ObstacleKind::Booster => {
                if player.jump_pending && player.booster_cooldown == 0 {
                    player.vel.y = -tuning.booster_strength;
                    player.booster_cooldown = tuning.booster_cooldown_ticks;
                    contacts.boosts += 1;
                }
            }
            ObstacleKind::Passthrough => {}
        }
    }

    contacts
}
