//! The player controller
//!
//! One `Player` exists per attempt. Each tick integrates gravity and the jump,
//! then resolves collisions horizontally and vertically against the level.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Contacts, resolve};
use super::level::Level;
use super::rect::Rect;
use crate::consts::SPIN_PER_TICK;
use crate::tuning::Tuning;

/// Result of a single player tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Continue,
    Won,
    Died,
}

/// The player avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    pub vel: Vec2,
    pub on_ground: bool,
    /// Jump input held this tick (also activates boosters)
    pub jump_pending: bool,
    /// Jump requested; stays set until the player lands
    pub is_jumping: bool,
    pub won: bool,
    pub died: bool,
    pub jump_strength: f32,
    /// Ticks until a booster can fire again
    pub booster_cooldown: u32,
    /// What the last tick touched
    #[serde(skip)]
    pub contacts: Contacts,
    /// Cosmetic rotation in degrees
    #[serde(skip)]
    pub spin: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            rect: Rect::from_center(tuning.player_start, tuning.player_size, tuning.player_size),
            vel: Vec2::ZERO,
            on_ground: false,
            jump_pending: false,
            is_jumping: false,
            won: false,
            died: false,
            jump_strength: tuning.jump_strength,
            booster_cooldown: 0,
            contacts: Contacts::default(),
            spin: 0.0,
        }
    }

    /// Feed this tick's jump input
    pub fn set_jump_intent(&mut self, held: bool) {
        self.jump_pending = held;
        if held {
            self.is_jumping = true;
        }
    }

    /// Advance one tick against `level`
    pub fn tick(&mut self, level: &mut Level, tuning: &Tuning) -> Outcome {
        assert!(
            self.vel.is_finite() && self.rect.x.is_finite() && self.rect.y.is_finite(),
            "player state is not finite: pos=({}, {}) vel={:?}",
            self.rect.x,
            self.rect.y,
            self.vel
        );

        self.vel.x = tuning.run_speed;
        self.booster_cooldown = self.booster_cooldown.saturating_sub(1);

        // Gravity only applies if we started the tick airborne, so a fresh
        // jump leaves with exactly -jump_strength
        let grounded = self.on_ground;
        if self.is_jumping && grounded {
            self.vel.y = -self.jump_strength;
            self.on_ground = false;
        }
        if !grounded {
            self.vel.y = (self.vel.y + tuning.gravity).min(tuning.terminal_velocity);
        }

        // X axis
        let mut contacts = resolve(self, &mut level.obstacles, 0.0, tuning);

        // Y axis
        self.rect.translate(Vec2::new(0.0, self.vel.y));
        self.on_ground = false;
        let vy = self.vel.y;
        contacts = contacts.merge(resolve(self, &mut level.obstacles, vy, tuning));

        // Below the grid there is nothing left to land on
        if self.rect.top() > level.height {
            log::debug!("Player fell out of the level at y={}", self.rect.top());
            contacts.died = true;
        }

        if self.is_jumping {
            self.spin = (self.spin - SPIN_PER_TICK) % 360.0;
        }

        self.won |= contacts.won;
        self.died |= contacts.died;
        self.contacts = contacts;

        if self.died {
            Outcome::Died
        } else if self.won {
            Outcome::Won
        } else {
            Outcome::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacle::{Obstacle, ObstacleKind};
    use proptest::prelude::*;

    fn level_with(obstacles: Vec<Obstacle>) -> Level {
        Level {
            obstacles,
            width: 2000.0,
            height: 2000.0,
        }
    }

    fn block(x: f32, y: f32) -> Obstacle {
        Obstacle::new(ObstacleKind::Block, Rect::new(x, y, 32.0, 32.0))
    }

    /// Player standing on a block at y=300
    fn grounded_player(tuning: &Tuning) -> (Player, Level) {
        let mut player = Player::new(tuning);
        player.rect = Rect::new(100.0, 268.0, 32.0, 32.0);
        player.on_ground = true;
        (player, level_with(vec![block(100.0, 300.0)]))
    }

    #[test]
    fn test_grounded_jump() {
        let tuning = Tuning::default();
        let (mut player, mut level) = grounded_player(&tuning);

        player.set_jump_intent(true);
        let outcome = player.tick(&mut level, &tuning);

        assert_eq!(outcome, Outcome::Continue);
        assert_eq!(player.vel.y, -tuning.jump_strength);
        assert!(!player.on_ground);
        assert_eq!(player.rect.top(), 268.0 - tuning.jump_strength);
    }

    #[test]
    fn test_no_double_jump() {
        let tuning = Tuning::default();
        let (mut player, mut level) = grounded_player(&tuning);

        player.set_jump_intent(true);
        player.tick(&mut level, &tuning);
        let after_launch = player.vel.y;
        player.tick(&mut level, &tuning);

        assert_eq!(player.vel.y, after_launch + tuning.gravity);
    }

    #[test]
    fn test_jump_intent_is_sticky_until_landing() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        player.rect = Rect::new(100.0, 265.0, 32.0, 32.0);
        player.vel.y = 5.0;
        let mut level = level_with(vec![block(100.0, 300.0)]);

        player.set_jump_intent(true);
        player.set_jump_intent(false);
        assert!(player.is_jumping);
        assert!(!player.jump_pending);

        player.tick(&mut level, &tuning);
        assert!(player.on_ground);
        assert!(!player.is_jumping);
    }

    #[test]
    fn test_terminal_velocity_clamp() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        player.vel.y = tuning.terminal_velocity - 0.1;
        let mut level = level_with(Vec::new());

        player.tick(&mut level, &tuning);
        assert_eq!(player.vel.y, tuning.terminal_velocity);
        player.tick(&mut level, &tuning);
        assert_eq!(player.vel.y, tuning.terminal_velocity);
    }

    #[test]
    fn test_hazard_contact_dies() {
        let tuning = Tuning::default();
        for vy in [-8.0, 0.0, 8.0] {
            let mut player = Player::new(&tuning);
            player.rect = Rect::new(100.0, 100.0, 32.0, 32.0);
            player.vel.y = vy;
            let mut level = level_with(vec![Obstacle::new(
                ObstacleKind::Hazard,
                Rect::new(110.0, 100.0, 32.0, 32.0),
            )]);
            assert_eq!(player.tick(&mut level, &tuning), Outcome::Died, "vy {vy}");
        }
    }

    #[test]
    fn test_booster_relaunch_overrides_fall() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        player.rect = Rect::new(100.0, 100.0, 32.0, 32.0);
        player.vel.y = 6.0;
        let mut level = level_with(vec![Obstacle::new(
            ObstacleKind::Booster,
            Rect::new(100.0, 100.0, 32.0, 32.0),
        )]);

        player.set_jump_intent(true);
        player.tick(&mut level, &tuning);

        assert_eq!(player.vel.y, -tuning.booster_strength);
        assert!(player.contacts.boosts >= 1);
    }

    #[test]
    fn test_died_takes_priority_over_won() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        player.rect = Rect::new(100.0, 100.0, 32.0, 32.0);
        let mut level = level_with(vec![
            Obstacle::new(ObstacleKind::Goal, Rect::new(100.0, 100.0, 32.0, 32.0)),
            Obstacle::new(ObstacleKind::Hazard, Rect::new(100.0, 100.0, 32.0, 32.0)),
        ]);
        assert_eq!(player.tick(&mut level, &tuning), Outcome::Died);
        assert!(player.won && player.died);
    }

    #[test]
    fn test_falling_out_of_level_dies() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        let mut level = Level {
            obstacles: Vec::new(),
            width: 320.0,
            height: 200.0,
        };
        let mut outcome = Outcome::Continue;
        for _ in 0..100 {
            outcome = player.tick(&mut level, &tuning);
            if outcome != Outcome::Continue {
                break;
            }
        }
        assert_eq!(outcome, Outcome::Died);
    }

    #[test]
    #[should_panic(expected = "not finite")]
    fn test_nan_velocity_fails_fast() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        player.vel.y = f32::NAN;
        player.tick(&mut level_with(Vec::new()), &tuning);
    }

    proptest! {
        #[test]
        fn prop_gravity_is_monotonic(vy in -50.0f32..100.0) {
            let tuning = Tuning::default();
            let mut player = Player::new(&tuning);
            player.vel.y = vy;
            let mut level = level_with(Vec::new());

            player.tick(&mut level, &tuning);

            prop_assert!(player.vel.y <= tuning.terminal_velocity);
            prop_assert!(player.vel.y >= vy);
            if vy + tuning.gravity < tuning.terminal_velocity {
                prop_assert!(player.vel.y > vy);
            }
        }

        #[test]
        fn prop_falling_never_penetrates_block(top in 150.0f32..268.0, vy in 0.0f32..20.0) {
            let tuning = Tuning::default();
            let mut player = Player::new(&tuning);
            player.rect = Rect::new(100.0, top, 32.0, 32.0);
            player.vel.y = vy;
            let mut level = level_with(vec![block(100.0, 300.0), block(132.0, 300.0)]);

            player.tick(&mut level, &tuning);

            for obstacle in &level.obstacles {
                prop_assert!(!player.rect.overlaps(&obstacle.rect));
            }
            prop_assert!(player.rect.bottom() <= 300.0);
        }
    }
}
