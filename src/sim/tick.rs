//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session by one frame, dispatching on the
//! current phase. Menu, Won and Dead all run through here too; they just
//! accept a narrower set of inputs.

use glam::Vec2;

use super::camera;
use super::hud;
use super::obstacle::{Obstacle, ObstacleKind};
use super::player::Outcome;
use super::rect::Rect;
use super::state::{GameEvent, GamePhase, GameState, Summary};
use crate::consts::MAX_TOKENS;

/// How far ahead of the player the autopilot looks for trouble
const AUTOPILOT_LOOKAHEAD: f32 = 40.0;
/// Ticks the autopilot waits on a menu or summary screen before confirming
const AUTOPILOT_HOLD_TICKS: u32 = 90;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump / activate booster (held)
    pub jump: bool,
    /// Menu level selection
    pub level_prev: bool,
    pub level_next: bool,
    /// Start from the menu, or continue from a summary screen
    pub confirm: bool,
    /// Terminate the session
    pub quit: bool,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.quit {
        state.request_quit();
    }
    if state.quit_requested {
        return;
    }

    state.time_ticks += 1;
    state.phase_ticks = state.phase_ticks.saturating_add(1);

    let mut input = input.clone();
    if input.idle_mode {
        autopilot(state, &mut input);
    }
    let input = &input;

    match state.phase {
        GamePhase::Menu => tick_menu(state, input),
        GamePhase::Running => tick_running(state, input),
        GamePhase::Won | GamePhase::Dead => {
            // Gameplay is suspended; only confirm gets through
            if input.confirm {
                state.reset_attempt();
            }
        }
    }

    // Keep the trail animating on every screen
    state.trail.update();
}

fn tick_menu(state: &mut GameState, input: &TickInput) {
    let last = state.levels.len() - 1;
    if input.level_prev && state.session.current_level > 0 {
        state.session.current_level -= 1;
        log::info!("Selected level {}", state.session.current_level + 1);
    }
    if input.level_next && state.session.current_level < last {
        state.session.current_level += 1;
        log::info!("Selected level {}", state.session.current_level + 1);
    }
    if input.confirm {
        state.reset_attempt();
    }
}

fn tick_running(state: &mut GameState, input: &TickInput) {
    let Some(attempt) = state.attempt.as_mut() else {
        log::warn!("Running without an attempt, returning to menu");
        state.set_phase(GamePhase::Menu);
        return;
    };

    let player = &mut attempt.player;
    player.set_jump_intent(input.jump);
    let outcome = player.tick(&mut attempt.level, &state.tuning);
    let contacts = player.contacts;

    if outcome == Outcome::Continue {
        camera::scroll(&mut attempt.level.obstacles, player.vel.x);
        if state.trail_enabled {
            state
                .trail
                .emit(Vec2::new(player.rect.left() - 1.0, player.rect.bottom() + 2.0));
        }
    }

    if contacts.tokens > 0 {
        state.session.add_tokens(contacts.tokens);
        for _ in 0..contacts.tokens {
            state.push_event(GameEvent::TokenCollected);
        }
        log::debug!("Tokens: {}", state.session.tokens_collected);
    }
    if contacts.boosts > 0 {
        state.push_event(GameEvent::BoosterUsed);
    }

    match outcome {
        Outcome::Continue => {
            state.session.progress_fill =
                hud::advance_progress(state.session.progress_fill, state.tuning.progress_increment);
        }
        Outcome::Died => on_death(state),
        Outcome::Won => on_win(state),
    }
}

fn on_death(state: &mut GameState) {
    state.session.attempts += 1;
    state.session.progress_fill = 0.0;
    state.summary = Some(Summary::Died {
        attempts: state.session.attempts,
    });
    state.push_event(GameEvent::Died);
    log::info!(
        "Died on level {} (attempt {})",
        state.session.current_level + 1,
        state.session.attempts
    );
    state.set_phase(GamePhase::Dead);
}

fn on_win(state: &mut GameState) {
    let level = state.session.current_level;
    let tokens = state.session.tokens_collected;
    let full_clear = tokens >= MAX_TOKENS && state.levels.is_last(level);

    state.summary = Some(Summary::Won {
        level,
        tokens,
        full_clear,
    });
    state.push_event(GameEvent::LevelComplete { level, full_clear });
    log::info!(
        "Completed level {} with {}/{} tokens{}",
        level + 1,
        tokens,
        MAX_TOKENS,
        if full_clear { " - game complete!" } else { "" }
    );

    state.session.attempts = 0;
    state.session.tokens_collected = 0;
    state.session.progress_fill = 0.0;
    state.session.current_level = if state.levels.is_last(level) {
        log::info!("All levels complete, wrapping to the first");
        0
    } else {
        level + 1
    };
    state.set_phase(GamePhase::Won);
}

/// Fill in inputs for idle/demo mode
fn autopilot(state: &GameState, input: &mut TickInput) {
    match state.phase {
        GamePhase::Menu | GamePhase::Won | GamePhase::Dead => {
            if state.phase_ticks >= AUTOPILOT_HOLD_TICKS {
                input.confirm = true;
            }
        }
        GamePhase::Running => {
            if let Some(attempt) = &state.attempt {
                input.jump = wants_jump(&attempt.player.rect, &attempt.level.obstacles);
            }
        }
    }
}

/// Jump at walls, hazards and gaps just ahead; hold while touching a booster
fn wants_jump(player: &Rect, obstacles: &[Obstacle]) -> bool {
    let probe_x = player.right() + AUTOPILOT_LOOKAHEAD;
    let mut ground_ahead = false;

    for obstacle in obstacles.iter().filter(|o| o.is_active()) {
        let rect = &obstacle.rect;
        match obstacle.kind {
            ObstacleKind::Booster if rect.overlaps(player) => return true,
            ObstacleKind::Block | ObstacleKind::Hazard => {
                let ahead = rect.left() >= player.right() - 1.0 && rect.left() <= probe_x;
                if ahead && rect.overlaps_vertically(player) {
                    return true;
                }
                if obstacle.kind == ObstacleKind::Block
                    && rect.left() <= probe_x
                    && rect.right() >= probe_x
                    && rect.top() >= player.bottom()
                    && rect.top() < player.bottom() + 1.0
                {
                    ground_ahead = true;
                }
            }
            _ => {}
        }
    }

    !ground_ahead
}
