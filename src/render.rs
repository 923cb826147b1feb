//! Per-frame draw list
//!
//! The simulation never draws. Each frame it is turned into a flat list of
//! sprites, particles, bars and text, plus the events emitted since the last
//! frame, and handed to whatever sink the platform provides.

use glam::Vec2;
use thiserror::Error;

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::hud::{ProgressTier, bar_fill_width};
use crate::sim::{GameEvent, GamePhase, GameState, ObstacleKind, Rect};

pub type Rgb = [u8; 3];

pub const WHITE: Rgb = [255, 255, 255];
pub const BLACK: Rgb = [0, 0, 0];
pub const GREEN: Rgb = [0, 255, 0];
pub const BLUE: Rgb = [0, 0, 255];
pub const GOLD: Rgb = [255, 255, 0];
pub const YELLOW_BG: Rgb = [255, 255, 0];
pub const SIENNA_BG: Rgb = [255, 130, 71];

const TIP: &str = "Tip: tap and hold for the first few seconds of the level";

/// Sprite sheet entries the sink is expected to provide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Avatar,
    Block,
    Spike,
    Coin,
    Orb,
    Trick,
    End,
    Background,
}

impl Sprite {
    pub fn for_obstacle(kind: ObstacleKind) -> Self {
        match kind {
            ObstacleKind::Block => Sprite::Block,
            ObstacleKind::Hazard => Sprite::Spike,
            ObstacleKind::Collectible { .. } => Sprite::Coin,
            ObstacleKind::Booster => Sprite::Orb,
            ObstacleKind::Passthrough => Sprite::Trick,
            ObstacleKind::Goal => Sprite::End,
        }
    }
}

/// One draw instruction, in painter's order
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear(Rgb),
    Sprite {
        sprite: Sprite,
        rect: Rect,
        /// Degrees, counter-clockwise
        rotation: f32,
    },
    Particle {
        pos: Vec2,
        size: f32,
        color: Rgb,
    },
    ProgressBar {
        fill: f32,
        length: f32,
        height: f32,
        tier: ProgressTier,
    },
    Text {
        text: String,
        pos: Vec2,
        color: Rgb,
    },
}

/// Everything the sink needs for one frame
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub commands: Vec<DrawCmd>,
    pub events: Vec<GameEvent>,
}

impl Frame {
    fn text(&mut self, text: impl Into<String>, x: f32, y: f32, color: Rgb) {
        self.commands.push(DrawCmd::Text {
            text: text.into(),
            pos: Vec2::new(x, y),
            color,
        });
    }

    /// All text lines in the frame, for sinks without a renderer
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// The sink could not present a frame (lost display, missing asset, ...)
#[derive(Debug, Error)]
#[error("presentation failed: {0}")]
pub struct SinkFault(pub String);

/// Consumer of frames: a renderer, an audio mixer, or both
pub trait FrameSink {
    fn present(&mut self, frame: &Frame) -> Result<(), SinkFault>;
}

/// Build the draw list for the current state
pub fn build_frame(state: &GameState, settings: &Settings) -> Frame {
    let mut frame = Frame::default();
    match state.phase {
        GamePhase::Menu => draw_menu(state, &mut frame),
        GamePhase::Running => draw_running(state, settings, &mut frame),
        GamePhase::Won => {
            frame.commands.push(DrawCmd::Clear(YELLOW_BG));
            if let Some(summary) = &state.summary {
                frame.text(summary.message(), 200.0, 300.0, BLUE);
            }
        }
        GamePhase::Dead => {
            frame.commands.push(DrawCmd::Clear(SIENNA_BG));
            if let Some(summary) = &state.summary {
                frame.text(summary.message(), 100.0, 100.0, WHITE);
            }
            frame.text(TIP, 100.0, 400.0, BLUE);
        }
    }
    frame
}

fn draw_menu(state: &GameState, frame: &mut Frame) {
    let level = state.session.current_level + 1;
    frame.commands.push(DrawCmd::Clear(BLACK));
    frame.text("Welcome to Tile Dash.", 50.0, 100.0, WHITE);
    frame.text(
        format!("Choose a level ({level}) with the level keys"),
        50.0,
        150.0,
        WHITE,
    );
    frame.text(format!("Level {level}."), 50.0, 200.0, GOLD);
    frame.text("Controls: jump: Space/Up, quit: Esc", 50.0, 400.0, GREEN);
    frame.text(TIP, 50.0, 500.0, BLUE);
}

fn draw_running(state: &GameState, settings: &Settings, frame: &mut Frame) {
    frame.commands.push(DrawCmd::Sprite {
        sprite: Sprite::Background,
        rect: Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT),
        rotation: 0.0,
    });

    for particle in &state.trail.particles {
        frame.commands.push(DrawCmd::Particle {
            pos: particle.pos,
            size: particle.size,
            color: WHITE,
        });
    }

    let Some(attempt) = &state.attempt else {
        return;
    };

    let player = &attempt.player;
    let rotation = if player.is_jumping && settings.effective_spin() {
        player.spin
    } else {
        0.0
    };
    frame.commands.push(DrawCmd::Sprite {
        sprite: Sprite::Avatar,
        rect: player.rect,
        rotation,
    });

    // Cull anything off screen; consumed tokens are gone
    for obstacle in attempt.level.obstacles.iter().filter(|o| o.is_active()) {
        let rect = obstacle.rect;
        if rect.right() < 0.0 || rect.left() > SCREEN_WIDTH {
            continue;
        }
        frame.commands.push(DrawCmd::Sprite {
            sprite: Sprite::for_obstacle(obstacle.kind),
            rect,
            rotation: 0.0,
        });
    }

    draw_hud(state, frame);
}

fn draw_hud(state: &GameState, frame: &mut Frame) {
    let fill = state.session.progress_fill;
    frame.commands.push(DrawCmd::ProgressBar {
        fill: bar_fill_width(fill),
        length: BAR_LENGTH,
        height: BAR_HEIGHT,
        tier: ProgressTier::for_fill(fill),
    });
    frame.text(
        format!("Attempt {}", state.session.attempts),
        BAR_LENGTH,
        0.0,
        WHITE,
    );
    frame.text(
        format!("Coins {}/{}", state.session.tokens_collected, MAX_TOKENS),
        BAR_LENGTH,
        25.0,
        GOLD,
    );
}

/// Build, drain events into, and present one frame
///
/// A sink fault ends the session cleanly instead of unwinding mid-frame.
pub fn present(state: &mut GameState, settings: &Settings, sink: &mut impl FrameSink) {
    let mut frame = build_frame(state, settings);
    frame.events = state.drain_events();
    if let Err(e) = sink.present(&frame) {
        log::error!("{}; shutting down", e);
        state.request_quit();
    }
}
