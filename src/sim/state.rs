//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in one `GameState`, owned by the
//! loop and passed explicitly to `tick`.

use serde::{Deserialize, Serialize};

use super::level::Level;
use super::player::Player;
use super::trail::Trail;
use crate::consts::MAX_TOKENS;
use crate::levels::LevelSet;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Level select, waiting for start
    Menu,
    /// Active gameplay
    Running,
    /// Level complete screen, waiting for confirm
    Won,
    /// Death screen, waiting for confirm
    Dead,
}

/// Background music, chosen per level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MusicTrack {
    Bossfight,
    CastleTown,
}

impl MusicTrack {
    pub fn for_level(index: usize) -> Self {
        if index % 2 == 1 {
            MusicTrack::CastleTown
        } else {
            MusicTrack::Bossfight
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            MusicTrack::Bossfight => "bossfight-Vextron.mp3",
            MusicTrack::CastleTown => "castle-town.mp3",
        }
    }
}

/// Discrete events for the audio/render side, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    MusicStart(MusicTrack),
    TokenCollected,
    BoosterUsed,
    Died,
    LevelComplete { level: usize, full_clear: bool },
}

/// Outcome of the last attempt, shown on the Won/Dead screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Summary {
    Died {
        attempts: u32,
    },
    Won {
        /// Zero-based index of the completed level
        level: usize,
        tokens: u32,
        /// Every token collected on the final level
        full_clear: bool,
    },
}

impl Summary {
    pub fn message(&self) -> String {
        match *self {
            Summary::Died { .. } => "Game Over. [SPACE] to restart".to_string(),
            Summary::Won {
                tokens,
                full_clear: true,
                ..
            } => format!(
                "Coins: {tokens}/{MAX_TOKENS}! You completed the game, congratulations! \
                 Press SPACE to restart, or ESC to quit"
            ),
            Summary::Won { level, tokens, .. } => format!(
                "Level {} complete! Coins: {tokens}/{MAX_TOKENS}. \
                 Press SPACE to continue, or ESC to quit",
                level + 1
            ),
        }
    }
}

/// Counters that outlive attempts and levels
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub current_level: usize,
    /// Deaths since the last win
    pub attempts: u32,
    /// Tokens collected on the current level, kept across deaths
    pub tokens_collected: u32,
    pub progress_fill: f32,
}

impl SessionState {
    pub fn add_tokens(&mut self, tokens: u32) {
        self.tokens_collected = (self.tokens_collected + tokens).min(MAX_TOKENS);
    }
}

/// One attempt at a level: fresh obstacles and a fresh player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attempt {
    pub level: Level,
    pub player: Player,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub session: SessionState,
    /// Live attempt while Running; frozen while Won/Dead; None in the menu
    pub attempt: Option<Attempt>,
    pub summary: Option<Summary>,
    pub levels: LevelSet,
    pub tuning: Tuning,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Ticks spent in the current phase
    pub phase_ticks: u32,
    /// Emit the cosmetic trail
    pub trail_enabled: bool,
    pub trail: Trail,
    pub quit_requested: bool,
    events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(seed: u64, levels: LevelSet, tuning: Tuning) -> Self {
        Self {
            phase: GamePhase::Menu,
            session: SessionState::default(),
            attempt: None,
            summary: None,
            levels,
            tuning,
            time_ticks: 0,
            phase_ticks: 0,
            trail_enabled: true,
            trail: Trail::new(seed),
            quit_requested: false,
            events: Vec::new(),
        }
    }

    pub fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            log::debug!("Phase {:?} -> {:?}", self.phase, phase);
        }
        self.phase = phase;
        self.phase_ticks = 0;
    }

    /// Rebuild the level and player for the current level index
    pub fn reset_attempt(&mut self) {
        let index = self.session.current_level.min(self.levels.len() - 1);
        self.session.current_level = index;
        let Some(entry) = self.levels.get(index) else {
            return;
        };

        let level = Level::from_grid(&entry.grid);
        log::info!(
            "Starting {} (attempt {}, {} tokens held, {} obstacles)",
            entry.name,
            self.session.attempts + 1,
            self.session.tokens_collected,
            level.obstacles.len()
        );
        self.attempt = Some(Attempt {
            level,
            player: Player::new(&self.tuning),
        });
        self.summary = None;
        self.trail.clear();
        self.push_event(GameEvent::MusicStart(MusicTrack::for_level(index)));
        self.set_phase(GamePhase::Running);
    }

    pub fn request_quit(&mut self) {
        if !self.quit_requested {
            log::info!("Quit requested");
        }
        self.quit_requested = true;
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events emitted since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
