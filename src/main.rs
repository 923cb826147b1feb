//! Tile Dash entry point
//!
//! Loads configuration and levels, then runs the fixed-step loop headless
//! with the autopilot at the controls. Frames go to a sink that logs them.

use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use tile_dash::consts::*;
use tile_dash::levels::{LEVEL_DIR, LEVEL_FILES};
use tile_dash::render::{self, Frame, FrameSink, SinkFault};
use tile_dash::settings::SETTINGS_FILE;
use tile_dash::sim::{GameEvent, GameState, TickInput, tick};
use tile_dash::tuning::TUNING_FILE;
use tile_dash::{LevelSet, Settings, StartupError, Tuning};

/// Frames to run before the demo gives up (five minutes at 60 Hz)
const DEMO_FRAME_CAP: u64 = 5 * 60 * SIM_HZ as u64;

/// Sink that narrates frames through the log
struct LogSink {
    music_volume: f32,
    last_level: usize,
    frames: u64,
    game_complete: bool,
}

impl LogSink {
    fn new(settings: &Settings, last_level: usize) -> Self {
        Self {
            music_volume: settings.effective_music_volume(),
            last_level,
            frames: 0,
            game_complete: false,
        }
    }
}

impl FrameSink for LogSink {
    fn present(&mut self, frame: &Frame) -> Result<(), SinkFault> {
        self.frames += 1;

        for event in &frame.events {
            match event {
                GameEvent::MusicStart(track) => log::info!(
                    "Music: {} at volume {:.2}",
                    track.file_name(),
                    self.music_volume
                ),
                GameEvent::LevelComplete { level, full_clear } => {
                    if *full_clear {
                        log::info!("Full clear");
                    }
                    if *level == self.last_level {
                        self.game_complete = true;
                    }
                }
                GameEvent::TokenCollected | GameEvent::BoosterUsed | GameEvent::Died => {
                    log::debug!("Event: {:?}", event)
                }
            }
        }

        // One text dump per second is plenty
        if self.frames % SIM_HZ as u64 == 1 {
            for text in frame.texts() {
                log::debug!("[frame {}] {}", self.frames, text);
            }
        }
        Ok(())
    }
}

/// Game instance holding all state
struct Game {
    state: GameState,
    settings: Settings,
    sink: LogSink,
    accumulator: f32,
    input: TickInput,
    frames: u64,
}

impl Game {
    fn new(seed: u64, levels: LevelSet, tuning: Tuning, settings: Settings) -> Self {
        let last_level = levels.len() - 1;
        let mut state = GameState::new(seed, levels, tuning);
        state.trail_enabled = settings.effective_trail();
        Self {
            state,
            sink: LogSink::new(&settings, last_level),
            settings,
            accumulator: 0.0,
            input: TickInput {
                idle_mode: true,
                ..Default::default()
            },
            frames: 0,
        }
    }

    /// Run simulation ticks
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // One frame per tick
            self.frames += 1;
            render::present(&mut self.state, &self.settings, &mut self.sink);
            if self.finished() {
                break;
            }
        }
    }

    fn finished(&self) -> bool {
        self.state.quit_requested || self.sink.game_complete || self.frames >= DEMO_FRAME_CAP
    }
}

fn run() -> Result<(), StartupError> {
    let settings = Settings::load(Path::new(SETTINGS_FILE));
    let tuning = Tuning::load_or_default(Path::new(TUNING_FILE))?;
    let levels = LevelSet::load(Path::new(LEVEL_DIR), &LEVEL_FILES)?;
    log::info!("Loaded {} levels", levels.len());

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    log::info!("Seed: {}", seed);

    let mut game = Game::new(seed, levels, tuning, settings);
    let frame_time = Duration::from_secs_f32(SIM_DT);
    let mut last = Instant::now();

    while !game.finished() {
        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32();
        last = now;
        game.update(dt);

        let spent = now.elapsed();
        if spent < frame_time {
            std::thread::sleep(frame_time - spent);
        }
    }

    let session = &game.state.session;
    log::info!(
        "Stopped after {} frames on level {} (attempt {})",
        game.frames,
        session.current_level + 1,
        session.attempts + 1
    );
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Tile Dash starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
