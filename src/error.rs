//! Error types for loading levels and configuration
//!
//! The simulation itself has no recoverable errors: anything that goes wrong
//! mid-frame is either a Reset or a programming error that panics.

use std::path::PathBuf;

use thiserror::Error;

/// Problems reading or parsing tile-grid level data
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to read level {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("level grid is empty")]
    Empty,

    /// Rows must all have the same number of cells, otherwise geometry is ambiguous
    #[error("ragged level grid: row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("no levels to play")]
    NoLevels,
}

/// Problems reading tuning/settings files
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tuning value `{field}`: {value}")]
    Invalid { field: &'static str, value: f32 },
}

/// Anything that stops the game from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Level(#[from] LevelError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
