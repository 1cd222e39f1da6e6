use std::path::PathBuf;

use crate::game::{Seat, COLS};

/// Errors returned by the game engine. Every variant is recoverable: the
/// caller re-prompts and tries again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("player {}'s name must not be empty", .seat.number())]
    InvalidName { seat: Seat },

    #[error("invalid input '{0}', expected a column between 1 and {cols}", cols = COLS)]
    InvalidInput(String),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is over, restart to play again")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
