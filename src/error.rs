use std::path::PathBuf;

use crate::game::{Coord, IllegalMove, Move};

/// Errors that can occur when reading coordinates, moves, or transported
/// boards.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("cell ({row}, {col}) is off the board")]
    OffBoard { row: usize, col: usize },

    #[error("cell {0} is not a playable dark cell")]
    UnplayableCell(Coord),

    #[error("malformed coordinate '{0}' (expected 'row,col')")]
    BadCoord(String),

    #[error("malformed move '{0}' (expected 'row,col row,col')")]
    BadMove(String),

    #[error("board string has {0} cells (expected 64)")]
    BoardLength(usize),

    #[error("unknown board symbol '{symbol}' at index {index}")]
    BadSymbol { symbol: char, index: usize },
}

/// Errors from an external move-suggestion service.
#[derive(Debug, thiserror::Error)]
pub enum SuggestionError {
    #[error("suggestion service failed: {0}")]
    Service(String),

    #[error("suggestion could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A recorded move list that no longer replays.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("move {index} ({mv}) was rejected: {reason}")]
pub struct ReplayError {
    pub index: usize,
    pub mv: Move,
    pub reason: IllegalMove,
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
