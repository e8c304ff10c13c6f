//! Configuration errors.

use crate::core::{Color, Position, TokenId};

/// Errors that make a board configuration unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("player order is empty")]
    NoPlayers,

    #[error("{0} appears more than once in the player order")]
    DuplicatePlayer(Color),

    #[error("{first} and {second} share exit cell {cell}")]
    SharedStart {
        first: Color,
        second: Color,
        cell: usize,
    },

    #[error("no start entry for seated color {0}")]
    MissingStart(Color),

    #[error("track must have at least 2 cells")]
    TrackTooShort,

    #[error("home lane must have at least 1 cell")]
    EmptyHomeLane,

    #[error("{what} index {index} is outside the track (length {track_length})")]
    CellOutOfRange {
        what: &'static str,
        index: usize,
        track_length: usize,
    },

    #[error("{color} lane entry must be cell {expected}, found {actual}")]
    LaneEntryMismatch {
        color: Color,
        expected: usize,
        actual: usize,
    },

    #[error("at most 2 tokens may begin on the start cell, requested {0}")]
    TooManyOnStart(u8),

    #[error("{token} cannot be placed at {position}")]
    InvalidPlacement { token: TokenId, position: Position },

    #[error("ring cell {0} holds more than 2 tokens")]
    Overcrowded(usize),
}
