//! Error types for move application and configuration.

use super::action::Move;

/// Rejection of a move. State is never mutated when one of these is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("illegal move: {mv}")]
    IllegalMove { mv: Move },

    #[error("game is over; no further moves are accepted")]
    GameOver,
}

/// Invalid `GameConfig`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("factory count must be between 1 and 255 (got {0})")]
    FactoryCount(usize),

    #[error("tiles per factory must be between 1 and 4 (got {0})")]
    TilesPerFactory(usize),

    #[error("tile supply must hold at least one tile of each color")]
    EmptySupply,
}
