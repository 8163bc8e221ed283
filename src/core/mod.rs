//! Core engine types: colors, players, moves, RNG, configuration, state.

pub mod action;
pub mod color;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Move, MoveRecord, MoveSource, TargetRow};
pub use color::{wall_color, wall_column, Color, ALL_COLORS, BOARD_SIZE};
pub use config::GameConfig;
pub use error::{ConfigError, MoveError};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, GameSummary, Phase};
