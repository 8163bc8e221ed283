//! # rust-azul
//!
//! A two-player tile-drafting rules engine with deterministic, replayable
//! games.
//!
//! ## Design Principles
//!
//! 1. **Caller-Owned State**: `RulesEngine` holds only configuration. Every
//!    operation takes a `GameState` by reference, so games can be cloned,
//!    stored, and driven from anywhere.
//!
//! 2. **Explicit Rejection**: An illegal move returns `MoveError` and leaves
//!    the state untouched.
//!
//! 3. **Injected Randomness**: Tile draws and policy choices come from a
//!    seeded `GameRng`. The same seed replays the same game.
//!
//! ## Modules
//!
//! - `core`: Colors, players, moves, RNG, configuration, game state
//! - `supply`: Tile bag and discard, factory displays and center
//! - `board`: Pattern lines, wall, floor line, per-player board
//! - `rules`: Rules engine and invariant checks
//! - `policy`: Move selection policies
//! - `play`: Policy-versus-policy match runner
//! - `session`: Mutex-guarded shared games
//! - `display`: Plain-text rendering
//!
//! ## Example
//!
//! ```
//! use rust_azul::{RulesEngine, UniformPolicy, MovePolicy};
//!
//! let engine = RulesEngine::default();
//! let mut state = engine.new_game(Some(42));
//! let mut rng = state.rng.fork();
//!
//! while !engine.is_game_over(&state) {
//!     let moves = engine.legal_moves(&state);
//!     let mv = UniformPolicy.choose(&moves, &mut rng).unwrap();
//!     engine.apply_move(&mut state, mv).unwrap();
//! }
//! assert!(engine.winner(&state).is_some());
//! ```

pub mod board;
pub mod core;
pub mod display;
pub mod play;
pub mod policy;
pub mod rules;
pub mod session;
pub mod supply;

// Re-export commonly used types
pub use crate::core::{
    Color, GameConfig, GameRng, GameRngState, GameState, GameSummary, Move, MoveError,
    MoveRecord, MoveSource, PlayerId, PlayerMap, TargetRow,
};

pub use crate::board::{FloorEntry, PlayerBoard, Wall};

pub use crate::supply::{DraftPools, TilePool};

pub use crate::rules::{GameResult, MoveOutcome, RoundReport, RulesEngine};

pub use crate::policy::{FirstMovePolicy, MovePolicy, UniformPolicy};

pub use crate::play::{MatchConfig, MatchRecord, MatchRunner};

pub use crate::session::{GameSession, SessionError, SessionId, SessionRegistry};
