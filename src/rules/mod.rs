//! Game rules.
//!
//! - `RulesEngine`: legal moves, move application, round and game resolution
//! - `invariants`: tile conservation and related consistency checks
//!
//! The engine is a synchronous state machine: every call is one complete
//! transition on a caller-owned `GameState`.

pub mod engine;
pub mod invariants;

pub use engine::{GameResult, MoveOutcome, RoundReport, RulesEngine};
pub use invariants::{check_invariants, marker_count, tile_count, InvariantViolation};
