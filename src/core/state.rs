//! Game state: plain data owned by the caller.
//!
//! ## GameState
//!
//! Everything needed to continue a game:
//! - Tile supply (bag and discard) and this round's draft pools
//! - Both player boards
//! - Turn, round and phase bookkeeping
//! - Move history and the RNG that deals tiles
//!
//! ## GameSummary
//!
//! The status view a presentation layer polls: current player, round,
//! game-over flag, winner and scores.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::board::PlayerBoard;
use crate::rules::GameResult;
use crate::supply::{DraftPools, TilePool};

/// Game phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Players are taking tiles.
    Draft,
    /// Final scoring has run; no more moves.
    GameOver,
}

/// Complete game state.
///
/// Cloning is cheap apart from the boards: history is an `im::Vector`.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Bag and discard pile.
    pub supply: TilePool,

    /// Factory displays and center for the current round.
    pub draft: DraftPools,

    /// One board per player.
    pub boards: PlayerMap<PlayerBoard>,

    /// Whose turn it is.
    pub current_player: PlayerId,

    /// Who claimed the first-player marker this round, if anyone.
    pub next_round_starter: Option<PlayerId>,

    /// Round number (starts at 1).
    pub round: u32,

    /// Drafting or finished.
    pub phase: Phase,

    /// Set once final scoring has run.
    pub result: Option<GameResult>,

    /// Every applied move, in order.
    pub history: Vector<MoveRecord>,

    /// Source of tile draws.
    pub rng: GameRng,
}

impl GameState {
    /// Board of `player`.
    #[must_use]
    pub fn board(&self, player: PlayerId) -> &PlayerBoard {
        &self.boards[player]
    }

    /// Board of the player to move.
    #[must_use]
    pub fn current_board(&self) -> &PlayerBoard {
        &self.boards[self.current_player]
    }

    /// Scores in seat order.
    #[must_use]
    pub fn scores(&self) -> (i32, i32) {
        (
            self.boards[PlayerId::new(0)].score,
            self.boards[PlayerId::new(1)].score,
        )
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Status view for polling clients.
    #[must_use]
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            current_player: self.current_player,
            round: self.round,
            game_over: self.is_game_over(),
            winner: self.result.map(|r| r.winner()),
            scores: self.boards.map(|b| b.score),
        }
    }
}

/// Serializable status snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub current_player: PlayerId,
    pub round: u32,
    pub game_over: bool,
    pub winner: Option<PlayerId>,
    pub scores: PlayerMap<i32>,
}
