//! The rules engine: move enumeration, move application, round resolution
//! and final scoring.
//!
//! `RulesEngine` holds only the table configuration. All game data lives in
//! a `GameState` owned by the caller and passed in by reference, so one engine
//! can drive any number of independent games.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::board::{FinalBonus, PlayerBoard, RoundResolution};
use crate::core::{
    ConfigError, GameConfig, GameRng, GameState, Move, MoveError, MoveRecord, MoveSource, Phase,
    PlayerId, PlayerMap,
};
use crate::supply::{DraftPools, TilePool};

use super::invariants::check_invariants;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Strictly higher final score.
    Winner(PlayerId),
    /// Scores were level; the tie goes to player 0.
    TieBreak(PlayerId),
}

impl GameResult {
    /// The winning player, however decided.
    #[must_use]
    pub fn winner(self) -> PlayerId {
        match self {
            GameResult::Winner(p) | GameResult::TieBreak(p) => p,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner() == player
    }
}

/// Per-board outcome of one round's resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    /// The round that just ended.
    pub round: u32,

    /// Wall placements, penalties and new score for each player.
    pub boards: PlayerMap<RoundResolution>,

    /// Final bonuses, present when this resolution ended the game.
    pub final_bonus: Option<PlayerMap<FinalBonus>>,
}

/// What one accepted move did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The move as recorded in history.
    pub record: MoveRecord,

    /// Tiles that spilled onto the floor.
    pub overflow: usize,

    /// Whether the mover picked up the first-player marker.
    pub took_marker: bool,

    /// Set when the move emptied the draft pools and the round resolved.
    pub round_report: Option<RoundReport>,
}

/// Two-player rules engine.
#[derive(Clone, Debug, Default)]
pub struct RulesEngine {
    config: GameConfig,
}

impl RulesEngine {
    /// Create an engine for a validated table configuration.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the game configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a game: full shuffled supply, first round dealt, player 0 to move.
    ///
    /// Without a seed one is drawn from OS entropy; it can be recovered from
    /// `state.rng.seed()`.
    #[must_use]
    pub fn new_game(&self, seed: Option<u64>) -> GameState {
        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        self.new_game_with_rng(rng)
    }

    /// Start a game drawing tiles from `rng`.
    #[must_use]
    pub fn new_game_with_rng(&self, mut rng: GameRng) -> GameState {
        let mut supply = TilePool::new(&self.config, &mut rng);
        let draft = DraftPools::deal(&self.config, &mut supply, &mut rng);
        debug!(seed = rng.seed(), "new game");

        GameState {
            supply,
            draft,
            boards: PlayerMap::with_default(),
            current_player: PlayerId::new(0),
            next_round_starter: None,
            round: 1,
            phase: Phase::Draft,
            result: None,
            history: im::Vector::new(),
            rng,
        }
    }

    /// Enumerate every legal move for the player to move.
    ///
    /// Order: factories by index then the center; within a source, colors in
    /// `ALL_COLORS` order; within a color, pattern rows 0..4 then the floor.
    /// Empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self, state: &GameState) -> Vec<Move> {
        if state.phase != Phase::Draft {
            return Vec::new();
        }

        let board = state.current_board();
        state
            .draft
            .offers()
            .flat_map(|(source, color, _)| {
                board
                    .enumerate_legal_rows(color)
                    .into_iter()
                    .map(move |target| Move::new(source, color, target))
            })
            .collect()
    }

    /// Whether `mv` is in `legal_moves(state)`.
    #[must_use]
    pub fn is_legal(&self, state: &GameState, mv: &Move) -> bool {
        state.phase == Phase::Draft
            && state
                .draft
                .tiles_at(mv.source)
                .is_some_and(|tiles| tiles.contains(&mv.color))
            && state.current_board().legal_placement(mv.target, mv.color)
    }

    /// Apply a move for the player to move.
    ///
    /// Rejected moves leave `state` untouched. When the move empties the
    /// draft pools the round resolves immediately; if that completes a wall
    /// row the game ends, otherwise the next round is dealt.
    pub fn apply_move(&self, state: &mut GameState, mv: Move) -> Result<MoveOutcome, MoveError> {
        if state.phase == Phase::GameOver {
            debug!(%mv, "move rejected: game over");
            return Err(MoveError::GameOver);
        }
        if !self.is_legal(state, &mv) {
            debug!(player = %state.current_player, %mv, "move rejected: illegal");
            return Err(MoveError::IllegalMove { mv });
        }

        let player = state.current_player;
        let illegal = MoveError::IllegalMove { mv };

        let (count, took_marker) = match mv.source {
            MoveSource::Factory(i) => (
                state
                    .draft
                    .take_from_factory(i as usize, mv.color)
                    .ok_or(illegal)?,
                false,
            ),
            MoveSource::Center => {
                let take = state.draft.take_from_center(mv.color).ok_or(illegal)?;
                (take.count, take.took_marker)
            }
        };

        let board = &mut state.boards[player];
        if took_marker {
            board.receive_marker();
            state.next_round_starter = Some(player);
        }
        let overflow = board.place(mv.target, mv.color, count);

        let record = MoveRecord {
            player,
            mv,
            count,
            round: state.round,
            sequence: state.history.len() as u32,
        };
        state.history.push_back(record.clone());
        debug!(%player, %mv, count, overflow, took_marker, "move applied");

        let round_report = if self.is_round_over(state) {
            Some(self.resolve_round(state))
        } else {
            state.current_player = player.opponent();
            None
        };

        debug_assert_eq!(check_invariants(state, &self.config), Ok(()));

        Ok(MoveOutcome {
            record,
            overflow,
            took_marker,
            round_report,
        })
    }

    /// All factories and the center are empty.
    #[must_use]
    pub fn is_round_over(&self, state: &GameState) -> bool {
        state.draft.is_empty()
    }

    #[must_use]
    pub fn is_game_over(&self, state: &GameState) -> bool {
        state.is_game_over()
    }

    /// Scores in seat order.
    #[must_use]
    pub fn scores(&self, state: &GameState) -> (i32, i32) {
        state.scores()
    }

    /// The winner, once the game is over.
    #[must_use]
    pub fn winner(&self, state: &GameState) -> Option<PlayerId> {
        state.result.map(GameResult::winner)
    }

    /// The full result, once the game is over.
    #[must_use]
    pub fn result(&self, state: &GameState) -> Option<GameResult> {
        state.result
    }

    /// Resolve every board, then either end the game or deal the next round.
    fn resolve_round(&self, state: &mut GameState) -> RoundReport {
        let boards = PlayerMap::new(|player| {
            let resolution = state.boards[player].resolve_round();
            state.supply.discard.extend_from_slice(&resolution.discarded);
            resolution
        });
        info!(
            round = state.round,
            score_0 = boards[PlayerId::new(0)].score,
            score_1 = boards[PlayerId::new(1)].score,
            "round resolved"
        );

        let mut report = RoundReport {
            round: state.round,
            boards,
            final_bonus: None,
        };

        if state.boards.values().any(PlayerBoard::has_complete_row) {
            report.final_bonus = Some(self.finish_game(state));
        } else {
            state.round += 1;
            if let Some(bonus) = self.start_round(state) {
                report.final_bonus = Some(bonus);
            }
        }

        report
    }

    /// Deal the next round. The marker holder starts; if nobody claimed it,
    /// turns keep alternating.
    ///
    /// A deal that yields no tiles at all cannot be played and ends the game.
    fn start_round(&self, state: &mut GameState) -> Option<PlayerMap<FinalBonus>> {
        state.current_player = state
            .next_round_starter
            .take()
            .unwrap_or(state.current_player.opponent());
        state.draft = DraftPools::deal(&self.config, &mut state.supply, &mut state.rng);

        if state.draft.is_empty() {
            warn!(round = state.round, "no tiles left to deal; ending game");
            return Some(self.finish_game(state));
        }
        None
    }

    /// Apply end-of-game bonuses and decide the winner. Ties go to player 0.
    fn finish_game(&self, state: &mut GameState) -> PlayerMap<FinalBonus> {
        let bonuses = PlayerMap::new(|player| state.boards[player].apply_final_bonus());

        let (s0, s1) = state.scores();
        let result = match s0.cmp(&s1) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::new(0)),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::new(1)),
            std::cmp::Ordering::Equal => GameResult::TieBreak(PlayerId::new(0)),
        };

        state.phase = Phase::GameOver;
        state.result = Some(result);
        info!(round = state.round, score_0 = s0, score_1 = s1, winner = %result.winner(), "game over");

        bonuses
    }
}
