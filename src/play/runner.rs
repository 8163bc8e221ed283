//! Policy-versus-policy match loop.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{GameState, MoveError, PlayerId, PlayerMap, PLAYER_COUNT};
use crate::policy::MovePolicy;
use crate::rules::{GameResult, RulesEngine};

/// Configuration for a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Maximum moves per game before the match is abandoned.
    pub max_moves: usize,

    /// Seed of the first game. Game `i` of a series uses `seed + i`.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_moves: 1000,
            seed: 0,
        }
    }
}

impl MatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum moves per game.
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }

    /// Set the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Outcome of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Seed the game was dealt from.
    pub seed: u64,

    /// `None` if the move cap was hit first.
    pub result: Option<GameResult>,

    pub scores: PlayerMap<i32>,

    /// Round the game ended in.
    pub rounds: u32,

    /// Moves applied.
    pub moves: usize,
}

impl MatchRecord {
    /// Whether the game reached final scoring.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.result.is_some()
    }
}

/// Plays full games with one policy per seat.
pub struct MatchRunner {
    engine: RulesEngine,
    /// Indexed by seat.
    policies: [Box<dyn MovePolicy>; PLAYER_COUNT],
    config: MatchConfig,
}

impl MatchRunner {
    /// Create a runner. `first` sits in seat 0 and opens the game.
    pub fn new(
        engine: RulesEngine,
        first: Box<dyn MovePolicy>,
        second: Box<dyn MovePolicy>,
        config: MatchConfig,
    ) -> Self {
        Self {
            engine,
            policies: [first, second],
            config,
        }
    }

    /// Get the engine.
    pub fn engine(&self) -> &RulesEngine {
        &self.engine
    }

    /// Get the configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Policy name for a seat.
    pub fn policy_name(&self, player: PlayerId) -> &'static str {
        self.policies[player.index()].name()
    }

    /// Play one game from a fresh deal with the given seed.
    pub fn play(&self, seed: u64) -> Result<(MatchRecord, GameState), MoveError> {
        let mut state = self.engine.new_game(Some(seed));
        let record = self.run(&mut state)?;
        Ok((record, state))
    }

    /// Play `count` games with consecutive seeds starting at the configured one.
    pub fn play_series(&self, count: usize) -> Result<Vec<MatchRecord>, MoveError> {
        (0..count)
            .map(|i| {
                let seed = self.config.seed.wrapping_add(i as u64);
                self.play(seed).map(|(record, _)| record)
            })
            .collect()
    }

    /// Drive `state` until game over or the move cap.
    ///
    /// Policies draw from a fork of the game RNG, so the whole game replays
    /// from the state's seed.
    pub fn run(&self, state: &mut GameState) -> Result<MatchRecord, MoveError> {
        let mut policy_rng = state.rng.fork();
        let mut moves = 0;

        while !self.engine.is_game_over(state) && moves < self.config.max_moves {
            let legal = self.engine.legal_moves(state);
            let player = state.current_player;

            let Some(mv) = self.policies[player.index()].choose(&legal, &mut policy_rng) else {
                warn!(%player, round = state.round, "no legal moves; stopping");
                break;
            };

            self.engine.apply_move(state, mv)?;
            moves += 1;
        }

        if !state.is_game_over() {
            warn!(moves, max_moves = self.config.max_moves, "move cap reached");
        }

        let record = MatchRecord {
            seed: state.rng.seed(),
            result: state.result,
            scores: state.boards.map(|b| b.score),
            rounds: state.round,
            moves,
        };
        debug!(?record, "match finished");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{FirstMovePolicy, UniformPolicy};

    fn runner(config: MatchConfig) -> MatchRunner {
        MatchRunner::new(
            RulesEngine::default(),
            Box::new(UniformPolicy),
            Box::new(UniformPolicy),
            config,
        )
    }

    #[test]
    fn test_match_config_builder() {
        let config = MatchConfig::new().with_max_moves(50).with_seed(9);
        assert_eq!(config.max_moves, 50);
        assert_eq!(config.seed, 9);
        assert_eq!(MatchConfig::default().max_moves, 1000);
    }

    #[test]
    fn test_play_reaches_game_over() {
        let (record, state) = runner(MatchConfig::default()).play(42).unwrap();

        assert!(record.is_complete());
        assert!(state.is_game_over());
        assert_eq!(record.moves, state.history.len());
        assert_eq!(record.scores[PlayerId::new(0)], state.scores().0);
        assert_eq!(record.rounds, state.round);
        assert_eq!(record.seed, 42);
    }

    #[test]
    fn test_play_is_deterministic() {
        let runner = runner(MatchConfig::default());
        let (a, state_a) = runner.play(5).unwrap();
        let (b, state_b) = runner.play(5).unwrap();

        assert_eq!(a, b);
        assert_eq!(state_a.history, state_b.history);
    }

    #[test]
    fn test_move_cap() {
        let (record, state) = runner(MatchConfig::new().with_max_moves(3)).play(1).unwrap();

        assert!(!record.is_complete());
        assert_eq!(record.moves, 3);
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_play_series_uses_consecutive_seeds() {
        let records = runner(MatchConfig::new().with_seed(100)).play_series(3).unwrap();
        let seeds: Vec<_> = records.iter().map(|r| r.seed).collect();
        assert_eq!(seeds, vec![100, 101, 102]);
    }

    #[test]
    fn test_mixed_policies() {
        let runner = MatchRunner::new(
            RulesEngine::default(),
            Box::new(FirstMovePolicy),
            Box::new(UniformPolicy),
            MatchConfig::default(),
        );
        assert_eq!(runner.policy_name(PlayerId::new(0)), "first");
        assert_eq!(runner.policy_name(PlayerId::new(1)), "uniform");

        let (record, _) = runner.play(8).unwrap();
        assert!(record.is_complete());
    }
}
