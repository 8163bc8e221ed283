//! Whole-state consistency checks.
//!
//! A violation here is an engine bug, never a game condition. The engine runs
//! `check_invariants` under `debug_assert!` after every accepted move.

use crate::core::{GameConfig, GameState, Phase, PlayerId};

/// A broken engine invariant.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("tile count mismatch: expected {expected}, found {found}")]
    TileCount { expected: usize, found: usize },

    #[error("{player} pattern line {row} holds {len} tiles (capacity {capacity})")]
    PatternLineOverCapacity {
        player: PlayerId,
        row: usize,
        len: usize,
        capacity: usize,
    },

    #[error("expected exactly one first-player marker during drafting, found {0}")]
    MarkerCount(usize),
}

/// Tiles across bag, discard, draft pools and both boards. The marker is not
/// a tile and is never counted.
#[must_use]
pub fn tile_count(state: &GameState) -> usize {
    state.supply.len()
        + state.draft.tile_count()
        + state.boards.values().map(|b| b.tile_count()).sum::<usize>()
}

/// Markers in the center plus markers on floor lines.
#[must_use]
pub fn marker_count(state: &GameState) -> usize {
    usize::from(state.draft.center.marker_present)
        + state.boards.values().filter(|b| b.floor.has_marker()).count()
}

/// Check tile conservation, pattern line capacity and marker uniqueness.
pub fn check_invariants(state: &GameState, config: &GameConfig) -> Result<(), InvariantViolation> {
    let found = tile_count(state);
    if found != config.total_tiles() {
        return Err(InvariantViolation::TileCount {
            expected: config.total_tiles(),
            found,
        });
    }

    for (player, board) in state.boards.iter() {
        for (row, line) in board.pattern_lines.iter().enumerate() {
            if line.len() > row + 1 {
                return Err(InvariantViolation::PatternLineOverCapacity {
                    player,
                    row,
                    len: line.len(),
                    capacity: row + 1,
                });
            }
        }
    }

    if state.phase == Phase::Draft {
        let markers = marker_count(state);
        if markers != 1 {
            return Err(InvariantViolation::MarkerCount(markers));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RulesEngine;

    #[test]
    fn test_fresh_game_is_consistent() {
        let state = RulesEngine::default().new_game(Some(3));
        assert_eq!(tile_count(&state), 100);
        assert_eq!(marker_count(&state), 1);
        assert_eq!(check_invariants(&state, &GameConfig::default()), Ok(()));
    }

    #[test]
    fn test_detects_lost_tile() {
        let mut state = RulesEngine::default().new_game(Some(3));
        state.supply.bag.pop();

        assert_eq!(
            check_invariants(&state, &GameConfig::default()),
            Err(InvariantViolation::TileCount { expected: 100, found: 99 })
        );
    }

    #[test]
    fn test_detects_duplicate_marker() {
        let mut state = RulesEngine::default().new_game(Some(3));
        state.boards[PlayerId::new(1)].receive_marker();

        assert_eq!(
            check_invariants(&state, &GameConfig::default()),
            Err(InvariantViolation::MarkerCount(2))
        );
    }

    #[test]
    fn test_marker_on_floor_counts_once() {
        let mut state = RulesEngine::default().new_game(Some(3));
        state.draft.center.marker_present = false;
        state.boards[PlayerId::new(0)].receive_marker();

        assert_eq!(marker_count(&state), 1);
        assert_eq!(check_invariants(&state, &GameConfig::default()), Ok(()));
    }
}
