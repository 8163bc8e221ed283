//! Move selection policies.
//!
//! A policy sees only the legal-move list the engine produced and an RNG. It
//! has no access to the game state and keeps no state of its own, so one
//! policy value can serve any number of games and threads.

use crate::core::{GameRng, Move};

/// Picks one move out of the engine's legal-move enumeration.
pub trait MovePolicy: Send + Sync {
    /// Choose a move from `moves`.
    ///
    /// Returns `None` only when `moves` is empty.
    fn choose(&self, moves: &[Move], rng: &mut GameRng) -> Option<Move>;

    /// Short name for logs and match records.
    fn name(&self) -> &'static str;
}

/// Uniform random policy.
///
/// Selects uniformly from legal moves. This is the reference opponent.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformPolicy;

impl MovePolicy for UniformPolicy {
    fn choose(&self, moves: &[Move], rng: &mut GameRng) -> Option<Move> {
        if moves.is_empty() {
            return None;
        }
        let idx = rng.gen_range_usize(0..moves.len());
        Some(moves[idx])
    }

    fn name(&self) -> &'static str {
        "uniform"
    }
}

/// Always plays the first legal move. Never touches the RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstMovePolicy;

impl MovePolicy for FirstMovePolicy {
    fn choose(&self, moves: &[Move], _rng: &mut GameRng) -> Option<Move> {
        moves.first().copied()
    }

    fn name(&self) -> &'static str {
        "first"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, TargetRow};

    fn moves() -> Vec<Move> {
        vec![
            Move::from_factory(0, Color::Red, TargetRow::Pattern(0)),
            Move::from_factory(1, Color::Blue, TargetRow::Pattern(3)),
            Move::from_center(Color::White, TargetRow::Floor),
        ]
    }

    #[test]
    fn test_uniform_picks_from_list() {
        let mut rng = GameRng::new(42);
        let moves = moves();

        for _ in 0..50 {
            let mv = UniformPolicy.choose(&moves, &mut rng).unwrap();
            assert!(moves.contains(&mv));
        }
    }

    #[test]
    fn test_uniform_reaches_every_move() {
        let mut rng = GameRng::new(7);
        let moves = moves();
        let mut seen = [false; 3];

        for _ in 0..200 {
            let mv = UniformPolicy.choose(&moves, &mut rng).unwrap();
            let idx = moves.iter().position(|m| *m == mv).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_uniform_is_seeded() {
        let moves = moves();
        let mut a = GameRng::new(3);
        let mut b = GameRng::new(3);

        let seq_a: Vec<_> = (0..20).map(|_| UniformPolicy.choose(&moves, &mut a)).collect();
        let seq_b: Vec<_> = (0..20).map(|_| UniformPolicy.choose(&moves, &mut b)).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn test_first_move_policy() {
        let mut rng = GameRng::new(0);
        let moves = moves();

        assert_eq!(FirstMovePolicy.choose(&moves, &mut rng), Some(moves[0]));
        assert_eq!(FirstMovePolicy.choose(&[], &mut rng), None);
        assert_eq!(UniformPolicy.choose(&[], &mut rng), None);
    }

    #[test]
    fn test_policies_as_trait_objects() {
        let policies: Vec<Box<dyn MovePolicy>> = vec![Box::new(UniformPolicy), Box::new(FirstMovePolicy)];
        let names: Vec<_> = policies.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["uniform", "first"]);
    }
}
