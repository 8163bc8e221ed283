//! Shared sessions driven from several threads.

use std::sync::Arc;
use std::thread;

use rust_azul::core::{GameRng, MoveError};
use rust_azul::policy::{MovePolicy, UniformPolicy};
use rust_azul::rules::{check_invariants, RulesEngine};
use rust_azul::session::{GameSession, SessionRegistry};

/// Threads race to move in the same game. Each attempt either applies or is
/// rejected whole; the state stays consistent throughout.
#[test]
fn test_concurrent_moves_are_atomic() {
    let session = GameSession::new(RulesEngine::default(), Some(42));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let session = session.clone();
            thread::spawn(move || {
                let mut rng = GameRng::new(t);
                let mut applied = 0;
                for _ in 0..50 {
                    let moves = session.legal_moves();
                    let Some(mv) = UniformPolicy.choose(&moves, &mut rng) else {
                        break;
                    };
                    // Another thread may have moved since we listed moves
                    match session.apply_move(mv) {
                        Ok(_) => applied += 1,
                        Err(MoveError::IllegalMove { .. } | MoveError::GameOver) => {}
                    }
                }
                applied
            })
        })
        .collect();

    let applied: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

    session.with_state(|state| {
        assert_eq!(state.history.len(), applied);
        assert_eq!(check_invariants(state, session.engine().config()), Ok(()));
    });
}

#[test]
fn test_registry_across_threads() {
    let registry = Arc::new(SessionRegistry::new(RulesEngine::default()));

    let handles: Vec<_> = (0..8u64)
        .map(|seed| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let (id, session) = registry.create(Some(seed));
                let mv = session.legal_moves()[0];
                registry.apply_move(id, mv).unwrap();
                id
            })
        })
        .collect();

    let mut ids: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    ids.sort_unstable();
    ids.dedup();

    assert_eq!(ids.len(), 8);
    assert_eq!(registry.ids(), ids);
    for id in ids {
        let summary = registry.get(id).unwrap().summary();
        assert_eq!(summary.round, 1);
        assert_eq!(registry.get(id).unwrap().snapshot().history.len(), 1);
    }
}
