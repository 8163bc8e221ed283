//! Shared game sessions.
//!
//! The engine itself is synchronous and single-owner. A presentation layer
//! that serves several clients wraps each game in a `GameSession`: the state
//! sits behind a mutex so every `apply_move` is one atomic transition and
//! readers never see a half-applied move.
//!
//! `SessionRegistry` keeps any number of sessions by id.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{GameState, GameSummary, Move, MoveError};
use crate::rules::{MoveOutcome, RulesEngine};

/// Identifier of a session in a `SessionRegistry`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

/// Errors from session lookups and moves.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("unknown session: {0}")]
    NotFound(SessionId),

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Lock a mutex, taking the data even if another holder panicked.
///
/// A panic can only happen between complete transitions, so the state is
/// still consistent.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One game shared between threads. Clones share the same state.
#[derive(Clone, Debug)]
pub struct GameSession {
    engine: RulesEngine,
    state: Arc<Mutex<GameState>>,
}

impl GameSession {
    /// Start a new game.
    pub fn new(engine: RulesEngine, seed: Option<u64>) -> Self {
        let state = engine.new_game(seed);
        Self::from_state(engine, state)
    }

    /// Wrap an existing game.
    pub fn from_state(engine: RulesEngine, state: GameState) -> Self {
        Self {
            engine,
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn engine(&self) -> &RulesEngine {
        &self.engine
    }

    /// Apply a move atomically.
    pub fn apply_move(&self, mv: Move) -> Result<MoveOutcome, MoveError> {
        let mut state = lock(&self.state);
        self.engine.apply_move(&mut state, mv)
    }

    /// Legal moves for the player to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.engine.legal_moves(&lock(&self.state))
    }

    /// Current status.
    pub fn summary(&self) -> GameSummary {
        lock(&self.state).summary()
    }

    /// Copy of the full state.
    pub fn snapshot(&self) -> GameState {
        lock(&self.state).clone()
    }

    /// Run `f` with the state locked.
    pub fn with_state<R>(&self, f: impl FnOnce(&GameState) -> R) -> R {
        f(&lock(&self.state))
    }
}

/// Sessions by id.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    engine: RulesEngine,
    inner: Mutex<RegistryInner>,
}

#[derive(Debug, Default)]
struct RegistryInner {
    sessions: FxHashMap<SessionId, GameSession>,
    next_id: u64,
}

impl SessionRegistry {
    /// Create a registry whose games all use `engine`'s configuration.
    pub fn new(engine: RulesEngine) -> Self {
        Self {
            engine,
            inner: Mutex::new(RegistryInner::default()),
        }
    }

    /// Start a new game and register it.
    pub fn create(&self, seed: Option<u64>) -> (SessionId, GameSession) {
        let session = GameSession::new(self.engine.clone(), seed);
        let mut inner = lock(&self.inner);
        let id = SessionId(inner.next_id);
        inner.next_id += 1;
        inner.sessions.insert(id, session.clone());
        info!(%id, "session created");
        (id, session)
    }

    /// Look up a session.
    pub fn get(&self, id: SessionId) -> Result<GameSession, SessionError> {
        lock(&self.inner)
            .sessions
            .get(&id)
            .cloned()
            .ok_or(SessionError::NotFound(id))
    }

    /// Apply a move to a registered session.
    pub fn apply_move(&self, id: SessionId, mv: Move) -> Result<MoveOutcome, SessionError> {
        let session = self.get(id)?;
        Ok(session.apply_move(mv)?)
    }

    /// Drop a session. Handles already given out stay usable.
    pub fn remove(&self, id: SessionId) -> Result<GameSession, SessionError> {
        let removed = lock(&self.inner)
            .sessions
            .remove(&id)
            .ok_or(SessionError::NotFound(id))?;
        debug!(%id, "session removed");
        Ok(removed)
    }

    /// Ids of live sessions, sorted.
    pub fn ids(&self) -> Vec<SessionId> {
        let mut ids: Vec<_> = lock(&self.inner).sessions.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        lock(&self.inner).sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, PlayerId, TargetRow};

    #[test]
    fn test_session_apply_and_summary() {
        let session = GameSession::new(RulesEngine::default(), Some(42));
        let mv = session.legal_moves()[0];

        let outcome = session.apply_move(mv).unwrap();
        assert_eq!(outcome.record.player, PlayerId::new(0));

        let summary = session.summary();
        assert_eq!(summary.current_player, PlayerId::new(1));
        assert_eq!(summary.round, 1);
        assert!(!summary.game_over);
        assert_eq!(session.with_state(|s| s.history.len()), 1);
    }

    #[test]
    fn test_clones_share_state() {
        let session = GameSession::new(RulesEngine::default(), Some(1));
        let other = session.clone();

        let mv = other.legal_moves()[0];
        other.apply_move(mv).unwrap();

        assert_eq!(session.snapshot().history.len(), 1);
    }

    #[test]
    fn test_registry_lifecycle() {
        let registry = SessionRegistry::new(RulesEngine::default());
        assert!(registry.is_empty());

        let (a, _) = registry.create(Some(1));
        let (b, _) = registry.create(Some(2));
        assert_ne!(a, b);
        assert_eq!(registry.ids(), vec![a, b]);

        let mv = registry.get(a).unwrap().legal_moves()[0];
        registry.apply_move(a, mv).unwrap();
        assert_eq!(registry.get(a).unwrap().summary().current_player, PlayerId::new(1));
        assert_eq!(registry.get(b).unwrap().summary().current_player, PlayerId::new(0));

        registry.remove(a).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(a).unwrap_err(), SessionError::NotFound(a));
        assert_eq!(registry.remove(a).unwrap_err(), SessionError::NotFound(a));
    }

    #[test]
    fn test_registry_reports_illegal_move() {
        let registry = SessionRegistry::default();
        let (id, session) = registry.create(Some(3));
        let offered = session.with_state(|s| s.draft.factories[0].tiles().to_vec());
        let absent = [Color::Blue, Color::Yellow, Color::Red, Color::Black, Color::White]
            .into_iter()
            .find(|c| !offered.contains(c))
            .unwrap();
        let mv = Move::from_factory(0, absent, TargetRow::Floor);

        assert_eq!(
            registry.apply_move(id, mv),
            Err(SessionError::Move(MoveError::IllegalMove { mv }))
        );
        assert_eq!(session.snapshot().history.len(), 0);
    }

    #[test]
    fn test_session_id_display() {
        assert_eq!(SessionId(7).to_string(), "session-7");
        assert_eq!(SessionError::NotFound(SessionId(7)).to_string(), "unknown session: session-7");
    }
}
