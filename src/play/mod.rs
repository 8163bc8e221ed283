//! Running complete games between policies.
//!
//! `MatchRunner` seats one `MovePolicy` per player and alternates them until
//! the engine reports game over or a move cap is reached. Each game is dealt
//! from a seed, and the policies draw from a fork of the same RNG, so a
//! `MatchRecord` is reproducible from its seed alone.
//!
//! ```
//! use rust_azul::play::{MatchConfig, MatchRunner};
//! use rust_azul::policy::UniformPolicy;
//! use rust_azul::rules::RulesEngine;
//!
//! let runner = MatchRunner::new(
//!     RulesEngine::default(),
//!     Box::new(UniformPolicy),
//!     Box::new(UniformPolicy),
//!     MatchConfig::new().with_seed(7),
//! );
//! let records = runner.play_series(2).unwrap();
//! assert!(records.iter().all(|r| r.is_complete()));
//! ```

pub mod runner;

pub use runner::{MatchConfig, MatchRecord, MatchRunner};
