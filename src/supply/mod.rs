//! Shared tile supply and the per-round draft pools.
//!
//! - `TilePool`: draw bag and discard pile, persisting across rounds
//! - `DraftPools`: factory displays and the center, re-dealt every round

pub mod draft;
pub mod pool;

pub use draft::{color_counts, CenterPool, CenterTake, DraftPools, Factory};
pub use pool::TilePool;
