//! Tile supply: the draw bag and the discard pile.
//!
//! Draws are without replacement and uniformly random over the bag. When the
//! bag runs dry the whole discard pile is shuffled back into it. When both are
//! empty a draw yields `None`; callers treat that as a short deal, not an error.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::color::ALL_COLORS;
use crate::core::{Color, GameConfig, GameRng};

use super::draft::Factory;

/// Bag and discard pile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilePool {
    /// Tiles available to draw.
    pub bag: Vec<Color>,

    /// Tiles returned from boards, waiting to be shuffled back in.
    pub discard: Vec<Color>,
}

impl TilePool {
    /// Create a full, shuffled bag for `config`.
    #[must_use]
    pub fn new(config: &GameConfig, rng: &mut GameRng) -> Self {
        let mut bag: Vec<Color> = ALL_COLORS
            .iter()
            .flat_map(|&c| std::iter::repeat(c).take(config.tiles_per_color))
            .collect();
        rng.shuffle(&mut bag);

        Self {
            bag,
            discard: Vec::new(),
        }
    }

    /// Tiles in the bag.
    #[must_use]
    pub fn bag_len(&self) -> usize {
        self.bag.len()
    }

    /// Tiles in the discard pile.
    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    /// Tiles in bag and discard together.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bag.len() + self.discard.len()
    }

    /// True when no tile can be drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Draw one tile at random, refilling the bag from discard if needed.
    pub fn draw(&mut self, rng: &mut GameRng) -> Option<Color> {
        if self.bag.is_empty() {
            if self.discard.is_empty() {
                return None;
            }
            self.refill_bag(rng);
        }

        let idx = rng.gen_range_usize(0..self.bag.len());
        Some(self.bag.swap_remove(idx))
    }

    /// Deal up to `count` tiles onto an empty factory.
    ///
    /// Returns the number of tiles actually dealt, which is short of `count`
    /// only when bag and discard are both exhausted.
    pub fn refill_factory(&mut self, factory: &mut Factory, count: usize, rng: &mut GameRng) -> usize {
        debug_assert!(factory.is_empty(), "factory refilled while holding tiles");
        let mut dealt = 0;
        for _ in 0..count {
            match self.draw(rng) {
                Some(color) => {
                    factory.push(color);
                    dealt += 1;
                }
                None => break,
            }
        }
        dealt
    }

    /// Put `count` tiles of `color` on the discard pile.
    pub fn discard_tiles(&mut self, color: Color, count: usize) {
        self.discard.extend(std::iter::repeat(color).take(count));
    }

    fn refill_bag(&mut self, rng: &mut GameRng) {
        trace!(tiles = self.discard.len(), "refilling bag from discard");
        self.bag.append(&mut self.discard);
        rng.shuffle(&mut self.bag);
    }
}
