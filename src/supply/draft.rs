//! Draft pools: the factory displays and the center.
//!
//! Taking a color from a factory takes every tile of that color and pushes the
//! rest into the center, leaving the factory empty. Taking from the center
//! leaves the other colors where they are and, the first time in a round,
//! hands over the first-player marker.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::color::{ALL_COLORS, COLOR_COUNT};
use crate::core::config::FACTORY_CAPACITY;
use crate::core::{Color, GameConfig, GameRng, MoveSource};

use super::pool::TilePool;

/// Count each color in `tiles`, indexed by `Color::index`.
#[must_use]
pub fn color_counts(tiles: &[Color]) -> [usize; COLOR_COUNT] {
    let mut counts = [0; COLOR_COUNT];
    for tile in tiles {
        counts[tile.index()] += 1;
    }
    counts
}

/// One factory display.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factory {
    tiles: SmallVec<[Color; FACTORY_CAPACITY]>,
}

impl Factory {
    /// A factory holding exactly `tiles`.
    #[must_use]
    pub fn with_tiles(tiles: &[Color]) -> Self {
        debug_assert!(tiles.len() <= FACTORY_CAPACITY);
        Self {
            tiles: SmallVec::from_slice(tiles),
        }
    }

    /// Tiles on display.
    #[must_use]
    pub fn tiles(&self) -> &[Color] {
        &self.tiles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub(crate) fn push(&mut self, color: Color) {
        debug_assert!(self.tiles.len() < FACTORY_CAPACITY, "factory over capacity");
        self.tiles.push(color);
    }

    /// Remove all tiles, returning how many were `color` and the rest.
    fn take(&mut self, color: Color) -> (usize, SmallVec<[Color; FACTORY_CAPACITY]>) {
        let tiles = std::mem::take(&mut self.tiles);
        let taken = tiles.iter().filter(|&&c| c == color).count();
        let rest = tiles.into_iter().filter(|&c| c != color).collect();
        (taken, rest)
    }
}

/// The center pool.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenterPool {
    /// Tiles pushed here from factories this round.
    pub tiles: Vec<Color>,

    /// Whether the first-player marker is still unclaimed this round.
    pub marker_present: bool,
}

impl CenterPool {
    /// True when no tiles remain. The marker alone does not count.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// Tiles removed from the center by one move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CenterTake {
    pub count: usize,
    pub took_marker: bool,
}

/// Factory displays plus the center for the current round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftPools {
    pub factories: Vec<Factory>,
    pub center: CenterPool,
}

impl DraftPools {
    /// Deal a fresh round: every factory filled from `pool`, the center empty
    /// and holding the marker.
    pub fn deal(config: &GameConfig, pool: &mut TilePool, rng: &mut GameRng) -> Self {
        let factories = (0..config.factory_count)
            .map(|_| {
                let mut factory = Factory::default();
                pool.refill_factory(&mut factory, config.tiles_per_factory, rng);
                factory
            })
            .collect();

        Self {
            factories,
            center: CenterPool {
                tiles: Vec::new(),
                marker_present: true,
            },
        }
    }

    /// True when every factory and the center hold no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.iter().all(Factory::is_empty) && self.center.is_empty()
    }

    /// Tiles currently on displays and in the center.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.factories.iter().map(Factory::len).sum::<usize>() + self.center.tiles.len()
    }

    /// Tiles visible at `source`, or `None` for a factory index out of range.
    #[must_use]
    pub fn tiles_at(&self, source: MoveSource) -> Option<&[Color]> {
        match source {
            MoveSource::Factory(i) => self.factories.get(i as usize).map(Factory::tiles),
            MoveSource::Center => Some(&self.center.tiles),
        }
    }

    /// Every non-empty source paired with the distinct colors it offers, in
    /// factory order then center, colors in `ALL_COLORS` order.
    pub fn offers(&self) -> impl Iterator<Item = (MoveSource, Color, usize)> + '_ {
        let factories = self
            .factories
            .iter()
            .enumerate()
            .map(|(i, f)| (MoveSource::Factory(i as u8), f.tiles()));
        let center = std::iter::once((MoveSource::Center, self.center.tiles.as_slice()));

        factories.chain(center).flat_map(|(source, tiles)| {
            let counts = color_counts(tiles);
            ALL_COLORS
                .into_iter()
                .filter(move |c| counts[c.index()] > 0)
                .map(move |c| (source, c, counts[c.index()]))
        })
    }

    /// Take every `color` tile from factory `index`; the rest go to the center.
    ///
    /// Returns `None` without touching anything if the factory does not exist
    /// or offers no `color`.
    pub fn take_from_factory(&mut self, index: usize, color: Color) -> Option<usize> {
        let factory = self.factories.get_mut(index)?;
        if !factory.tiles().contains(&color) {
            return None;
        }
        let (taken, rest) = factory.take(color);
        self.center.tiles.extend(rest);
        Some(taken)
    }

    /// Take every `color` tile from the center, plus the marker if unclaimed.
    ///
    /// Returns `None` without touching anything if the center offers no `color`.
    pub fn take_from_center(&mut self, color: Color) -> Option<CenterTake> {
        if !self.center.tiles.contains(&color) {
            return None;
        }
        let before = self.center.tiles.len();
        self.center.tiles.retain(|&c| c != color);
        let took_marker = std::mem::replace(&mut self.center.marker_present, false);

        Some(CenterTake {
            count: before - self.center.tiles.len(),
            took_marker,
        })
    }
}
