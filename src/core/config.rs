//! Game configuration.
//!
//! `GameConfig` carries the table constants: how many factory displays are
//! laid out, how many tiles each one takes, and how many tiles of each color
//! the supply starts with. The default is the two-player table.

use serde::{Deserialize, Serialize};

use super::color::COLOR_COUNT;
use super::error::ConfigError;

/// Factory displays on a two-player table.
pub const DEFAULT_FACTORY_COUNT: usize = 5;

/// Tiles drawn onto each factory display.
pub const FACTORY_CAPACITY: usize = 4;

/// Tiles of each color in the supply.
pub const TILES_PER_COLOR: usize = 20;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of factory displays.
    pub factory_count: usize,

    /// Tiles drawn onto each display at round start.
    pub tiles_per_factory: usize,

    /// Tiles of each color in the supply.
    pub tiles_per_color: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            factory_count: DEFAULT_FACTORY_COUNT,
            tiles_per_factory: FACTORY_CAPACITY,
            tiles_per_color: TILES_PER_COLOR,
        }
    }
}

impl GameConfig {
    /// Create the default two-player configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of factory displays.
    #[must_use]
    pub fn with_factory_count(mut self, count: usize) -> Self {
        self.factory_count = count;
        self
    }

    /// Set the number of tiles per display.
    #[must_use]
    pub fn with_tiles_per_factory(mut self, count: usize) -> Self {
        self.tiles_per_factory = count;
        self
    }

    /// Set the number of tiles of each color.
    #[must_use]
    pub fn with_tiles_per_color(mut self, count: usize) -> Self {
        self.tiles_per_color = count;
        self
    }

    /// Total tiles in play across bag, discard, displays and boards.
    #[must_use]
    pub fn total_tiles(&self) -> usize {
        self.tiles_per_color * COLOR_COUNT
    }

    /// Reject configurations no round could be dealt from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.factory_count == 0 || self.factory_count > u8::MAX as usize {
            return Err(ConfigError::FactoryCount(self.factory_count));
        }
        if self.tiles_per_factory == 0 || self.tiles_per_factory > FACTORY_CAPACITY {
            return Err(ConfigError::TilesPerFactory(self.tiles_per_factory));
        }
        if self.tiles_per_color == 0 {
            return Err(ConfigError::EmptySupply);
        }
        Ok(())
    }
}
