//! Floor line: overflow and penalty area.
//!
//! Each occupied slot costs points at round end according to its position. Only
//! the first seven slots carry a penalty; later entries are free. The
//! first-player marker occupies a slot like a tile but is never returned to the
//! discard pile.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Color;

/// Slots that carry a penalty.
pub const FLOOR_CAPACITY: usize = 7;

/// Points lost per occupied slot, by slot index.
pub const FLOOR_PENALTIES: [u32; FLOOR_CAPACITY] = [1, 1, 2, 2, 2, 3, 3];

/// One occupied floor slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloorEntry {
    Tile(Color),
    Marker,
}

/// Ordered floor slots.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorLine {
    entries: SmallVec<[FloorEntry; FLOOR_CAPACITY]>,
}

impl FloorLine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> &[FloorEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Colored tiles on the floor, excluding the marker.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, FloorEntry::Tile(_)))
            .count()
    }

    #[must_use]
    pub fn has_marker(&self) -> bool {
        self.entries.contains(&FloorEntry::Marker)
    }

    pub fn push_tiles(&mut self, color: Color, count: usize) {
        self.entries
            .extend(std::iter::repeat(FloorEntry::Tile(color)).take(count));
    }

    pub fn push_marker(&mut self) {
        debug_assert!(!self.has_marker(), "second first-player marker on floor");
        self.entries.push(FloorEntry::Marker);
    }

    /// Total penalty for the current occupancy.
    #[must_use]
    pub fn penalty(&self) -> u32 {
        FLOOR_PENALTIES.iter().take(self.entries.len()).sum()
    }

    /// Empty the floor, returning the colored tiles (the marker is dropped).
    pub fn clear(&mut self) -> Vec<Color> {
        self.entries
            .drain(..)
            .filter_map(|e| match e {
                FloorEntry::Tile(c) => Some(c),
                FloorEntry::Marker => None,
            })
            .collect()
    }
}
