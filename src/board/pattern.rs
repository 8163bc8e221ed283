//! Pattern lines: per-row staging areas for one color at a time.

use serde::{Deserialize, Serialize};

use crate::core::Color;

/// Staging row `r`, holding up to `r + 1` tiles of a single color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternLine {
    capacity: u8,
    color: Option<Color>,
    len: u8,
}

impl PatternLine {
    /// Empty line for wall row `row`.
    #[must_use]
    pub const fn new(row: usize) -> Self {
        Self {
            capacity: row as u8 + 1,
            color: None,
            len: 0,
        }
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity as usize
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Color held, `None` while empty.
    #[must_use]
    pub const fn color(&self) -> Option<Color> {
        self.color
    }

    /// Room left before the line is full.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        (self.capacity - self.len) as usize
    }

    /// Not full, and either empty or already holding `color`.
    ///
    /// Wall conflicts are checked by the board, not here.
    #[must_use]
    pub fn accepts(&self, color: Color) -> bool {
        !self.is_full() && self.color.map_or(true, |c| c == color)
    }

    /// Add up to `count` tiles of `color`; returns the overflow that did not fit.
    pub fn fill(&mut self, color: Color, count: usize) -> usize {
        debug_assert!(self.accepts(color) || count == 0);
        let added = count.min(self.remaining());
        if added > 0 {
            self.color = Some(color);
            self.len += added as u8;
        }
        debug_assert!(self.len <= self.capacity, "pattern line over capacity");
        count - added
    }

    /// Empty the line, returning what it held.
    pub fn clear(&mut self) -> Option<(Color, usize)> {
        let held = self.color.map(|c| (c, self.len()));
        self.color = None;
        self.len = 0;
        held
    }
}
