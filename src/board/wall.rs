//! The wall: a 5x5 grid of permanently placed tiles.
//!
//! Cells only ever go from empty to filled. The color of each cell is fixed by
//! [`wall_color`], so the grid stores occupancy only.

use serde::{Deserialize, Serialize};

use crate::core::color::{wall_color, wall_column, ALL_COLORS, BOARD_SIZE};
use crate::core::Color;

/// Occupancy grid, `cells[row][col]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wall {
    cells: [[bool; BOARD_SIZE]; BOARD_SIZE],
}

impl Wall {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    /// Whether `color` already sits in `row`.
    #[must_use]
    pub fn has_color(&self, row: usize, color: Color) -> bool {
        self.cells[row][wall_column(color, row)]
    }

    /// Place `color` in `row` and return the points it scores.
    ///
    /// Panics in debug builds if the cell is already filled.
    pub fn place(&mut self, row: usize, color: Color) -> (usize, u32) {
        let col = wall_column(color, row);
        debug_assert!(!self.cells[row][col], "wall cell ({row}, {col}) filled twice");
        self.cells[row][col] = true;
        (col, self.placement_score(row, col))
    }

    /// Adjacency score for the tile at `(row, col)`.
    ///
    /// One point for the tile, plus one for every filled cell in the unbroken
    /// runs to its left, right, above and below.
    #[must_use]
    pub fn placement_score(&self, row: usize, col: usize) -> u32 {
        let left = (0..col).rev().take_while(|&c| self.cells[row][c]).count();
        let right = (col + 1..BOARD_SIZE).take_while(|&c| self.cells[row][c]).count();
        let up = (0..row).rev().take_while(|&r| self.cells[r][col]).count();
        let down = (row + 1..BOARD_SIZE).take_while(|&r| self.cells[r][col]).count();

        (1 + left + right + up + down) as u32
    }

    /// Number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&f| f).count()
    }

    #[must_use]
    pub fn is_row_complete(&self, row: usize) -> bool {
        self.cells[row].iter().all(|&f| f)
    }

    #[must_use]
    pub fn is_column_complete(&self, col: usize) -> bool {
        (0..BOARD_SIZE).all(|row| self.cells[row][col])
    }

    /// All five cells of `color` are filled.
    #[must_use]
    pub fn is_color_complete(&self, color: Color) -> bool {
        (0..BOARD_SIZE).all(|row| self.has_color(row, color))
    }

    #[must_use]
    pub fn completed_rows(&self) -> usize {
        (0..BOARD_SIZE).filter(|&r| self.is_row_complete(r)).count()
    }

    #[must_use]
    pub fn completed_columns(&self) -> usize {
        (0..BOARD_SIZE).filter(|&c| self.is_column_complete(c)).count()
    }

    #[must_use]
    pub fn completed_colors(&self) -> usize {
        ALL_COLORS.iter().filter(|&&c| self.is_color_complete(c)).count()
    }

    /// Every filled cell with its color, row-major.
    pub fn tiles(&self) -> impl Iterator<Item = (usize, usize, Color)> + '_ {
        (0..BOARD_SIZE).flat_map(move |row| {
            (0..BOARD_SIZE)
                .filter(move |&col| self.cells[row][col])
                .map(move |col| (row, col, wall_color(row, col)))
        })
    }

    /// True if no cell filled in `earlier` is empty here.
    #[must_use]
    pub fn contains(&self, earlier: &Wall) -> bool {
        self.cells
            .iter()
            .flatten()
            .zip(earlier.cells.iter().flatten())
            .all(|(&now, &then)| now || !then)
    }

    #[cfg(test)]
    pub(crate) fn set(&mut self, row: usize, col: usize) {
        self.cells[row][col] = true;
    }
}
