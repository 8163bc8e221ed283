//! Tile colors and the fixed wall pattern.
//!
//! The wall is a Latin square: every row and every column holds each color
//! exactly once. The color expected at `(row, col)` is
//! `ALL_COLORS[(col - row) mod 5]`, so row 0 reads blue, yellow, red, black,
//! white and each following row is shifted one cell to the right.

use serde::{Deserialize, Serialize};

/// Side length of the wall and number of pattern lines.
pub const BOARD_SIZE: usize = 5;

/// Number of distinct tile colors.
pub const COLOR_COUNT: usize = 5;

/// Tile color. Closed set, order fixed for enumeration and serialization.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Blue = 0,
    Yellow = 1,
    Red = 2,
    Black = 3,
    White = 4,
}

/// All colors in wall-pattern order.
pub const ALL_COLORS: [Color; COLOR_COUNT] = [
    Color::Blue,
    Color::Yellow,
    Color::Red,
    Color::Black,
    Color::White,
];

impl Color {
    /// Convert from a 0-based index.
    #[must_use]
    pub fn from_index(idx: usize) -> Option<Color> {
        ALL_COLORS.get(idx).copied()
    }

    /// Position of this color in `ALL_COLORS`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name, as shown to players.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Red => "red",
            Color::Black => "black",
            Color::White => "white",
        }
    }

    /// Single-letter code used in text rendering.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Color::Blue => 'B',
            Color::Yellow => 'Y',
            Color::Red => 'R',
            Color::Black => 'K',
            Color::White => 'W',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Color that belongs at wall cell `(row, col)`.
#[must_use]
pub const fn wall_color(row: usize, col: usize) -> Color {
    ALL_COLORS[(col + BOARD_SIZE - row % BOARD_SIZE) % BOARD_SIZE]
}

/// Column where `color` sits in wall row `row`.
#[must_use]
pub const fn wall_column(color: Color, row: usize) -> usize {
    (color.index() + row) % BOARD_SIZE
}
