//! A player's board: pattern lines, wall, floor line and score.
//!
//! The board owns placement legality and the end-of-round and end-of-game
//! scoring. Tiles leaving the board are handed back to the caller rather than
//! pushed into the shared supply, so the board never touches game-wide state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::color::BOARD_SIZE;
use crate::core::{Color, TargetRow};

use super::floor::FloorLine;
use super::pattern::PatternLine;
use super::wall::Wall;

/// Bonus per completed wall row.
pub const ROW_BONUS: i32 = 2;

/// Bonus per completed wall column.
pub const COLUMN_BONUS: i32 = 7;

/// Bonus per color with all five cells filled.
pub const COLOR_BONUS: i32 = 10;

/// One tile moved from a full pattern line onto the wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallPlacement {
    pub row: usize,
    pub col: usize,
    pub color: Color,
    pub points: u32,
}

/// What happened to one board at round end.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResolution {
    /// Wall placements in row order.
    pub placements: Vec<WallPlacement>,

    /// Points lost to the floor line before clamping.
    pub floor_penalty: u32,

    /// Score after clamping.
    pub score: i32,

    /// Tiles to return to the discard pile (marker excluded).
    #[serde(skip)]
    pub discarded: Vec<Color>,
}

impl RoundResolution {
    /// Points gained from wall placements this round.
    #[must_use]
    pub fn placement_points(&self) -> u32 {
        self.placements.iter().map(|p| p.points).sum()
    }
}

/// End-of-game bonus breakdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalBonus {
    pub rows: usize,
    pub columns: usize,
    pub colors: usize,
}

impl FinalBonus {
    #[must_use]
    pub fn points(&self) -> i32 {
        self.rows as i32 * ROW_BONUS + self.columns as i32 * COLUMN_BONUS + self.colors as i32 * COLOR_BONUS
    }
}

/// Complete state for one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerBoard {
    pub pattern_lines: [PatternLine; BOARD_SIZE],
    pub wall: Wall,
    pub floor: FloorLine,
    pub score: i32,
}

impl Default for PlayerBoard {
    fn default() -> Self {
        Self {
            pattern_lines: std::array::from_fn(PatternLine::new),
            wall: Wall::new(),
            floor: FloorLine::new(),
            score: 0,
        }
    }
}

impl PlayerBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `color` may go to `target`.
    ///
    /// The floor always accepts. A pattern line accepts when it is not full,
    /// holds nothing or `color` already, and the wall row lacks `color`.
    #[must_use]
    pub fn legal_placement(&self, target: TargetRow, color: Color) -> bool {
        match target {
            TargetRow::Floor => true,
            TargetRow::Pattern(row) => {
                let row = row as usize;
                row < BOARD_SIZE
                    && self.pattern_lines[row].accepts(color)
                    && !self.wall.has_color(row, color)
            }
        }
    }

    /// Every legal destination for `color`: rows 0..4 in order, floor last.
    ///
    /// The number of tiles does not matter; overflow always spills to the floor.
    #[must_use]
    pub fn enumerate_legal_rows(&self, color: Color) -> SmallVec<[TargetRow; BOARD_SIZE + 1]> {
        (0..BOARD_SIZE as u8)
            .map(TargetRow::Pattern)
            .chain(std::iter::once(TargetRow::Floor))
            .filter(|&t| self.legal_placement(t, color))
            .collect()
    }

    /// Place `count` tiles of `color` at `target`.
    ///
    /// Tiles beyond the pattern line's remaining room spill onto the floor.
    /// Returns the number that spilled. Legality is the caller's concern.
    pub fn place(&mut self, target: TargetRow, color: Color, count: usize) -> usize {
        let overflow = match target {
            TargetRow::Floor => count,
            TargetRow::Pattern(row) => self.pattern_lines[row as usize].fill(color, count),
        };
        self.floor.push_tiles(color, overflow);
        overflow
    }

    /// Put the first-player marker on the floor.
    pub fn receive_marker(&mut self) {
        self.floor.push_marker();
    }

    /// Move full pattern lines to the wall, score them, apply the floor
    /// penalty and clamp the score at zero.
    pub fn resolve_round(&mut self) -> RoundResolution {
        let mut resolution = RoundResolution::default();

        for (row, line) in self.pattern_lines.iter_mut().enumerate() {
            if !line.is_full() {
                continue;
            }
            let Some((color, held)) = line.clear() else {
                continue;
            };
            let (col, points) = self.wall.place(row, color);
            self.score += points as i32;
            resolution.placements.push(WallPlacement {
                row,
                col,
                color,
                points,
            });
            resolution
                .discarded
                .extend(std::iter::repeat(color).take(held - 1));
        }

        resolution.floor_penalty = self.floor.penalty();
        self.score = (self.score - resolution.floor_penalty as i32).max(0);
        resolution.discarded.extend(self.floor.clear());
        resolution.score = self.score;

        resolution
    }

    /// Whether any wall row is complete.
    #[must_use]
    pub fn has_complete_row(&self) -> bool {
        (0..BOARD_SIZE).any(|r| self.wall.is_row_complete(r))
    }

    /// Add row, column and color bonuses to the score.
    pub fn apply_final_bonus(&mut self) -> FinalBonus {
        let bonus = FinalBonus {
            rows: self.wall.completed_rows(),
            columns: self.wall.completed_columns(),
            colors: self.wall.completed_colors(),
        };
        self.score += bonus.points();
        bonus
    }

    /// Tiles on this board: pattern lines, wall and floor (marker excluded).
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.pattern_lines.iter().map(PatternLine::len).sum::<usize>()
            + self.wall.filled_count()
            + self.floor.tile_count()
    }
}
