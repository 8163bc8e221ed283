//! Move representation: source + color + destination.
//!
//! A move names where tiles are taken from (a factory display or the center),
//! which color is taken, and where the taken tiles go (a pattern line or the
//! floor). The engine never stores a move count: taking a color always takes
//! every tile of that color from the source.

use serde::{Deserialize, Serialize};

use super::color::{Color, BOARD_SIZE};
use super::player::PlayerId;

/// Where drafted tiles are taken from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveSource {
    /// Factory display by index.
    Factory(u8),
    /// The shared center pool.
    Center,
}

/// Where drafted tiles are placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetRow {
    /// Pattern line by row index (0..=4).
    Pattern(u8),
    /// Straight to the floor line.
    Floor,
}

impl TargetRow {
    /// Convert from the flat `-1..=4` encoding, where `-1` is the floor.
    ///
    /// ```
    /// use rust_azul::core::TargetRow;
    ///
    /// assert_eq!(TargetRow::from_index(-1), Some(TargetRow::Floor));
    /// assert_eq!(TargetRow::from_index(3), Some(TargetRow::Pattern(3)));
    /// assert_eq!(TargetRow::from_index(5), None);
    /// ```
    #[must_use]
    pub fn from_index(idx: i8) -> Option<Self> {
        match idx {
            -1 => Some(TargetRow::Floor),
            r if (0..BOARD_SIZE as i8).contains(&r) => Some(TargetRow::Pattern(r as u8)),
            _ => None,
        }
    }

    /// Flat `-1..=4` encoding.
    #[must_use]
    pub fn index(self) -> i8 {
        match self {
            TargetRow::Pattern(r) => r as i8,
            TargetRow::Floor => -1,
        }
    }
}

/// A drafting move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub source: MoveSource,
    pub color: Color,
    pub target: TargetRow,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(source: MoveSource, color: Color, target: TargetRow) -> Self {
        Self {
            source,
            color,
            target,
        }
    }

    /// Take `color` from factory `index`.
    #[must_use]
    pub const fn from_factory(index: u8, color: Color, target: TargetRow) -> Self {
        Self::new(MoveSource::Factory(index), color, target)
    }

    /// Take `color` from the center.
    #[must_use]
    pub const fn from_center(color: Color, target: TargetRow) -> Self {
        Self::new(MoveSource::Center, color, target)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.source {
            MoveSource::Factory(i) => write!(f, "F{}", i)?,
            MoveSource::Center => f.write_str("Center")?,
        }
        write!(f, " {} -> ", self.color)?;
        match self.target {
            TargetRow::Pattern(r) => write!(f, "Line {}", r + 1),
            TargetRow::Floor => f.write_str("Floor"),
        }
    }
}

/// An applied move with metadata for history tracking and replay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who made the move.
    pub player: PlayerId,

    /// The move made.
    pub mv: Move,

    /// Tiles of `mv.color` taken from the source.
    pub count: usize,

    /// Round in which the move was made (starts at 1).
    pub round: u32,

    /// Position in the whole game's move sequence.
    pub sequence: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_row_roundtrip() {
        for idx in -1..5i8 {
            let row = TargetRow::from_index(idx).unwrap();
            assert_eq!(row.index(), idx);
        }
        assert_eq!(TargetRow::from_index(-2), None);
    }

    #[test]
    fn test_move_display() {
        let mv = Move::from_factory(2, Color::Red, TargetRow::Pattern(0));
        assert_eq!(mv.to_string(), "F2 red -> Line 1");

        let mv = Move::from_center(Color::White, TargetRow::Floor);
        assert_eq!(mv.to_string(), "Center white -> Floor");
    }

    #[test]
    fn test_move_equality() {
        let a = Move::from_factory(1, Color::Blue, TargetRow::Pattern(2));
        let b = Move::new(MoveSource::Factory(1), Color::Blue, TargetRow::Pattern(2));
        let c = Move::from_factory(1, Color::Blue, TargetRow::Floor);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move::from_center(Color::Yellow, TargetRow::Pattern(4));
        let json = serde_json::to_string(&mv).unwrap();
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, back);
    }
}
