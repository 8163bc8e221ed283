//! Per-player board mechanics.
//!
//! - `PatternLine`: staging rows of growing capacity
//! - `Wall`: the permanent 5x5 grid and adjacency scoring
//! - `FloorLine`: overflow slots with positional penalties
//! - `PlayerBoard`: placement legality, round resolution, final bonuses

pub mod floor;
pub mod pattern;
pub mod player_board;
pub mod wall;

pub use floor::{FloorEntry, FloorLine, FLOOR_CAPACITY, FLOOR_PENALTIES};
pub use pattern::PatternLine;
pub use player_board::{
    FinalBonus, PlayerBoard, RoundResolution, WallPlacement, COLOR_BONUS, COLUMN_BONUS, ROW_BONUS,
};
pub use wall::Wall;
