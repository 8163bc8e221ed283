//! Plain-text rendering of a game for terminals and logs.
//!
//! Tiles are shown by their one-letter code (`B`, `Y`, `R`, `K`, `W`). On the
//! wall an empty cell shows the color it expects in lowercase. The
//! first-player marker is shown as `1`.

use std::fmt::Write;

use crate::board::{FloorEntry, PlayerBoard};
use crate::core::{wall_color, GameState, PlayerId, BOARD_SIZE};
use crate::supply::DraftPools;

fn tile_codes(tiles: impl IntoIterator<Item = crate::core::Color>) -> String {
    tiles
        .into_iter()
        .map(|c| c.code().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Factories, then the center.
///
/// ```text
/// F0: B B R W
/// F1: (empty)
/// Center: 1 K K Y
/// ```
#[must_use]
pub fn render_draft(draft: &DraftPools) -> String {
    let mut out = String::new();
    for (i, factory) in draft.factories.iter().enumerate() {
        if factory.is_empty() {
            let _ = writeln!(out, "F{i}: (empty)");
        } else {
            let _ = writeln!(out, "F{i}: {}", tile_codes(factory.tiles().iter().copied()));
        }
    }

    let mut center = draft.center.tiles.clone();
    center.sort_unstable();
    let mut parts = Vec::new();
    if draft.center.marker_present {
        parts.push("1".to_string());
    }
    if !center.is_empty() {
        parts.push(tile_codes(center));
    }
    if parts.is_empty() {
        let _ = writeln!(out, "Center: (empty)");
    } else {
        let _ = writeln!(out, "Center: {}", parts.join(" "));
    }
    out
}

/// One board: pattern lines right-aligned beside the wall, then the floor.
///
/// ```text
/// Player 0  score 4
///     . | B y r k w
///   R R | w b y R k
/// ...
/// Floor: 1 K (-2)
/// ```
#[must_use]
pub fn render_board(player: PlayerId, board: &PlayerBoard) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{player}  score {}", board.score);

    for (row, line) in board.pattern_lines.iter().enumerate() {
        let cells: Vec<char> = (0..line.capacity())
            .map(|i| match line.color() {
                Some(c) if i < line.len() => c.code(),
                _ => '.',
            })
            .collect();
        let pattern = cells
            .iter()
            .rev()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(" ");

        let wall = (0..BOARD_SIZE)
            .map(|col| {
                let code = wall_color(row, col).code();
                if board.wall.is_filled(row, col) {
                    code.to_string()
                } else {
                    code.to_ascii_lowercase().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");

        let _ = writeln!(out, "{pattern:>9} | {wall}");
    }

    let floor = board
        .floor
        .entries()
        .iter()
        .map(|e| match e {
            FloorEntry::Tile(c) => c.code().to_string(),
            FloorEntry::Marker => "1".to_string(),
        })
        .collect::<Vec<_>>();
    if floor.is_empty() {
        let _ = writeln!(out, "Floor: (empty)");
    } else {
        let _ = writeln!(out, "Floor: {} (-{})", floor.join(" "), board.floor.penalty());
    }
    out
}

/// Round header, draft pools and both boards.
#[must_use]
pub fn render_state(state: &GameState) -> String {
    let mut out = String::new();
    if let Some(result) = state.result {
        let (s0, s1) = state.scores();
        let _ = writeln!(
            out,
            "Game over after round {}: {} wins ({s0} - {s1})",
            state.round,
            result.winner()
        );
    } else {
        let _ = writeln!(out, "Round {}, {} to move", state.round, state.current_player);
        out.push_str(&render_draft(&state.draft));
    }
    for (player, board) in state.boards.iter() {
        out.push('\n');
        out.push_str(&render_board(player, board));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, TargetRow};
    use crate::rules::RulesEngine;
    use crate::supply::{CenterPool, Factory};

    #[test]
    fn test_render_draft() {
        use Color::*;
        let draft = DraftPools {
            factories: vec![Factory::with_tiles(&[Blue, Blue, Red, White]), Factory::default()],
            center: CenterPool {
                tiles: vec![Yellow, Black, Black],
                marker_present: true,
            },
        };

        assert_eq!(
            render_draft(&draft),
            "F0: B B R W\nF1: (empty)\nCenter: 1 Y K K\n"
        );
    }

    #[test]
    fn test_render_empty_center() {
        let draft = DraftPools::default();
        assert_eq!(render_draft(&draft), "Center: (empty)\n");
    }

    #[test]
    fn test_render_board() {
        let mut board = PlayerBoard::new();
        board.place(TargetRow::Pattern(1), Color::Red, 1);
        board.wall.place(0, Color::Blue);
        board.receive_marker();
        board.place(TargetRow::Floor, Color::Black, 1);
        board.score = 4;

        let text = render_board(PlayerId::new(0), &board);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "Player 0  score 4");
        assert_eq!(lines[1], "        . | B y r k w");
        assert_eq!(lines[2], "      . R | w b y r k");
        assert_eq!(lines[6], "Floor: 1 K (-2)");
    }

    #[test]
    fn test_render_state_mentions_both_players() {
        let state = RulesEngine::default().new_game(Some(11));
        let text = render_state(&state);

        assert!(text.starts_with("Round 1, Player 0 to move\n"));
        assert!(text.contains("Player 0  score 0"));
        assert!(text.contains("Player 1  score 0"));
        assert!(text.contains("Center: 1\n"));
    }
}
