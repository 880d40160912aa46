//! Plain-text board renderer.
//!
//! Output uses the same layout as `board_parser`, so a rendered board can be
//! pasted back into a test.

use crate::game_state::board_types::{Move, PlayerId};
use crate::game_state::game_state::GameState;
use crate::game_state::isolation_board::{IsolationBoard, MovementRule};

pub fn render_board(board: &IsolationBoard) -> String {
    let mut out = String::new();

    out.push_str(match board.movement() {
        MovementRule::Knight => "knight",
        MovementRule::Queen => "queen",
    });
    out.push(' ');
    out.push(match board.active_player() {
        PlayerId::Player1 => '1',
        PlayerId::Player2 => '2',
    });

    for row in 0..board.height() {
        out.push('\n');
        for col in 0..board.width() {
            let cell = Move::new(row, col);
            let ch = if board.position(PlayerId::Player1) == Some(cell) {
                '1'
            } else if board.position(PlayerId::Player2) == Some(cell) {
                '2'
            } else if board.is_blank(cell) {
                '.'
            } else {
                '#'
            };
            out.push(ch);
        }
    }

    out
}
