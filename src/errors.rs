//! Errors raised by the concrete board, the layout parser and the harness.
//!
//! Search cancellation is not an error in this sense and lives in
//! `search::search_errors`.

use thiserror::Error;

use crate::game_state::board_types::{Move, PlayerId};

pub type IsolationResult<T> = Result<T, IsolationError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IsolationError {
    /// Boards are stored in a 64-bit mask, so they hold at most 64 cells.
    #[error("invalid board dimensions {width}x{height} (need 1..=64 cells)")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("illegal move {mv} for {player}")]
    IllegalMove { mv: Move, player: PlayerId },

    #[error("invalid layout character '{ch}' at row {row}, col {col}")]
    InvalidLayoutChar { ch: char, row: usize, col: usize },

    #[error("malformed board layout: {0}")]
    MalformedLayout(String),
}
