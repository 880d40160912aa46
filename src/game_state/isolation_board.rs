//! Concrete Isolation board.
//!
//! Cells are packed row-major into a `u64` bitboard of visited squares, so a
//! board holds at most 64 cells (the classic 7x7 board uses 49). A square is
//! blank until some player has stood on it; the squares the players currently
//! occupy are therefore never blank.

use std::fmt;

use crate::errors::{IsolationError, IsolationResult};
use crate::game_state::board_types::{Move, PlayerId};
use crate::game_state::game_state::GameState;
use crate::utils::render_board::render_board;

pub const STANDARD_SIZE: i32 = 7;

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const QUEEN_DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// How a placed player travels between cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovementRule {
    /// One L-shaped jump onto a blank cell; jumps over anything.
    #[default]
    Knight,
    /// Any distance in a straight or diagonal line across blank cells.
    Queen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsolationBoard {
    width: i32,
    height: i32,
    movement: MovementRule,
    // Visited squares, including the ones currently occupied.
    visited: u64,
    positions: [Option<u8>; 2],
    active: PlayerId,
    ply: u16,
}

impl IsolationBoard {
    /// Empty board with neither player placed; player 1 moves first.
    pub fn new(width: i32, height: i32, movement: MovementRule) -> IsolationResult<Self> {
        if width < 1 || height < 1 || width.checked_mul(height).map_or(true, |cells| cells > 64) {
            return Err(IsolationError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            movement,
            visited: 0,
            positions: [None, None],
            active: PlayerId::Player1,
            ply: 0,
        })
    }

    /// The classic 7x7 knight-move board.
    pub fn standard() -> Self {
        Self {
            width: STANDARD_SIZE,
            height: STANDARD_SIZE,
            movement: MovementRule::Knight,
            visited: 0,
            positions: [None, None],
            active: PlayerId::Player1,
            ply: 0,
        }
    }

    /// Assembles a board from already-validated parts (used by the layout
    /// parser). Player squares are folded into the visited mask.
    pub(crate) fn from_parts(
        width: i32,
        height: i32,
        movement: MovementRule,
        blocked: u64,
        positions: [Option<u8>; 2],
        active: PlayerId,
    ) -> IsolationResult<Self> {
        let mut board = Self::new(width, height, movement)?;
        board.visited = blocked & board.cell_mask();
        for sq in positions.iter().flatten() {
            board.visited |= 1u64 << sq;
        }
        board.positions = positions;
        board.active = active;
        board.ply = board.visited.count_ones() as u16;
        Ok(board)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn movement(&self) -> MovementRule {
        self.movement
    }

    #[inline]
    pub fn ply(&self) -> u16 {
        self.ply
    }

    /// Current square of `player`, or `None` before their first move.
    pub fn position(&self, player: PlayerId) -> Option<Move> {
        self.positions[player.index()].map(|sq| self.square_to_move(sq))
    }

    pub fn is_blank(&self, mv: Move) -> bool {
        self.square(mv.row, mv.col)
            .is_some_and(|sq| self.visited & (1u64 << sq) == 0)
    }

    pub fn blank_cells(&self) -> Vec<Move> {
        let mut blanks = Vec::with_capacity(self.blank_cell_count());
        let mut mask = self.cell_mask() & !self.visited;
        while mask != 0 {
            let sq = mask.trailing_zeros() as u8;
            blanks.push(self.square_to_move(sq));
            mask &= mask - 1;
        }
        blanks
    }

    /// Validated version of [`GameState::forecast`].
    pub fn apply_move(&self, mv: Move) -> IsolationResult<Self> {
        if !self.legal_moves(self.active).contains(&mv) {
            return Err(IsolationError::IllegalMove {
                mv,
                player: self.active,
            });
        }
        Ok(self.forecast(mv))
    }

    #[inline]
    fn cell_mask(&self) -> u64 {
        let cells = self.width * self.height;
        if cells >= 64 {
            u64::MAX
        } else {
            (1u64 << cells) - 1
        }
    }

    #[inline]
    fn square(&self, row: i32, col: i32) -> Option<u8> {
        if row < 0 || col < 0 || row >= self.height || col >= self.width {
            return None;
        }
        Some((row * self.width + col) as u8)
    }

    #[inline]
    fn square_to_move(&self, sq: u8) -> Move {
        let sq = i32::from(sq);
        Move::new(sq / self.width, sq % self.width)
    }

    #[inline]
    fn is_open(&self, row: i32, col: i32) -> bool {
        self.square(row, col)
            .is_some_and(|sq| self.visited & (1u64 << sq) == 0)
    }

    fn knight_moves(&self, from: Move) -> Vec<Move> {
        KNIGHT_OFFSETS
            .iter()
            .map(|(dr, dc)| Move::new(from.row + dr, from.col + dc))
            .filter(|mv| self.is_open(mv.row, mv.col))
            .collect()
    }

    fn queen_moves(&self, from: Move) -> Vec<Move> {
        let mut moves = Vec::new();
        for (dr, dc) in QUEEN_DIRECTIONS {
            let (mut row, mut col) = (from.row + dr, from.col + dc);
            while self.is_open(row, col) {
                moves.push(Move::new(row, col));
                row += dr;
                col += dc;
            }
        }
        moves
    }
}

impl Default for IsolationBoard {
    fn default() -> Self {
        Self::standard()
    }
}

impl GameState for IsolationBoard {
    #[inline]
    fn active_player(&self) -> PlayerId {
        self.active
    }

    #[inline]
    fn inactive_player(&self) -> PlayerId {
        self.active.opponent()
    }

    fn legal_moves(&self, player: PlayerId) -> Vec<Move> {
        let Some(from) = self.position(player) else {
            return self.blank_cells();
        };
        match self.movement {
            MovementRule::Knight => self.knight_moves(from),
            MovementRule::Queen => self.queen_moves(from),
        }
    }

    #[inline]
    fn blank_cell_count(&self) -> usize {
        (self.cell_mask() & !self.visited).count_ones() as usize
    }

    fn forecast(&self, mv: Move) -> Self {
        debug_assert!(self.is_blank(mv), "forecast onto non-blank cell {mv}");
        let mut next = self.clone();
        if let Some(sq) = self.square(mv.row, mv.col) {
            next.visited |= 1u64 << sq;
            next.positions[self.active.index()] = Some(sq);
        }
        next.active = self.active.opponent();
        next.ply = self.ply.saturating_add(1);
        next
    }

    fn is_loser(&self, player: PlayerId) -> bool {
        player == self.active && self.legal_moves(self.active).is_empty()
    }

    fn is_winner(&self, player: PlayerId) -> bool {
        player == self.active.opponent() && self.legal_moves(self.active).is_empty()
    }
}

impl fmt::Display for IsolationBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
