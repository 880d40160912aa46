//! Small value types shared by every board implementation and the search.

use std::fmt;

/// Identity of one of the two seats in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    Player1,
    Player2,
}

impl PlayerId {
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::Player1 => PlayerId::Player2,
            PlayerId::Player2 => PlayerId::Player1,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::Player1 => 0,
            PlayerId::Player2 => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::Player1 => write!(f, "player1"),
            PlayerId::Player2 => write!(f, "player2"),
        }
    }
}

/// A board cell to move onto, addressed by `(row, col)`.
///
/// `Move::SENTINEL` (`(-1, -1)`) stands for "no move available".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

impl Move {
    pub const SENTINEL: Move = Move { row: -1, col: -1 };

    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn is_sentinel(self) -> bool {
        self.row == -1 && self.col == -1
    }

    /// `None` for the sentinel, the move otherwise.
    #[inline]
    pub fn to_option(self) -> Option<Move> {
        if self.is_sentinel() {
            None
        } else {
            Some(self)
        }
    }
}

impl Default for Move {
    fn default() -> Self {
        Move::SENTINEL
    }
}

impl From<(i32, i32)> for Move {
    fn from((row, col): (i32, i32)) -> Self {
        Move::new(row, col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::{Move, PlayerId};

    #[test]
    fn sentinel_is_minus_one_pair_and_maps_to_none() {
        assert_eq!(Move::SENTINEL, Move::new(-1, -1));
        assert!(Move::default().is_sentinel());
        assert_eq!(Move::SENTINEL.to_option(), None);
        assert_eq!(Move::new(2, 3).to_option(), Some(Move::new(2, 3)));
    }

    #[test]
    fn opponent_flips_seat() {
        assert_eq!(PlayerId::Player1.opponent(), PlayerId::Player2);
        assert_eq!(PlayerId::Player2.opponent().opponent(), PlayerId::Player2);
    }
}
