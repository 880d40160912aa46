//! The board contract consumed by the search.
//!
//! Search code only talks to positions through this trait, so any board that
//! can enumerate moves and forecast successors can be searched. Implementors
//! must treat every state as an immutable snapshot of one ply.

use crate::game_state::board_types::{Move, PlayerId};

pub trait GameState {
    /// The player whose turn it is.
    fn active_player(&self) -> PlayerId;

    /// The player waiting for the active player to move.
    fn inactive_player(&self) -> PlayerId;

    /// Legal moves for `player` in generator order.
    ///
    /// The search explores children in exactly this order, and ties are
    /// broken in favor of the earlier entry.
    fn legal_moves(&self, player: PlayerId) -> Vec<Move>;

    /// Number of cells no player has visited yet.
    fn blank_cell_count(&self) -> usize;

    /// Successor state after the active player plays `mv`.
    ///
    /// Never mutates `self`; the returned state has active and inactive
    /// players swapped.
    fn forecast(&self, mv: Move) -> Self
    where
        Self: Sized;

    fn is_loser(&self, player: PlayerId) -> bool;

    fn is_winner(&self, player: PlayerId) -> bool;
}
