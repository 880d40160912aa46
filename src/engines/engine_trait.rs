//! Engine abstraction used by the match harness.
//!
//! Every player (the search agent and the baseline opponents) is driven the
//! same way: it is handed the current position, the legal moves of the side
//! to move and a clock for this turn, and answers with a single move.

use crate::game_state::board_types::Move;
use crate::game_state::game_state::GameState;
use crate::search::time_management::Clock;

pub trait Engine<G: GameState> {
    fn name(&self) -> &str;

    /// Called once before each game.
    fn new_game(&mut self) {}

    /// Returns one of `legal_moves`, or [`Move::SENTINEL`] when the list is
    /// empty. Answering after `clock` has run out is a forfeit that the
    /// caller detects; engines do not report it themselves.
    fn choose_move(&mut self, game_state: &G, legal_moves: &[Move], clock: &dyn Clock) -> Move;
}
