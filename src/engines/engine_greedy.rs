use crate::engines::engine_trait::Engine;
use crate::game_state::board_types::Move;
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{Evaluator, MobilityScorer};
use crate::search::time_management::Clock;

/// One-ply lookahead: plays the move whose resulting position the evaluator
/// likes best for the mover. The earliest move wins ties.
pub struct GreedyEngine<G: GameState> {
    evaluator: Box<dyn Evaluator<G>>,
}

impl<G: GameState> GreedyEngine<G> {
    pub fn new() -> Self {
        Self::with_evaluator(MobilityScorer)
    }

    pub fn with_evaluator<E>(evaluator: E) -> Self
    where
        E: Evaluator<G> + 'static,
    {
        Self {
            evaluator: Box::new(evaluator),
        }
    }
}

impl<G: GameState> Default for GreedyEngine<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: GameState> Engine<G> for GreedyEngine<G> {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn choose_move(&mut self, game_state: &G, legal_moves: &[Move], _clock: &dyn Clock) -> Move {
        let player = game_state.active_player();
        let mut best_score = f64::NEG_INFINITY;
        let mut best_move = Move::SENTINEL;

        for mv in legal_moves {
            let score = self.evaluator.score(&game_state.forecast(*mv), player);
            if best_move.is_sentinel() || score > best_score {
                best_score = score;
                best_move = *mv;
            }
        }

        best_move
    }
}
