//! Random-move baseline.
//!
//! Picks uniformly from the legal moves. Used as the weakest opponent in
//! match series and for smoke-testing the harness.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::Engine;
use crate::game_state::board_types::Move;
use crate::game_state::game_state::GameState;
use crate::search::time_management::Clock;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence of choices for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: GameState> Engine<G> for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, _game_state: &G, legal_moves: &[Move], _clock: &dyn Clock) -> Move {
        legal_moves
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Move::SENTINEL)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::board_types::Move;
    use crate::game_state::game_state::GameState;
    use crate::game_state::isolation_board::IsolationBoard;
    use crate::search::time_management::Unlimited;

    #[test]
    fn picks_a_legal_move_and_repeats_for_same_seed() {
        let board = IsolationBoard::standard();
        let legal = board.legal_moves(board.active_player());

        let mut first = RandomEngine::seeded(7);
        let mut second = RandomEngine::seeded(7);
        for _ in 0..10 {
            let a = first.choose_move(&board, &legal, &Unlimited);
            let b = second.choose_move(&board, &legal, &Unlimited);
            assert!(legal.contains(&a));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn no_moves_gives_sentinel() {
        let board = IsolationBoard::standard();
        let mut engine = RandomEngine::seeded(1);
        assert_eq!(engine.choose_move(&board, &[], &Unlimited), Move::SENTINEL);
    }
}
