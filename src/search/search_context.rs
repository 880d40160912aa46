//! State shared by every frame of one search call.
//!
//! A [`SearchContext`] bundles the read-only collaborators of a search (the
//! evaluator, the clock and its threshold, the perspective leaves are scored
//! from) together with a node counter for reporting.

use std::cell::Cell;

use crate::game_state::board_types::{Move, PlayerId};
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::Evaluator;
use crate::search::search_errors::{SearchError, SearchOutcome};
use crate::search::time_management::Clock;

/// Score of a subtree and the move leading into its best child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub score: f64,
    pub best_move: Move,
}

impl SearchResult {
    /// Result for a node where the side to move has no legal move: a loss
    /// when that side is the maximizer, a win otherwise.
    #[inline]
    pub fn no_moves(maximizing_layer: bool) -> Self {
        Self {
            score: if maximizing_layer {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            },
            best_move: Move::SENTINEL,
        }
    }
}

pub struct SearchContext<'a, G: GameState> {
    evaluator: &'a dyn Evaluator<G>,
    clock: &'a dyn Clock,
    timer_threshold: f64,
    perspective: PlayerId,
    nodes: Cell<u64>,
}

impl<'a, G: GameState> SearchContext<'a, G> {
    /// `perspective` is the player that owns the search; leaves are always
    /// scored for that player.
    pub fn new(
        evaluator: &'a dyn Evaluator<G>,
        clock: &'a dyn Clock,
        timer_threshold: f64,
        perspective: PlayerId,
    ) -> Self {
        Self {
            evaluator,
            clock,
            timer_threshold,
            perspective,
            nodes: Cell::new(0),
        }
    }

    /// Polls the clock. Called on entry to every recursive frame.
    #[inline]
    pub fn check_deadline(&self) -> SearchOutcome<()> {
        if self.clock.time_left() < self.timer_threshold {
            return Err(SearchError::Timeout);
        }
        self.nodes.set(self.nodes.get() + 1);
        Ok(())
    }

    #[inline]
    pub fn evaluate(&self, game_state: &G) -> f64 {
        self.evaluator.score(game_state, self.perspective)
    }

    #[inline]
    pub fn perspective(&self) -> PlayerId {
        self.perspective
    }

    /// Frames entered so far (each passed deadline check counts once).
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes.get()
    }
}

/// Picks the best `(score, move)` pair in enumeration order: the maximum on a
/// maximizing layer, the minimum otherwise. Ties keep the earliest pair.
///
/// `moves` may be longer than `scores` when a cutoff stopped enumeration; only
/// the evaluated prefix is considered.
pub fn select_best(scores: &[f64], moves: &[Move], maximizing_layer: bool) -> SearchResult {
    let mut pairs = scores.iter().copied().zip(moves.iter().copied());
    let Some((mut best_score, mut best_move)) = pairs.next() else {
        return SearchResult::no_moves(maximizing_layer);
    };

    for (score, mv) in pairs {
        let better = if maximizing_layer {
            score > best_score
        } else {
            score < best_score
        };
        if better {
            best_score = score;
            best_move = mv;
        }
    }

    SearchResult {
        score: best_score,
        best_move,
    }
}

#[cfg(test)]
mod tests {
    use super::{select_best, SearchResult};
    use crate::game_state::board_types::Move;

    #[test]
    fn ties_keep_first_occurrence_on_both_layers() {
        let moves = [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)];

        let max = select_best(&[1.0, 3.0, 3.0], &moves, true);
        assert_eq!(max.best_move, Move::new(0, 1));
        assert_eq!(max.score, 3.0);

        let min = select_best(&[2.0, -1.0, -1.0], &moves, false);
        assert_eq!(min.best_move, Move::new(0, 1));
        assert_eq!(min.score, -1.0);
    }

    #[test]
    fn only_evaluated_prefix_is_considered() {
        let moves = [Move::new(1, 0), Move::new(1, 1), Move::new(1, 2)];
        let best = select_best(&[0.5, 0.25], &moves, false);
        assert_eq!(best.best_move, Move::new(1, 1));
    }

    #[test]
    fn infinite_scores_still_select_a_real_move() {
        let moves = [Move::new(2, 0), Move::new(2, 1)];
        let best = select_best(&[f64::NEG_INFINITY, f64::NEG_INFINITY], &moves, true);
        assert_eq!(best.best_move, Move::new(2, 0));

        assert_eq!(select_best(&[], &moves, true), SearchResult::no_moves(true));
    }
}
