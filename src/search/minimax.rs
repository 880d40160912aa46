//! Depth-limited minimax.
//!
//! Layers alternate strictly between the searching player (maximizing) and
//! the opponent (minimizing). Leaves are scored from the searching player's
//! point of view, never the side to move at the leaf.

use crate::game_state::game_state::GameState;
use crate::search::search_context::{select_best, SearchContext, SearchResult};
use crate::search::search_errors::SearchOutcome;

/// Full-width minimax to `depth` plies below `game_state`.
///
/// Returns `Err(SearchError::Timeout)` as soon as any frame finds the clock
/// below the threshold; no partial result is produced for the aborted call.
pub fn minimax<G: GameState>(
    ctx: &SearchContext<'_, G>,
    game_state: &G,
    depth: u32,
    maximizing_layer: bool,
) -> SearchOutcome<SearchResult> {
    ctx.check_deadline()?;

    let next_moves = game_state.legal_moves(game_state.active_player());
    if next_moves.is_empty() {
        return Ok(SearchResult::no_moves(maximizing_layer));
    }

    let scores = if depth > 1 {
        next_moves
            .iter()
            .map(|mv| {
                minimax(ctx, &game_state.forecast(*mv), depth - 1, !maximizing_layer)
                    .map(|child| child.score)
            })
            .collect::<SearchOutcome<Vec<f64>>>()?
    } else {
        next_moves
            .iter()
            .map(|mv| ctx.evaluate(&game_state.forecast(*mv)))
            .collect()
    };

    Ok(select_best(&scores, &next_moves, maximizing_layer))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::minimax;
    use crate::game_state::board_types::{Move, PlayerId};
    use crate::game_state::game_state::GameState;
    use crate::game_state::isolation_board::IsolationBoard;
    use crate::game_state::scripted_state::{ScriptedState, ScriptedTree};
    use crate::search::board_scoring::{Evaluator, MobilityScorer};
    use crate::search::search_context::SearchContext;
    use crate::search::search_errors::SearchError;
    use crate::search::time_management::Unlimited;
    use crate::utils::board_parser::parse_board;

    /// Root (player 1) with moves a, b; each answered by two player-2 replies
    /// whose leaves carry fixed scores through their blank counts.
    fn two_ply_tree() -> ScriptedState {
        let mut tree = ScriptedTree::new();
        let root = tree.add_node(PlayerId::Player1, 100);
        let a = tree.add_child(root, Move::new(0, 0), 100);
        let b = tree.add_child(root, Move::new(0, 1), 100);
        for (parent, leaves) in [(a, [3, 12]), (b, [8, 5])] {
            for (i, value) in leaves.into_iter().enumerate() {
                let leaf = tree.add_child(parent, Move::new(1, i as i32), value);
                // Keep leaves non-terminal so the closure evaluator is used.
                tree.add_child(leaf, Move::new(9, 9), 0);
            }
        }
        tree.into_state(root)
    }

    fn blank_count_score(state: &ScriptedState, _player: PlayerId) -> f64 {
        state.blank_cell_count() as f64
    }

    #[test]
    fn picks_max_of_child_minimums() {
        let state = two_ply_tree();
        let ctx = SearchContext::<ScriptedState>::new(
            &blank_count_score,
            &Unlimited,
            0.0,
            PlayerId::Player1,
        );

        let result = minimax(&ctx, &state, 2, true).expect("unlimited clock");
        assert_eq!(result.best_move, Move::new(0, 1));
        assert_eq!(result.score, 5.0);
    }

    #[test]
    fn no_moves_scores_infinite_against_maximizer_at_any_depth() {
        let mut tree = ScriptedTree::new();
        let root = tree.add_node(PlayerId::Player1, 4);
        let state = tree.into_state(root);
        let ctx = SearchContext::<ScriptedState>::new(
            &MobilityScorer,
            &Unlimited,
            0.0,
            PlayerId::Player1,
        );

        for depth in 1..4 {
            let max = minimax(&ctx, &state, depth, true).expect("unlimited clock");
            assert_eq!(max.score, f64::NEG_INFINITY);
            assert_eq!(max.best_move, Move::SENTINEL);

            let min = minimax(&ctx, &state, depth, false).expect("unlimited clock");
            assert_eq!(min.score, f64::INFINITY);
            assert_eq!(min.best_move, Move::SENTINEL);
        }
    }

    #[test]
    fn tied_scores_choose_first_enumerated_move() {
        let state = two_ply_tree();
        let flat = |_: &ScriptedState, _: PlayerId| 1.0;
        let ctx = SearchContext::<ScriptedState>::new(
            &flat,
            &Unlimited,
            0.0,
            PlayerId::Player1,
        );

        assert_eq!(
            minimax(&ctx, &state, 1, true).expect("unlimited").best_move,
            Move::new(0, 0)
        );
        assert_eq!(
            minimax(&ctx, &state, 2, true).expect("unlimited").best_move,
            Move::new(0, 0)
        );
    }

    #[test]
    fn depth_one_scores_forecast_with_fixed_perspective() {
        // One blank cell left and a single reply for player 1.
        let mut tree = ScriptedTree::new();
        let root = tree.add_node(PlayerId::Player1, 1);
        let only = tree.add_child(root, Move::new(2, 2), 0);
        tree.add_child(only, Move::new(3, 3), 0);
        tree.add_child(only, Move::new(3, 4), 0);
        tree.add_child(only, Move::new(3, 5), 0);
        tree.set_opponent_moves(only, vec![Move::new(2, 0), Move::new(2, 1)]);
        let state = tree.into_state(root);

        let ctx = SearchContext::<ScriptedState>::new(
            &MobilityScorer,
            &Unlimited,
            0.0,
            PlayerId::Player1,
        );
        let result = minimax(&ctx, &state, 1, true).expect("unlimited clock");

        let direct = MobilityScorer.score(&state.forecast(Move::new(2, 2)), PlayerId::Player1);
        assert_eq!(result.best_move, Move::new(2, 2));
        assert!(result.score.is_finite());
        assert_eq!(result.score, direct);
        // Player 2 is to move after the forecast, so player 1 sees its mobility
        // negated; both denominators sit at the 0.5 floor.
        assert!((direct - -(3.0 / 0.5 - 2.0 / 0.5)).abs() < 1e-12);
    }

    #[test]
    fn expired_clock_aborts_before_any_work() {
        let board = parse_board(
            "knight 1
             1...
             ....
             ...2",
        )
        .expect("layout should parse");
        let expired = || 5.0;
        let ctx = SearchContext::<IsolationBoard>::new(
            &MobilityScorer,
            &expired,
            10.0,
            PlayerId::Player1,
        );

        assert_eq!(minimax(&ctx, &board, 3, true), Err(SearchError::Timeout));
        assert_eq!(ctx.nodes(), 0);
    }

    #[test]
    fn timeout_deep_in_tree_unwinds_whole_call() {
        let board = parse_board(
            "knight 1
             1...
             ....
             ...2",
        )
        .expect("layout should parse");
        let polls = Cell::new(0u32);
        let clock = || {
            polls.set(polls.get() + 1);
            if polls.get() > 4 {
                0.0
            } else {
                1_000.0
            }
        };
        let ctx = SearchContext::<IsolationBoard>::new(
            &MobilityScorer,
            &clock,
            10.0,
            PlayerId::Player1,
        );

        assert_eq!(minimax(&ctx, &board, 4, true), Err(SearchError::Timeout));
        assert_eq!(polls.get(), 5);
    }
}
