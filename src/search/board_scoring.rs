//! Pluggable position evaluation.
//!
//! Search stays independent of the heuristic by scoring leaves through the
//! [`Evaluator`] trait. Scores are always from the point of view of the
//! player passed in, whichever side is to move at that position: higher is
//! better for that player, `+inf` is a won position and `-inf` a lost one.

use std::collections::HashSet;

use crate::game_state::board_types::{Move, PlayerId};
use crate::game_state::game_state::GameState;

// Lower bound applied to blank-cell denominators so late-game positions with
// one blank cell left stay finite.
const MIN_BLANK_DENOMINATOR: f64 = 0.5;

pub trait Evaluator<G: GameState> {
    fn score(&self, game_state: &G, player: PlayerId) -> f64;
}

impl<G, F> Evaluator<G> for F
where
    G: GameState,
    F: Fn(&G, PlayerId) -> f64,
{
    #[inline]
    fn score(&self, game_state: &G, player: PlayerId) -> f64 {
        self(game_state, player)
    }
}

/// `Some(±inf)` when the game is decided for `player`.
#[inline]
fn terminal_score<G: GameState>(game_state: &G, player: PlayerId) -> Option<f64> {
    if game_state.is_loser(player) {
        Some(f64::NEG_INFINITY)
    } else if game_state.is_winner(player) {
        Some(f64::INFINITY)
    } else {
        None
    }
}

/// Flips a score computed for the active player into `player`'s frame.
#[inline]
fn from_perspective<G: GameState>(game_state: &G, player: PlayerId, raw: f64) -> f64 {
    if game_state.active_player() == player {
        raw
    } else {
        -raw
    }
}

#[inline]
fn blank_denominator(blank_cells: f64) -> f64 {
    blank_cells.max(MIN_BLANK_DENOMINATOR)
}

/// Default heuristic: mobility share with forced-move lookahead.
///
/// When the side to move has a single reply the position is scored after that
/// reply instead. Otherwise it rewards the active side's moves as a share of
/// the blank cells and penalizes the moves only the opponent can reach:
///
/// `|active| / n_empty - |inactive \ active| / (n_empty - 1)`
///
/// Both denominators are clamped to at least 0.5.
///
/// The forced-move recursion is only bounded by the length of forced chains
/// on the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct MobilityScorer;

impl<G: GameState> Evaluator<G> for MobilityScorer {
    fn score(&self, game_state: &G, player: PlayerId) -> f64 {
        if let Some(decided) = terminal_score(game_state, player) {
            return decided;
        }

        let active_moves = game_state.legal_moves(game_state.active_player());
        if let [forced] = active_moves.as_slice() {
            return self.score(&game_state.forecast(*forced), player);
        }

        let active: HashSet<Move> = active_moves.into_iter().collect();
        let inactive: HashSet<Move> = game_state
            .legal_moves(game_state.inactive_player())
            .into_iter()
            .collect();
        let exclusive = inactive.difference(&active).count() as f64;
        let n_empty = game_state.blank_cell_count() as f64;

        let raw = active.len() as f64 / blank_denominator(n_empty)
            - exclusive / blank_denominator(n_empty - 1.0);
        from_perspective(game_state, player, raw)
    }
}

/// Counts only the moves each side is sure to keep: a reply shared with the
/// active side can be taken away, so the opponent is charged for at most one
/// of them.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuaranteedMovesScorer;

impl<G: GameState> Evaluator<G> for GuaranteedMovesScorer {
    fn score(&self, game_state: &G, player: PlayerId) -> f64 {
        if let Some(decided) = terminal_score(game_state, player) {
            return decided;
        }

        let active: HashSet<Move> = game_state
            .legal_moves(game_state.active_player())
            .into_iter()
            .collect();
        let inactive: HashSet<Move> = game_state
            .legal_moves(game_state.inactive_player())
            .into_iter()
            .collect();
        let exclusive = inactive.difference(&active).count() as f64;
        let contested_bound = inactive.len() as f64 - 1.0;

        let raw = active.len() as f64 - exclusive.max(contested_bound);
        from_perspective(game_state, player, raw)
    }
}

/// Plain mobility difference, each side's moves as a share of blank cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentScorer;

impl<G: GameState> Evaluator<G> for PercentScorer {
    fn score(&self, game_state: &G, player: PlayerId) -> f64 {
        if let Some(decided) = terminal_score(game_state, player) {
            return decided;
        }

        let n_active = game_state.legal_moves(game_state.active_player()).len() as f64;
        let n_inactive = game_state.legal_moves(game_state.inactive_player()).len() as f64;
        let n_empty = game_state.blank_cell_count() as f64;

        let raw = n_active / blank_denominator(n_empty)
            - n_inactive / blank_denominator(n_empty - 1.0);
        from_perspective(game_state, player, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::{Evaluator, GuaranteedMovesScorer, MobilityScorer, PercentScorer};
    use crate::game_state::board_types::{Move, PlayerId};
    use crate::game_state::game_state::GameState;
    use crate::game_state::scripted_state::ScriptedTree;
    use crate::utils::board_parser::parse_board;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn decided_positions_score_infinite_for_every_heuristic() {
        let board = parse_board(
            "knight 1
             1#.
             #.#
             .2.",
        )
        .expect("layout should parse");
        assert!(board.is_loser(PlayerId::Player1));

        for player in [PlayerId::Player1, PlayerId::Player2] {
            let expected = if player == PlayerId::Player1 {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            };
            assert_eq!(MobilityScorer.score(&board, player), expected);
            assert_eq!(GuaranteedMovesScorer.score(&board, player), expected);
            assert_eq!(PercentScorer.score(&board, player), expected);
        }
    }

    #[test]
    fn single_reply_is_scored_after_forecasting_it() {
        // Player 1 at (0,0) has the lone knight jump to (2,1).
        let board = parse_board(
            "knight 1
             1...
             .##.
             ...2
             ....",
        )
        .expect("layout should parse");
        let active = board.legal_moves(PlayerId::Player1);
        assert_eq!(active, vec![Move::new(2, 1)]);

        let forced = board.forecast(active[0]);
        for player in [PlayerId::Player1, PlayerId::Player2] {
            assert_eq!(
                MobilityScorer.score(&board, player),
                MobilityScorer.score(&forced, player)
            );
        }
    }

    #[test]
    fn mobility_formula_and_sign_follow_side_to_move() {
        let mut tree = ScriptedTree::new();
        let root = tree.add_node(PlayerId::Player1, 10);
        tree.add_child(root, Move::new(0, 0), 9);
        tree.add_child(root, Move::new(0, 1), 9);
        tree.add_child(root, Move::new(0, 2), 9);
        // (0,1) is shared, the other two are the opponent's alone.
        tree.set_opponent_moves(root, vec![Move::new(0, 1), Move::new(5, 5), Move::new(6, 6)]);
        let state = tree.into_state(root);

        let expected = 3.0 / 10.0 - 2.0 / 9.0;
        assert!(close(MobilityScorer.score(&state, PlayerId::Player1), expected));
        assert!(close(MobilityScorer.score(&state, PlayerId::Player2), -expected));
    }

    #[test]
    fn mobility_clamps_last_blank_denominator_to_one_half() {
        let mut tree = ScriptedTree::new();
        let root = tree.add_node(PlayerId::Player2, 1);
        tree.add_child(root, Move::new(0, 0), 0);
        tree.add_child(root, Move::new(0, 1), 0);
        tree.set_opponent_moves(root, vec![Move::new(3, 3)]);
        let state = tree.into_state(root);

        // 2 / max(1, 0.5) - 1 / max(0, 0.5)
        let score = MobilityScorer.score(&state, PlayerId::Player2);
        assert!(score.is_finite());
        assert!(close(score, 2.0 - 2.0));

        let mut tree = ScriptedTree::new();
        let root = tree.add_node(PlayerId::Player1, 0);
        tree.add_child(root, Move::new(0, 0), 0);
        tree.add_child(root, Move::new(0, 1), 0);
        let state = tree.into_state(root);
        assert!(close(MobilityScorer.score(&state, PlayerId::Player1), 4.0));
    }

    #[test]
    fn guaranteed_moves_charges_opponent_for_exclusive_replies() {
        let mut tree = ScriptedTree::new();
        let root = tree.add_node(PlayerId::Player1, 20);
        tree.add_child(root, Move::new(0, 0), 19);
        tree.add_child(root, Move::new(0, 1), 19);
        tree.set_opponent_moves(root, vec![Move::new(0, 1), Move::new(0, 0), Move::new(4, 4)]);
        let state = tree.into_state(root);

        // exclusive = 1, contested bound = 3 - 1 = 2 -> 2 - 2
        assert!(close(GuaranteedMovesScorer.score(&state, PlayerId::Player1), 0.0));
    }

    #[test]
    fn percent_scorer_uses_raw_mobility_shares() {
        let mut tree = ScriptedTree::new();
        let root = tree.add_node(PlayerId::Player1, 5);
        tree.add_child(root, Move::new(0, 0), 4);
        tree.add_child(root, Move::new(0, 1), 4);
        tree.set_opponent_moves(root, vec![Move::new(0, 1)]);
        let state = tree.into_state(root);

        let expected = 2.0 / 5.0 - 1.0 / 4.0;
        assert!(close(PercentScorer.score(&state, PlayerId::Player2), -expected));
    }

    #[test]
    fn closures_are_evaluators() {
        let board = crate::game_state::isolation_board::IsolationBoard::standard();
        let constant = |_: &crate::game_state::isolation_board::IsolationBoard, _: PlayerId| 7.0;
        assert_eq!(constant.score(&board, PlayerId::Player1), 7.0);
    }
}
