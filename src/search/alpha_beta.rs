//! Minimax with alpha-beta pruning.
//!
//! Windows are tightened from the scores already seen among siblings at the
//! current node: a maximizing node hands its children `alpha = max(seen)`, a
//! minimizing node hands them `beta = min(seen)`, while the other bound is
//! passed through unchanged. Cutoffs compare the most recent sibling score
//! against the incoming bound. Children are visited in generator order and
//! pruning only ever shortens that sequence.

use crate::game_state::game_state::GameState;
use crate::search::search_context::{select_best, SearchContext, SearchResult};
use crate::search::search_errors::SearchOutcome;

/// Alpha-beta search to `depth` plies below `game_state`.
///
/// Chooses the same move as [`minimax`](crate::search::minimax::minimax) at
/// the same depth; scores of pruned subtrees are bounds rather than exact
/// values.
pub fn alpha_beta<G: GameState>(
    ctx: &SearchContext<'_, G>,
    game_state: &G,
    depth: u32,
    alpha: f64,
    beta: f64,
    maximizing_layer: bool,
) -> SearchOutcome<SearchResult> {
    ctx.check_deadline()?;

    let next_moves = game_state.legal_moves(game_state.active_player());
    if next_moves.is_empty() {
        return Ok(SearchResult::no_moves(maximizing_layer));
    }

    let mut scores = Vec::with_capacity(next_moves.len());

    if depth > 1 {
        let first = alpha_beta(
            ctx,
            &game_state.forecast(next_moves[0]),
            depth - 1,
            alpha,
            beta,
            !maximizing_layer,
        )?;
        scores.push(first.score);

        for mv in &next_moves[1..] {
            let last = scores[scores.len() - 1];
            let (child_alpha, child_beta) = if maximizing_layer {
                if last >= beta {
                    break;
                }
                (scores.iter().copied().fold(f64::NEG_INFINITY, f64::max), beta)
            } else {
                if last <= alpha {
                    break;
                }
                (alpha, scores.iter().copied().fold(f64::INFINITY, f64::min))
            };

            let child = alpha_beta(
                ctx,
                &game_state.forecast(*mv),
                depth - 1,
                child_alpha,
                child_beta,
                !maximizing_layer,
            )?;
            scores.push(child.score);
        }
    } else {
        for mv in &next_moves {
            let score = ctx.evaluate(&game_state.forecast(*mv));
            scores.push(score);
            if (maximizing_layer && score >= beta) || (!maximizing_layer && score <= alpha) {
                break;
            }
        }
    }

    Ok(select_best(&scores, &next_moves, maximizing_layer))
}
