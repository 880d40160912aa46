//! Anytime search driver.
//!
//! Runs the configured strategy either once at a fixed depth or at depths
//! 1, 2, 3, ... until the clock runs out. Only results of fully completed
//! depths are kept; a depth interrupted by the deadline is discarded.

use log::debug;

use crate::game_state::board_types::Move;
use crate::game_state::game_state::GameState;
use crate::search::search_context::SearchContext;
use crate::search::search_errors::SearchError;
use crate::search::search_strategy::SearchStrategy;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Depth used when `iterative` is off.
    pub search_depth: u32,
    pub iterative: bool,
    /// Last depth the iterative loop may start. Guards against searching
    /// forever on boards where every line ends before the deadline.
    pub max_iterative_depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_depth: 3,
            iterative: true,
            max_iterative_depth: 128,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchReport {
    /// Move from the deepest completed search, or the sentinel.
    pub best_move: Move,
    /// Score paired with `best_move`; `-inf` when nothing completed.
    pub score: f64,
    /// Deepest depth whose search returned; 0 when none did.
    pub completed_depth: u32,
    pub nodes: u64,
    pub timed_out: bool,
}

impl Default for SearchReport {
    fn default() -> Self {
        Self {
            best_move: Move::SENTINEL,
            score: f64::NEG_INFINITY,
            completed_depth: 0,
            nodes: 0,
            timed_out: false,
        }
    }
}

pub fn iterative_deepening_search<G: GameState>(
    strategy: &dyn SearchStrategy<G>,
    ctx: &SearchContext<'_, G>,
    game_state: &G,
    config: SearchConfig,
) -> SearchReport {
    let mut report = SearchReport::default();

    let depths = if config.iterative {
        1..=config.max_iterative_depth.max(1)
    } else {
        let depth = config.search_depth.max(1);
        depth..=depth
    };

    for depth in depths {
        match strategy.search(ctx, game_state, depth) {
            Ok(result) => {
                report.best_move = result.best_move;
                report.score = result.score;
                report.completed_depth = depth;
                debug!(
                    "{} depth {} complete: move {} score {} nodes {}",
                    strategy.algorithm(),
                    depth,
                    result.best_move,
                    result.score,
                    ctx.nodes()
                );
            }
            Err(SearchError::Timeout) => {
                report.timed_out = true;
                debug!(
                    "{} timed out during depth {}; keeping depth {} result {}",
                    strategy.algorithm(),
                    depth,
                    report.completed_depth,
                    report.best_move
                );
                break;
            }
        }
    }

    report.nodes = ctx.nodes();
    report
}
