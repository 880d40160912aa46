//! Algorithm selection.
//!
//! The configured [`SearchAlgorithm`] is turned into a strategy object once,
//! when an agent is built, so the per-turn search never dispatches on names.

use std::fmt;
use std::str::FromStr;

use crate::game_state::game_state::GameState;
use crate::search::alpha_beta::alpha_beta;
use crate::search::minimax::minimax;
use crate::search::search_context::{SearchContext, SearchResult};
use crate::search::search_errors::SearchOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchAlgorithm {
    #[default]
    Minimax,
    AlphaBeta,
}

impl SearchAlgorithm {
    pub fn strategy<G: GameState>(self) -> Box<dyn SearchStrategy<G>> {
        match self {
            SearchAlgorithm::Minimax => Box::new(MinimaxStrategy),
            SearchAlgorithm::AlphaBeta => Box::new(AlphaBetaStrategy),
        }
    }
}

impl FromStr for SearchAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(SearchAlgorithm::Minimax),
            "alphabeta" | "alpha_beta" | "alpha-beta" => Ok(SearchAlgorithm::AlphaBeta),
            other => Err(format!("unknown search algorithm '{other}'")),
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchAlgorithm::Minimax => write!(f, "minimax"),
            SearchAlgorithm::AlphaBeta => write!(f, "alphabeta"),
        }
    }
}

/// One complete depth-limited search from the root, maximizing for the
/// context's perspective player.
pub trait SearchStrategy<G: GameState> {
    fn algorithm(&self) -> SearchAlgorithm;

    fn search(
        &self,
        ctx: &SearchContext<'_, G>,
        game_state: &G,
        depth: u32,
    ) -> SearchOutcome<SearchResult>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxStrategy;

impl<G: GameState> SearchStrategy<G> for MinimaxStrategy {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::Minimax
    }

    fn search(
        &self,
        ctx: &SearchContext<'_, G>,
        game_state: &G,
        depth: u32,
    ) -> SearchOutcome<SearchResult> {
        minimax(ctx, game_state, depth, true)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AlphaBetaStrategy;

impl<G: GameState> SearchStrategy<G> for AlphaBetaStrategy {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::AlphaBeta
    }

    fn search(
        &self,
        ctx: &SearchContext<'_, G>,
        game_state: &G,
        depth: u32,
    ) -> SearchOutcome<SearchResult> {
        alpha_beta(
            ctx,
            game_state,
            depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            true,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::SearchAlgorithm;
    use crate::game_state::isolation_board::IsolationBoard;

    #[test]
    fn parses_algorithm_names() {
        assert_eq!("minimax".parse::<SearchAlgorithm>(), Ok(SearchAlgorithm::Minimax));
        assert_eq!(" AlphaBeta ".parse::<SearchAlgorithm>(), Ok(SearchAlgorithm::AlphaBeta));
        assert_eq!("alpha-beta".parse::<SearchAlgorithm>(), Ok(SearchAlgorithm::AlphaBeta));
        assert!("negamax".parse::<SearchAlgorithm>().is_err());
    }

    #[test]
    fn selector_resolves_to_matching_strategy() {
        for algorithm in [SearchAlgorithm::Minimax, SearchAlgorithm::AlphaBeta] {
            let strategy = algorithm.strategy::<IsolationBoard>();
            assert_eq!(strategy.algorithm(), algorithm);
            assert_eq!(algorithm.to_string().parse::<SearchAlgorithm>(), Ok(algorithm));
        }
    }
}
