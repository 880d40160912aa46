//! Time-bounded game-tree search agent.
//!
//! `SearchAgent` is the playing side of the crate: it owns an evaluator and a
//! search strategy chosen once from [`AgentConfig`], and on every turn runs
//! the anytime driver against the clock it is handed.

use crate::engines::engine_trait::Engine;
use crate::game_state::board_types::Move;
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{Evaluator, MobilityScorer};
use crate::search::iterative_deepening::{iterative_deepening_search, SearchConfig, SearchReport};
use crate::search::search_context::SearchContext;
use crate::search::search_strategy::{SearchAlgorithm, SearchStrategy};
use crate::search::time_management::Clock;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentConfig {
    /// Fixed search depth, used when `iterative` is off.
    pub search_depth: u32,
    pub iterative: bool,
    pub algorithm: SearchAlgorithm,
    /// Search aborts once the clock reports fewer milliseconds than this.
    pub timer_threshold_ms: f64,
    pub max_iterative_depth: u32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            search_depth: 3,
            iterative: true,
            algorithm: SearchAlgorithm::Minimax,
            timer_threshold_ms: 10.0,
            max_iterative_depth: 128,
        }
    }
}

impl AgentConfig {
    fn search_config(&self) -> SearchConfig {
        SearchConfig {
            search_depth: self.search_depth.max(1),
            iterative: self.iterative,
            max_iterative_depth: self.max_iterative_depth,
        }
    }
}

pub struct SearchAgent<G: GameState> {
    config: AgentConfig,
    evaluator: Box<dyn Evaluator<G>>,
    strategy: Box<dyn SearchStrategy<G>>,
    last_report: Option<SearchReport>,
}

impl<G: GameState> SearchAgent<G> {
    pub fn new(config: AgentConfig) -> Self {
        Self::with_evaluator(config, MobilityScorer)
    }

    pub fn with_evaluator<E>(config: AgentConfig, evaluator: E) -> Self
    where
        E: Evaluator<G> + 'static,
    {
        Self {
            config,
            evaluator: Box::new(evaluator),
            strategy: config.algorithm.strategy(),
            last_report: None,
        }
    }

    pub fn new_minimax(search_depth: u32) -> Self {
        Self::new(AgentConfig {
            search_depth,
            algorithm: SearchAlgorithm::Minimax,
            ..AgentConfig::default()
        })
    }

    pub fn new_alpha_beta(search_depth: u32) -> Self {
        Self::new(AgentConfig {
            search_depth,
            algorithm: SearchAlgorithm::AlphaBeta,
            ..AgentConfig::default()
        })
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Report of the most recent search, `None` before the first one or
    /// after a turn with no legal moves.
    pub fn last_report(&self) -> Option<&SearchReport> {
        self.last_report.as_ref()
    }
}

impl<G: GameState> Engine<G> for SearchAgent<G> {
    fn name(&self) -> &str {
        match self.config.algorithm {
            SearchAlgorithm::Minimax => "Minimax Agent",
            SearchAlgorithm::AlphaBeta => "AlphaBeta Agent",
        }
    }

    fn new_game(&mut self) {
        self.last_report = None;
    }

    fn choose_move(&mut self, game_state: &G, legal_moves: &[Move], clock: &dyn Clock) -> Move {
        if legal_moves.is_empty() {
            self.last_report = None;
            return Move::SENTINEL;
        }

        let ctx = SearchContext::new(
            self.evaluator.as_ref(),
            clock,
            self.config.timer_threshold_ms,
            game_state.active_player(),
        );
        let report = iterative_deepening_search(
            self.strategy.as_ref(),
            &ctx,
            game_state,
            self.config.search_config(),
        );
        self.last_report = Some(report);
        report.best_move
    }
}
