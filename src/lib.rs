//! Crate root module declarations for the Isolation search agent.
//!
//! This file exposes the top-level subsystems (game state, search, engines
//! and utility helpers) so the series binary, benches and tests can import
//! stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board_types;
    pub mod game_state;
    pub mod isolation_board;
    pub mod scripted_state;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
    pub mod iterative_deepening;
    pub mod minimax;
    pub mod search_context;
    pub mod search_errors;
    pub mod search_strategy;
    pub mod time_management;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_random;
    pub mod engine_search_agent;
    pub mod engine_trait;
}

pub mod utils {
    pub mod board_parser;
    pub mod engine_match_harness;
    pub mod render_board;
}
