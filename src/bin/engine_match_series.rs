//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --p1 alphabeta --p2 greedy --games 20`
//!
//! Players are `minimax`, `alphabeta`, `greedy` or `random`. Other flags:
//! `--games N`, `--seed N`, `--move-ms N`, `--size N`, `--queen`.

use isolation_agent::engines::engine_greedy::GreedyEngine;
use isolation_agent::engines::engine_random::RandomEngine;
use isolation_agent::engines::engine_search_agent::{AgentConfig, SearchAgent};
use isolation_agent::engines::engine_trait::Engine;
use isolation_agent::game_state::isolation_board::{IsolationBoard, MovementRule};
use isolation_agent::search::search_strategy::SearchAlgorithm;
use isolation_agent::utils::engine_match_harness::{
    play_match_series, MatchConfig, MatchSeriesConfig,
};

#[derive(Debug, Clone, Copy)]
enum PlayerKind {
    Search(SearchAlgorithm),
    Greedy,
    Random,
}

fn parse_player(name: &str) -> Result<PlayerKind, String> {
    match name {
        "greedy" => Ok(PlayerKind::Greedy),
        "random" => Ok(PlayerKind::Random),
        other => other.parse::<SearchAlgorithm>().map(PlayerKind::Search),
    }
}

fn build_player(kind: PlayerKind, seed: u64) -> Box<dyn Engine<IsolationBoard>> {
    match kind {
        PlayerKind::Search(algorithm) => Box::new(SearchAgent::<IsolationBoard>::new(AgentConfig {
            algorithm,
            ..AgentConfig::default()
        })),
        PlayerKind::Greedy => Box::new(GreedyEngine::<IsolationBoard>::new()),
        PlayerKind::Random => Box::new(RandomEngine::seeded(seed)),
    }
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{flag} needs a value"))?;
    value
        .parse::<T>()
        .map_err(|_| format!("invalid value for {flag}: '{value}'"))
}

fn main() -> Result<(), String> {
    let mut player1 = PlayerKind::Search(SearchAlgorithm::AlphaBeta);
    let mut player2 = PlayerKind::Search(SearchAlgorithm::Minimax);
    let mut series = MatchSeriesConfig {
        games: 10,
        base_seed: 1234,
        per_game: MatchConfig::default(),
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--p1" => player1 = parse_player(&args.next().unwrap_or_default())?,
            "--p2" => player2 = parse_player(&args.next().unwrap_or_default())?,
            "--games" => series.games = parse_number(&arg, args.next())?,
            "--seed" => series.base_seed = parse_number(&arg, args.next())?,
            "--move-ms" => series.per_game.move_time_ms = parse_number(&arg, args.next())?,
            "--size" => {
                let size: i32 = parse_number(&arg, args.next())?;
                series.per_game.width = size;
                series.per_game.height = size;
            }
            "--queen" => series.per_game.movement = MovementRule::Queen,
            other => return Err(format!("unknown argument '{other}'")),
        }
    }

    let seed = series.base_seed;
    let stats = play_match_series(
        || build_player(player1, seed),
        || build_player(player2, seed ^ 0x9E37_79B9),
        &series,
    )
    .map_err(|e| e.to_string())?;

    println!("player1={player1:?} player2={player2:?}");
    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
