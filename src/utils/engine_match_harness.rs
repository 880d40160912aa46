//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two [`Engine`] implementations against each other on a fresh
//! [`IsolationBoard`], optionally after a seeded random placement of both
//! players. Each turn gets its own [`DeadlineClock`]; an engine that answers
//! after the deadline or with an illegal move forfeits the game.

use log::{info, warn};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::Engine;
use crate::errors::IsolationResult;
use crate::game_state::board_types::{Move, PlayerId};
use crate::game_state::game_state::GameState;
use crate::game_state::isolation_board::{IsolationBoard, MovementRule, STANDARD_SIZE};
use crate::search::time_management::{Clock, DeadlineClock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForfeitReason {
    Timeout,
    IllegalMove(Move),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The loser was to move and had no legal move left.
    Isolated { winner: PlayerId },
    Forfeit {
        winner: PlayerId,
        reason: ForfeitReason,
    },
}

impl MatchOutcome {
    pub fn winner(&self) -> PlayerId {
        match self {
            MatchOutcome::Isolated { winner } | MatchOutcome::Forfeit { winner, .. } => *winner,
        }
    }

    pub fn forfeit_reason(&self) -> Option<ForfeitReason> {
        match self {
            MatchOutcome::Isolated { .. } => None,
            MatchOutcome::Forfeit { reason, .. } => Some(*reason),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub width: i32,
    pub height: i32,
    pub movement: MovementRule,
    /// Wall-clock budget per move, in milliseconds.
    pub move_time_ms: u64,
    /// Place both players on random blank cells before the engines move.
    pub random_opening: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            width: STANDARD_SIZE,
            height: STANDARD_SIZE,
            movement: MovementRule::Knight,
            move_time_ms: 150,
            random_opening: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: IsolationBoard,
    pub opening_moves: Vec<Move>,
    pub played_moves: Vec<Move>,
    /// Indexed by [`PlayerId::index`].
    pub move_counts: [u32; 2],
    pub total_time_ns: [u128; 2],
}

/// Identity of an engine across a series, independent of the seat it plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contestant {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesOutcome {
    pub winner: Contestant,
    pub winner_seat: PlayerId,
    pub forfeit: Option<ForfeitReason>,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub player1_forfeits: u16,
    pub player2_forfeits: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub overall_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} player1_forfeits={} player2_forfeits={} p1_avg_ms={:.3} p2_avg_ms={:.3} overall_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.player1_forfeits,
            self.player2_forfeits,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
            self.overall_avg_move_time_ms
        )
    }
}

/// Play a single seeded match. `first` moves first as [`PlayerId::Player1`].
pub fn play_match<E1, E2>(
    first: &mut E1,
    second: &mut E2,
    seed: u64,
    config: &MatchConfig,
) -> IsolationResult<MatchResult>
where
    E1: Engine<IsolationBoard> + ?Sized,
    E2: Engine<IsolationBoard> + ?Sized,
{
    let start = IsolationBoard::new(config.width, config.height, config.movement)?;
    play_match_from_state(first, second, start, seed, config)
}

/// Play a match from a caller-provided position. The random opening is
/// applied only to players that have not been placed yet.
pub fn play_match_from_state<E1, E2>(
    first: &mut E1,
    second: &mut E2,
    start: IsolationBoard,
    seed: u64,
    config: &MatchConfig,
) -> IsolationResult<MatchResult>
where
    E1: Engine<IsolationBoard> + ?Sized,
    E2: Engine<IsolationBoard> + ?Sized,
{
    first.new_game();
    second.new_game();

    let (mut state, opening_moves) = if config.random_opening {
        apply_seeded_random_opening(&start, seed)?
    } else {
        (start, Vec::new())
    };

    let mut played_moves = Vec::new();
    let mut move_counts = [0u32; 2];
    let mut total_time_ns = [0u128; 2];

    let outcome = loop {
        let mover = state.active_player();
        let legal_moves = state.legal_moves(mover);
        if legal_moves.is_empty() {
            break MatchOutcome::Isolated {
                winner: mover.opponent(),
            };
        }

        let clock = DeadlineClock::from_millis(config.move_time_ms);
        let chosen = match mover {
            PlayerId::Player1 => first.choose_move(&state, &legal_moves, &clock),
            PlayerId::Player2 => second.choose_move(&state, &legal_moves, &clock),
        };
        let late = clock.time_left() < 0.0;

        let seat = mover.index();
        move_counts[seat] = move_counts[seat].saturating_add(1);
        total_time_ns[seat] = total_time_ns[seat].saturating_add(clock.elapsed().as_nanos());

        if late {
            warn!(
                "{} answered {} after its {} ms budget ({:?} elapsed)",
                mover,
                chosen,
                config.move_time_ms,
                clock.elapsed()
            );
            break MatchOutcome::Forfeit {
                winner: mover.opponent(),
                reason: ForfeitReason::Timeout,
            };
        }

        match state.apply_move(chosen) {
            Ok(next) => {
                played_moves.push(chosen);
                state = next;
            }
            Err(err) => {
                warn!("{err}");
                break MatchOutcome::Forfeit {
                    winner: mover.opponent(),
                    reason: ForfeitReason::IllegalMove(chosen),
                };
            }
        }
    };

    info!(
        "match seed={} winner={} outcome={:?} plies={}",
        seed,
        outcome.winner(),
        outcome,
        played_moves.len()
    );

    Ok(MatchResult {
        outcome,
        final_state: state,
        opening_moves,
        played_moves,
        move_counts,
        total_time_ns,
    })
}

/// Play a series of matches and aggregate win and forfeit statistics.
///
/// Contestants swap seats every game, so player 1 moves first in even games
/// and player 2 in odd ones. Game `i` uses seed `base_seed + i`.
pub fn play_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> IsolationResult<MatchSeriesStats>
where
    F1: Fn() -> Box<dyn Engine<IsolationBoard>>,
    F2: Fn() -> Box<dyn Engine<IsolationBoard>>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };

    for i in 0..config.games {
        let player1_moves_first = i % 2 == 0;
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let mut player1 = player1_factory();
        let mut player2 = player2_factory();

        let result = if player1_moves_first {
            play_match(player1.as_mut(), player2.as_mut(), seed, &config.per_game)?
        } else {
            play_match(player2.as_mut(), player1.as_mut(), seed, &config.per_game)?
        };

        let (p1_seat, p2_seat) = if player1_moves_first {
            (PlayerId::Player1, PlayerId::Player2)
        } else {
            (PlayerId::Player2, PlayerId::Player1)
        };
        stats.player1_moves = stats
            .player1_moves
            .saturating_add(result.move_counts[p1_seat.index()]);
        stats.player2_moves = stats
            .player2_moves
            .saturating_add(result.move_counts[p2_seat.index()]);
        stats.player1_total_time_ns = stats
            .player1_total_time_ns
            .saturating_add(result.total_time_ns[p1_seat.index()]);
        stats.player2_total_time_ns = stats
            .player2_total_time_ns
            .saturating_add(result.total_time_ns[p2_seat.index()]);

        let winner_seat = result.outcome.winner();
        let forfeit = result.outcome.forfeit_reason();
        let winner = if winner_seat == p1_seat {
            stats.player1_wins += 1;
            if forfeit.is_some() {
                stats.player2_forfeits += 1;
            }
            Contestant::Player1
        } else {
            stats.player2_wins += 1;
            if forfeit.is_some() {
                stats.player1_forfeits += 1;
            }
            Contestant::Player2
        };
        stats.outcomes.push(SeriesOutcome {
            winner,
            winner_seat,
            forfeit,
        });

        info!(
            "[series] game {}/{} seed={} winner={:?} p1_wins={} p2_wins={}",
            i + 1,
            config.games,
            seed,
            winner,
            stats.player1_wins,
            stats.player2_wins
        );
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    let total_ns = stats
        .player1_total_time_ns
        .saturating_add(stats.player2_total_time_ns);
    let total_moves = stats.player1_moves.saturating_add(stats.player2_moves);
    stats.overall_avg_move_time_ms = avg_ns_per_move_ms(total_ns, total_moves);

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

/// Places every unplaced player on a random blank cell.
fn apply_seeded_random_opening(
    initial: &IsolationBoard,
    seed: u64,
) -> IsolationResult<(IsolationBoard, Vec<Move>)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = initial.clone();
    let mut opening_moves = Vec::new();

    while state.position(state.active_player()).is_none() {
        let blanks = state.blank_cells();
        let Some(chosen) = blanks.choose(&mut rng).copied() else {
            break;
        };
        state = state.apply_move(chosen)?;
        opening_moves.push(chosen);
    }

    Ok((state, opening_moves))
}
