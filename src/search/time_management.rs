//! Deadline sources for time-bounded search.
//!
//! The search never reads the wall clock itself; it polls a [`Clock`] that
//! reports how many milliseconds remain in the current turn. The harness
//! hands agents a [`DeadlineClock`], tests hand them closures.

use std::time::{Duration, Instant};

pub trait Clock {
    /// Milliseconds left before the turn deadline. Negative once it passed.
    fn time_left(&self) -> f64;
}

impl<F> Clock for F
where
    F: Fn() -> f64,
{
    #[inline]
    fn time_left(&self) -> f64 {
        self()
    }
}

/// Wall-clock deadline fixed when the turn starts.
#[derive(Debug, Clone, Copy)]
pub struct DeadlineClock {
    started_at: Instant,
    budget: Duration,
}

impl DeadlineClock {
    pub fn start(budget: Duration) -> Self {
        Self {
            started_at: Instant::now(),
            budget,
        }
    }

    pub fn from_millis(budget_ms: u64) -> Self {
        Self::start(Duration::from_millis(budget_ms))
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}

impl Clock for DeadlineClock {
    fn time_left(&self) -> f64 {
        let budget_ms = self.budget.as_secs_f64() * 1000.0;
        budget_ms - self.started_at.elapsed().as_secs_f64() * 1000.0
    }
}

/// Clock that never runs out. Useful for fixed-depth searches.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unlimited;

impl Clock for Unlimited {
    #[inline]
    fn time_left(&self) -> f64 {
        f64::INFINITY
    }
}
