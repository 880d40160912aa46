//! Control signals raised inside the recursive search.

use thiserror::Error;

pub type SearchOutcome<T> = Result<T, SearchError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Remaining time fell below the agent's threshold.
    ///
    /// Every recursive frame propagates this untouched with `?`; only the
    /// iterative-deepening controller matches on it.
    #[error("search deadline reached")]
    Timeout,
}
