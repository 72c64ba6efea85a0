//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::Code;

/// A strategy for selecting the next guess
pub trait Strategy {
    /// Select a guess from `pool` given the codes still consistent with the history
    ///
    /// Returns `None` if no candidate remains.
    fn select_guess<'a>(&self, pool: &'a [Code], candidates: &[&'a Code]) -> Option<&'a Code>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Knuth-style worst-case minimisation (default)
    Minimax(MinimaxStrategy),
    /// First code still consistent with the feedback
    FirstConsistent(FirstConsistentStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&self, pool: &'a [Code], candidates: &[&'a Code]) -> Option<&'a Code> {
        match self {
            Self::Minimax(s) => s.select_guess(pool, candidates),
            Self::FirstConsistent(s) => s.select_guess(pool, candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "minimax", "knuth", "consistent", "first".
    /// Defaults to minimax if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "consistent" | "first" => Self::FirstConsistent(FirstConsistentStrategy),
            _ => Self::Minimax(MinimaxStrategy::default()),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Minimax(_) => "minimax",
            Self::FirstConsistent(_) => "consistent",
        }
    }
}

/// Always guesses the first remaining candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FirstConsistentStrategy;

impl Strategy for FirstConsistentStrategy {
    fn select_guess<'a>(&self, _pool: &'a [Code], candidates: &[&'a Code]) -> Option<&'a Code> {
        candidates.first().copied()
    }
}

/// Minimax over the full code space while affordable
///
/// Falls back to searching only the candidates, then to the first candidate,
/// once `pool × candidates` scorings exceed `work_limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxStrategy {
    pub work_limit: usize,
}

impl MinimaxStrategy {
    #[must_use]
    pub const fn new(work_limit: usize) -> Self {
        Self { work_limit }
    }
}

impl Default for MinimaxStrategy {
    fn default() -> Self {
        // Covers the full four-peg space (1296 × 1296)
        Self::new(2_000_000)
    }
}

impl Strategy for MinimaxStrategy {
    fn select_guess<'a>(&self, pool: &'a [Code], candidates: &[&'a Code]) -> Option<&'a Code> {
        match candidates.len() {
            0 => return None,
            1 | 2 => return candidates.first().copied(),
            _ => {}
        }

        if pool.len().saturating_mul(candidates.len()) <= self.work_limit {
            return super::minimax::select_best_guess(pool, candidates).map(|(best, _)| best);
        }

        if candidates.len().saturating_mul(candidates.len()) <= self.work_limit {
            let narrowed: Vec<Code> = candidates.iter().map(|&c| c.clone()).collect();
            let best = super::minimax::select_best_guess(&narrowed, candidates)?.0;
            return candidates.iter().copied().find(|&c| c == best);
        }

        candidates.first().copied()
    }
}
