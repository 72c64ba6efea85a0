//! Worst-case partition minimisation
//!
//! For a guess, the candidates split by the feedback they would produce. The
//! largest split is how many codes could remain in the worst case.

use crate::core::{Code, Feedback};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// Largest number of candidates sharing one feedback for `guess`
#[must_use]
pub fn max_partition(guess: &Code, candidates: &[&Code]) -> usize {
    if candidates.is_empty() {
        return 0;
    }

    partition_counts(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

/// Group candidates by the feedback they produce against `guess`
fn partition_counts(guess: &Code, candidates: &[&Code]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        if let Ok(feedback) = Feedback::score(candidate, guess) {
            *counts.entry(feedback).or_insert(0) += 1;
        }
    }

    counts
}

/// Pick the guess from `pool` with the smallest worst case
///
/// Ties go to guesses that are themselves candidates (they can win outright),
/// then to the earliest guess in `pool`.
#[must_use]
pub fn select_best_guess<'a>(pool: &'a [Code], candidates: &[&Code]) -> Option<(&'a Code, usize)> {
    let candidate_set: FxHashSet<&Code> = candidates.iter().copied().collect();

    pool.par_iter()
        .map(|guess| {
            let worst = max_partition(guess, candidates);
            (guess, worst, !candidate_set.contains(guess))
        })
        .min_by_key(|&(_, worst, not_candidate)| (worst, not_candidate))
        .map(|(guess, worst, _)| (guess, worst))
}
