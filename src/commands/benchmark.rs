//! Benchmark command
//!
//! Plays generated sessions with the solver and reports how many guesses it needed.

use crate::core::MastermindError;
use crate::game::{Outcome, Session, SessionRunner};
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub count: usize,
    pub length: usize,
    pub repeat_allowed: bool,
}

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub strategy: String,
    pub total_games: usize,
    pub games_won: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Run the solver against `config.count` sessions from `runner`
///
/// Sessions are started one after another so their codes follow the runner's
/// random stream; once generated they are played in parallel.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the code space is too
/// large for the solver.
pub fn run_benchmark<S: Strategy + Sync>(
    runner: &mut SessionRunner,
    strategy: S,
    strategy_name: &str,
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult, MastermindError> {
    let solver = Solver::new(strategy, config.length, config.repeat_allowed)?;
    let sessions = (0..config.count)
        .map(|_| runner.start_session(config.length, config.repeat_allowed))
        .collect::<Result<Vec<_>, _>>()?;

    let pb = ProgressBar::new(config.count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("static progress template")
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let played = sessions
        .into_par_iter()
        .map(|mut session| {
            let result = play_session(&solver, &mut session).map(|()| session);
            pb.inc(1);
            result
        })
        .collect::<Result<Vec<_>, _>>()?;
    let duration = start.elapsed();
    pb.finish_with_message("Complete!");

    let mut total_guesses = 0;
    let mut games_won = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for session in &played {
        let guesses = session.history().len();
        if let Outcome::Won(attempts) = runner.finish(session)? {
            games_won += 1;
            *distribution.entry(attempts).or_insert(0) += 1;
        }
        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
    }

    let total_games = played.len();
    Ok(BenchmarkResult {
        strategy: strategy_name.to_string(),
        total_games,
        games_won,
        total_guesses,
        average_guesses: if total_games == 0 {
            0.0
        } else {
            total_guesses as f64 / total_games as f64
        },
        min_guesses: if total_games == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

/// Let the solver guess until the session ends
fn play_session<S: Strategy>(solver: &Solver<S>, session: &mut Session) -> Result<(), MastermindError> {
    while !session.is_over() {
        let Some(guess) = solver.next_guess(session.history()).cloned() else {
            // No consistent code left; cannot happen with honest feedback
            log::warn!("solver ran out of candidates, aborting session");
            return session.abort();
        };
        session.submit_guess(guess)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FirstConsistentStrategy, MinimaxStrategy};

    fn config(count: usize, repeat_allowed: bool) -> BenchmarkConfig {
        BenchmarkConfig {
            count,
            length: 4,
            repeat_allowed,
        }
    }

    #[test]
    fn benchmark_runs() {
        let mut runner = SessionRunner::with_seed(1);
        let result =
            run_benchmark(&mut runner, FirstConsistentStrategy, "consistent", &config(10, false))
                .unwrap();

        assert_eq!(result.total_games, 10);
        assert_eq!(result.games_won, 10);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= 10);
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
    }

    #[test]
    fn benchmark_distribution_sums_to_wins() {
        let mut runner = SessionRunner::with_seed(5);
        let result =
            run_benchmark(&mut runner, MinimaxStrategy::default(), "minimax", &config(6, true))
                .unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.games_won);
        assert!(result.max_guesses <= 6);
    }

    #[test]
    fn benchmark_records_runner_statistics() {
        let mut runner = SessionRunner::with_seed(3);
        run_benchmark(&mut runner, FirstConsistentStrategy, "consistent", &config(4, true)).unwrap();
        assert_eq!(runner.stats().games_played, 4);
    }

    #[test]
    fn benchmark_same_seed_same_result() {
        let run = |seed| {
            let mut runner = SessionRunner::with_seed(seed);
            run_benchmark(&mut runner, FirstConsistentStrategy, "consistent", &config(8, true))
                .unwrap()
                .total_guesses
        };
        assert_eq!(run(77), run(77));
    }

    #[test]
    fn benchmark_empty() {
        let mut runner = SessionRunner::with_seed(0);
        let result =
            run_benchmark(&mut runner, FirstConsistentStrategy, "consistent", &config(0, true))
                .unwrap();

        assert_eq!(result.total_games, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
    }

    #[test]
    fn benchmark_rejects_unbuildable_codes() {
        let mut runner = SessionRunner::with_seed(0);
        let bad = BenchmarkConfig {
            count: 1,
            length: 7,
            repeat_allowed: false,
        };
        assert!(run_benchmark(&mut runner, FirstConsistentStrategy, "consistent", &bad).is_err());
    }
}
