//! Session runner
//!
//! Owns the process-wide random source and hands out sessions one after
//! another. Replays draw from the same stream, they are never reseeded.

use super::{MAX_ATTEMPTS, Outcome, Session, SessionConfig};
use crate::core::{MastermindError, RandomSource};

/// Running tally across the sessions of one process
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub games_lost: usize,
    pub games_aborted: usize,
    /// Wins by attempts used, index 1..=MAX_ATTEMPTS
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    /// Fold a finished session's outcome into the tally
    pub fn record(&mut self, outcome: &Outcome) {
        self.games_played += 1;
        match outcome {
            Outcome::Won(attempts) => {
                self.games_won += 1;
                if let Some(slot) = self.guess_distribution.get_mut(*attempts) {
                    *slot += 1;
                }
            }
            Outcome::Lost(_) => self.games_lost += 1,
            Outcome::Aborted => self.games_aborted += 1,
        }
    }

    /// Percentage of played games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

/// Starts sessions from a single seeded stream
#[derive(Debug)]
pub struct SessionRunner {
    rng: RandomSource,
    stats: Statistics,
}

impl SessionRunner {
    #[must_use]
    pub const fn new(rng: RandomSource) -> Self {
        Self {
            rng,
            stats: Statistics {
                games_played: 0,
                games_won: 0,
                games_lost: 0,
                games_aborted: 0,
                guess_distribution: [0; MAX_ATTEMPTS + 1],
            },
        }
    }

    /// Seed once for the lifetime of the runner
    #[must_use]
    pub const fn with_seed(seed: u32) -> Self {
        Self::new(RandomSource::new(seed))
    }

    /// Start a session with a code of `length` pegs
    ///
    /// The caller forces `repeat_allowed` for codes longer than the colour
    /// count (see [`SessionConfig::with_repeat_policy`]).
    ///
    /// # Errors
    /// Returns `MastermindError::Configuration` for lengths below the minimum
    /// or long codes without repeats.
    pub fn start_session(
        &mut self,
        length: usize,
        repeat_allowed: bool,
    ) -> Result<Session, MastermindError> {
        let config = SessionConfig::new(length, repeat_allowed)?;
        Session::start(config, &mut self.rng)
    }

    /// Add a finished session to the statistics
    ///
    /// # Errors
    /// Returns `MastermindError::InvariantViolation` if the session is still playing.
    pub fn finish(&mut self, session: &Session) -> Result<Outcome, MastermindError> {
        let outcome = session.outcome().ok_or_else(|| {
            MastermindError::InvariantViolation("cannot record a session still in play".into())
        })?;
        self.stats.record(&outcome);
        Ok(outcome)
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn rng(&self) -> &RandomSource {
        &self.rng
    }
}
