//! One playthrough: secret code, attempts and history
//!
//! A session is created already playing; the configuring step is its
//! constructor. Each guess is scored, recorded, and then checked for a win
//! before the attempt counter moves, so the tenth guess can still win.

use super::SessionConfig;
use crate::core::{Code, Feedback, MastermindError, RandomSource, generate};

/// A scored guess kept for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Code,
    pub feedback: Feedback,
}

/// Where a session is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    Won { attempts_used: usize },
    Lost { secret: Code },
    Aborted,
}

impl SessionState {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// How a finished session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Won(usize),
    Lost(Code),
    Aborted,
}

/// Feedback for one submitted guess and the state it left the session in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnResult {
    pub feedback: Feedback,
    pub state: SessionState,
}

/// A single game against a generated secret code
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    secret: Code,
    attempts: usize,
    history: Vec<GuessRecord>,
    state: SessionState,
}

impl Session {
    /// Generate the secret code from `rng` and start playing
    ///
    /// # Errors
    /// Propagates generator errors for configurations that cannot be built.
    pub fn start(config: SessionConfig, rng: &mut RandomSource) -> Result<Self, MastermindError> {
        let secret = generate(rng, config.length, config.repeat_allowed)?;
        log::info!(
            "session started: {} pegs, repeats {}",
            config.length,
            if config.repeat_allowed { "on" } else { "off" }
        );

        Ok(Self {
            config,
            secret,
            attempts: 0,
            history: Vec::new(),
            state: SessionState::Playing,
        })
    }

    /// Score a guess and advance the session
    ///
    /// # Errors
    /// Returns `MastermindError::InvariantViolation` if the session is already
    /// finished or `guess` has the wrong number of pegs.
    pub fn submit_guess(&mut self, guess: Code) -> Result<TurnResult, MastermindError> {
        self.ensure_playing("submit a guess")?;

        if guess.len() != self.secret.len() {
            return Err(MastermindError::InvariantViolation(format!(
                "guess has {} pegs, session expects {}",
                guess.len(),
                self.secret.len()
            )));
        }

        let feedback = Feedback::score(&self.secret, &guess)?;
        self.history.push(GuessRecord { guess, feedback });

        if feedback.is_solved(self.secret.len()) {
            self.state = SessionState::Won {
                attempts_used: self.attempts + 1,
            };
        } else {
            self.attempts += 1;
            if self.attempts == self.config.max_attempts {
                self.state = SessionState::Lost {
                    secret: self.secret.clone(),
                };
            }
        }

        log::debug!(
            "turn {}: {} in place, {} colour only",
            self.history.len(),
            feedback.position_correct,
            feedback.color_correct
        );
        if self.state.is_terminal() {
            log::info!("session finished: {:?}", self.outcome());
        }

        Ok(TurnResult {
            feedback,
            state: self.state.clone(),
        })
    }

    /// End the session early without scoring anything
    ///
    /// # Errors
    /// Returns `MastermindError::InvariantViolation` if the session is already finished.
    pub fn abort(&mut self) -> Result<(), MastermindError> {
        self.ensure_playing("abort")?;
        self.state = SessionState::Aborted;
        log::info!("session aborted after {} guesses", self.history.len());
        Ok(())
    }

    fn ensure_playing(&self, action: &str) -> Result<(), MastermindError> {
        if self.state.is_terminal() {
            return Err(MastermindError::InvariantViolation(format!(
                "cannot {action}: session already ended ({:?})",
                self.state
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Terminal outcome, or `None` while still playing
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match &self.state {
            SessionState::Playing => None,
            SessionState::Won { attempts_used } => Some(Outcome::Won(*attempts_used)),
            SessionState::Lost { secret } => Some(Outcome::Lost(secret.clone())),
            SessionState::Aborted => Some(Outcome::Aborted),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Non-winning guesses so far
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.attempts)
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color::{self, Blue, Brown, Green, Purple, Red, Yellow};
    use crate::game::MAX_ATTEMPTS;

    // Seed 0, four pegs, no repeats
    const SECRET: [Color; 4] = [Blue, Yellow, Red, Brown];

    fn start() -> Session {
        let config = SessionConfig::new(4, false).unwrap();
        Session::start(config, &mut RandomSource::new(0)).unwrap()
    }

    fn miss() -> Code {
        Code::new(vec![Green, Green, Purple, Purple])
    }

    #[test]
    fn first_guess_win_uses_one_attempt() {
        let mut session = start();
        let turn = session.submit_guess(Code::new(SECRET.to_vec())).unwrap();

        assert_eq!(turn.feedback, Feedback::new(4, 0));
        assert_eq!(turn.state, SessionState::Won { attempts_used: 1 });
        assert_eq!(session.outcome(), Some(Outcome::Won(1)));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn win_reports_every_guess_including_the_winner() {
        let mut session = start();
        for _ in 0..3 {
            let turn = session.submit_guess(miss()).unwrap();
            assert_eq!(turn.state, SessionState::Playing);
            assert_eq!(turn.feedback, Feedback::default());
        }
        session.submit_guess(Code::new(SECRET.to_vec())).unwrap();
        assert_eq!(session.outcome(), Some(Outcome::Won(4)));
    }

    #[test]
    fn tenth_guess_can_still_win() {
        let mut session = start();
        for _ in 0..MAX_ATTEMPTS - 1 {
            session.submit_guess(miss()).unwrap();
        }
        assert_eq!(session.attempts_remaining(), 1);
        let turn = session.submit_guess(Code::new(SECRET.to_vec())).unwrap();
        assert_eq!(turn.state, SessionState::Won { attempts_used: MAX_ATTEMPTS });
    }

    #[test]
    fn tenth_miss_loses_and_reveals_secret() {
        let mut session = start();
        for i in 1..=MAX_ATTEMPTS {
            let turn = session.submit_guess(miss()).unwrap();
            if i < MAX_ATTEMPTS {
                assert_eq!(turn.state, SessionState::Playing);
            }
        }
        assert_eq!(session.outcome(), Some(Outcome::Lost(Code::new(SECRET.to_vec()))));
        assert_eq!(session.attempts(), MAX_ATTEMPTS);
        assert_eq!(session.history().len(), MAX_ATTEMPTS);
    }

    #[test]
    fn history_keeps_guesses_in_order() {
        let mut session = start();
        let first = Code::new(vec![Blue, Red, Yellow, Green]);
        session.submit_guess(first.clone()).unwrap();
        session.submit_guess(miss()).unwrap();

        let history = session.history();
        assert_eq!(history[0].guess, first);
        assert_eq!(history[0].feedback, Feedback::new(1, 2));
        assert_eq!(history[1].guess, miss());
    }

    #[test]
    fn finished_sessions_reject_further_moves() {
        let mut session = start();
        session.submit_guess(Code::new(SECRET.to_vec())).unwrap();

        assert!(matches!(
            session.submit_guess(miss()),
            Err(MastermindError::InvariantViolation(_))
        ));
        assert!(session.abort().is_err());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn abort_scores_nothing() {
        let mut session = start();
        session.submit_guess(miss()).unwrap();
        session.abort().unwrap();

        assert_eq!(session.outcome(), Some(Outcome::Aborted));
        assert_eq!(session.history().len(), 1);
        assert!(session.submit_guess(miss()).is_err());
    }

    #[test]
    fn wrong_length_guess_is_rejected_without_recording() {
        let mut session = start();
        let result = session.submit_guess(Code::new(vec![Red, Blue]));
        assert!(matches!(result, Err(MastermindError::InvariantViolation(_))));
        assert!(session.history().is_empty());
        assert_eq!(session.attempts(), 0);
        assert_eq!(session.state(), &SessionState::Playing);
    }
}
