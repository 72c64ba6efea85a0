//! Codebreaker assistant

use super::candidates::{all_codes, is_consistent};
use super::strategy::Strategy;
use crate::core::{Code, MastermindError};
use crate::game::GuessRecord;

/// Suggests guesses for a session from its history
///
/// Holds the full code space for one length / repeat setting.
pub struct Solver<S: Strategy> {
    strategy: S,
    universe: Vec<Code>,
}

impl<S: Strategy> Solver<S> {
    /// Create a solver for codes of `length` pegs
    ///
    /// # Errors
    /// Returns `MastermindError::Configuration` if the code space cannot be enumerated.
    pub fn new(strategy: S, length: usize, repeat_allowed: bool) -> Result<Self, MastermindError> {
        let universe = all_codes(length, repeat_allowed)?;
        log::debug!("solver enumerated {} codes", universe.len());
        Ok(Self { strategy, universe })
    }

    /// Best next guess given the scored guesses so far
    ///
    /// Returns `None` if no code is consistent with the history.
    #[must_use]
    pub fn next_guess(&self, history: &[GuessRecord]) -> Option<&Code> {
        let candidates = self.candidates(history);
        self.strategy.select_guess(&self.universe, &candidates)
    }

    /// Codes that would have produced every feedback in `history`
    #[must_use]
    pub fn candidates(&self, history: &[GuessRecord]) -> Vec<&Code> {
        self.universe
            .iter()
            .filter(|code| is_consistent(code, history))
            .collect()
    }

    #[must_use]
    pub fn count_candidates(&self, history: &[GuessRecord]) -> usize {
        self.universe
            .iter()
            .filter(|code| is_consistent(code, history))
            .count()
    }

    /// Size of the full code space
    #[must_use]
    pub fn universe_size(&self) -> usize {
        self.universe.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color::{Blue, Brown, Red, Yellow};
    use crate::core::RandomSource;
    use crate::game::{Outcome, Session, SessionConfig};
    use crate::solver::{FirstConsistentStrategy, MinimaxStrategy, StrategyType};

    fn play<S: Strategy>(solver: &Solver<S>, session: &mut Session) -> Outcome {
        while !session.is_over() {
            let guess = solver.next_guess(session.history()).unwrap().clone();
            session.submit_guess(guess).unwrap();
        }
        session.outcome().unwrap()
    }

    #[test]
    fn minimax_solves_four_pegs_within_five() {
        let solver = Solver::new(MinimaxStrategy::default(), 4, true).unwrap();
        let mut rng = RandomSource::new(2024);

        for _ in 0..5 {
            let mut session = Session::start(SessionConfig::new(4, true).unwrap(), &mut rng).unwrap();
            match play(&solver, &mut session) {
                Outcome::Won(attempts) => assert!(attempts <= 5, "took {attempts}"),
                other => panic!("unexpected outcome {other:?}"),
            }
        }
    }

    #[test]
    fn consistent_solver_wins_unique_codes() {
        let solver = Solver::new(FirstConsistentStrategy, 4, false).unwrap();
        let mut session =
            Session::start(SessionConfig::new(4, false).unwrap(), &mut RandomSource::new(0))
                .unwrap();

        assert!(matches!(play(&solver, &mut session), Outcome::Won(_)));
        let last = session.history().last().unwrap();
        assert_eq!(last.guess.pegs(), &[Blue, Yellow, Red, Brown]);
    }

    #[test]
    fn candidates_shrink_with_history() {
        let solver = Solver::new(StrategyType::from_name("minimax"), 4, true).unwrap();
        assert_eq!(solver.count_candidates(&[]), solver.universe_size());

        let mut session =
            Session::start(SessionConfig::new(4, true).unwrap(), &mut RandomSource::new(9))
                .unwrap();
        let opening = solver.next_guess(&[]).unwrap().clone();
        session.submit_guess(opening).unwrap();

        let remaining = solver.count_candidates(session.history());
        assert!(remaining <= 256);
        assert_eq!(remaining, solver.candidates(session.history()).len());
    }

    #[test]
    fn contradictory_history_has_no_guess() {
        use crate::core::Feedback;

        let solver = Solver::new(FirstConsistentStrategy, 4, false).unwrap();
        // The same guess cannot score both all-in-place and nothing
        let guess = Code::new(vec![Red, Blue, Yellow, Brown]);
        let history = vec![
            GuessRecord { guess: guess.clone(), feedback: Feedback::new(4, 0) },
            GuessRecord { guess, feedback: Feedback::new(0, 0) },
        ];
        assert!(solver.next_guess(&history).is_none());
    }

    #[test]
    fn oversized_space_is_rejected() {
        assert!(Solver::new(FirstConsistentStrategy, 8, true).is_err());
    }
}
