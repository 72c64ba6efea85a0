//! Guess scoring
//!
//! Feedback is the pair (pegs right colour and right place, pegs right colour
//! but wrong place). The colour count is taken over the colours of the secret
//! code and the exact matches are subtracted afterwards, so a peg that matches
//! in place is never counted twice.

use super::{Code, MastermindError};

/// Result of scoring one guess against the secret code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    pub position_correct: usize,
    pub color_correct: usize,
}

impl Feedback {
    #[must_use]
    pub const fn new(position_correct: usize, color_correct: usize) -> Self {
        Self {
            position_correct,
            color_correct,
        }
    }

    /// Score `guess` against `code`
    ///
    /// # Algorithm
    /// 1. Count indices where the pegs are equal
    /// 2. For each distinct colour in `code`, add the smaller of its count in
    ///    `code` and in `guess`
    /// 3. Subtract the exact matches from that total
    ///
    /// # Errors
    /// Returns `MastermindError::InvariantViolation` if the lengths differ.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Color::*, Feedback};
    ///
    /// let code = Code::new(vec![Red, Blue, Yellow, Green]);
    /// let guess = Code::new(vec![Red, Green, Blue, Purple]);
    /// assert_eq!(Feedback::score(&code, &guess).unwrap(), Feedback::new(1, 2));
    /// ```
    pub fn score(code: &Code, guess: &Code) -> Result<Self, MastermindError> {
        if code.len() != guess.len() {
            return Err(MastermindError::InvariantViolation(format!(
                "guess has {} pegs but the code has {}",
                guess.len(),
                code.len()
            )));
        }

        let position_correct = code
            .pegs()
            .iter()
            .zip(guess.pegs())
            .filter(|(c, g)| c == g)
            .count();

        let code_counts = code.color_counts();
        let guess_counts = guess.color_counts();
        let total_color_match: usize = code_counts
            .iter()
            .zip(guess_counts)
            .filter(|(in_code, _)| **in_code > 0)
            .map(|(in_code, in_guess)| (*in_code).min(in_guess))
            .sum();

        Ok(Self {
            position_correct,
            color_correct: total_color_match - position_correct,
        })
    }

    /// True when every peg of a code of `length` is in place
    #[inline]
    #[must_use]
    pub const fn is_solved(self, length: usize) -> bool {
        self.position_correct == length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color::{self, Blue, Brown, Green, Purple, Red, Yellow};

    fn code(pegs: &[Color]) -> Code {
        Code::new(pegs.to_vec())
    }

    #[test]
    fn identical_codes_score_all_in_place() {
        let secret = code(&[Red, Red, Brown, Green, Purple]);
        assert_eq!(
            Feedback::score(&secret, &secret).unwrap(),
            Feedback::new(5, 0)
        );
    }

    #[test]
    fn shifted_colours_count_as_colour_matches() {
        let secret = code(&[Red, Blue, Yellow, Green]);
        let guess = code(&[Red, Green, Blue, Purple]);
        assert_eq!(Feedback::score(&secret, &guess).unwrap(), Feedback::new(1, 2));
    }

    #[test]
    fn repeated_colours_are_not_double_counted() {
        let secret = code(&[Red, Red, Blue, Green]);
        let guess = code(&[Red, Blue, Red, Green]);
        assert_eq!(Feedback::score(&secret, &guess).unwrap(), Feedback::new(2, 2));
    }

    #[test]
    fn surplus_guess_repeats_are_capped_by_code() {
        let secret = code(&[Red, Blue, Yellow, Green]);
        let guess = code(&[Red, Red, Red, Red]);
        assert_eq!(Feedback::score(&secret, &guess).unwrap(), Feedback::new(1, 0));
    }

    #[test]
    fn disjoint_colours_score_nothing() {
        let secret = code(&[Red, Blue, Yellow, Green]);
        let guess = code(&[Purple, Brown, Purple, Brown]);
        assert_eq!(Feedback::score(&secret, &guess).unwrap(), Feedback::default());
    }

    #[test]
    fn full_permutation_is_all_colour_matches() {
        let secret = code(&[Red, Blue, Yellow, Green]);
        let guess = code(&[Green, Yellow, Blue, Red]);
        assert_eq!(Feedback::score(&secret, &guess).unwrap(), Feedback::new(0, 4));
    }

    #[test]
    fn length_mismatch_is_an_invariant_violation() {
        let secret = code(&[Red, Blue, Yellow, Green]);
        let guess = code(&[Red, Blue, Yellow]);
        assert!(matches!(
            Feedback::score(&secret, &guess),
            Err(MastermindError::InvariantViolation(_))
        ));
    }

    #[test]
    fn scores_respect_bounds_over_all_pairs() {
        let pegs = [Red, Blue, Red, Green, Brown, Red];
        let codes: Vec<Code> = (0..pegs.len())
            .map(|shift| code(&[pegs[shift], pegs[(shift + 1) % 6], pegs[(shift + 3) % 6], pegs[(shift + 4) % 6]]))
            .collect();

        for secret in &codes {
            for guess in &codes {
                let fb = Feedback::score(secret, guess).unwrap();
                assert!(fb.position_correct + fb.color_correct <= secret.len());
                // Scoring is symmetric in its two arguments
                assert_eq!(fb, Feedback::score(guess, secret).unwrap());
            }
        }
    }

    #[test]
    fn solved_only_when_every_peg_in_place() {
        assert!(Feedback::new(4, 0).is_solved(4));
        assert!(!Feedback::new(3, 1).is_solved(4));
    }
}
