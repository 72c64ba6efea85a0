//! Code space enumeration and consistency filtering

use crate::core::{Code, Color, Feedback, MastermindError};
use crate::game::GuessRecord;

/// Longest code the solver will enumerate (6^7 codes)
pub const MAX_SOLVER_LENGTH: usize = 7;

/// Every code of `length` pegs in lexicographic colour-index order
///
/// # Errors
/// Returns `MastermindError::Configuration` if the space is too large to
/// enumerate or cannot exist without repeats.
pub fn all_codes(length: usize, repeat_allowed: bool) -> Result<Vec<Code>, MastermindError> {
    if length > MAX_SOLVER_LENGTH || (!repeat_allowed && length > Color::COUNT) {
        return Err(MastermindError::Configuration {
            length,
            repeat_allowed,
        });
    }

    let mut codes: Vec<Vec<Color>> = vec![Vec::with_capacity(length)];
    for _ in 0..length {
        let mut extended = Vec::with_capacity(codes.len() * Color::COUNT);
        for prefix in &codes {
            for color in Color::ALL {
                if repeat_allowed || !prefix.contains(&color) {
                    let mut next = prefix.clone();
                    next.push(color);
                    extended.push(next);
                }
            }
        }
        codes = extended;
    }

    Ok(codes.into_iter().map(Code::new).collect())
}

/// True if `candidate` as the secret would have produced every recorded feedback
#[must_use]
pub fn is_consistent(candidate: &Code, history: &[GuessRecord]) -> bool {
    history.iter().all(|record| {
        Feedback::score(candidate, &record.guess).is_ok_and(|fb| fb == record.feedback)
    })
}
