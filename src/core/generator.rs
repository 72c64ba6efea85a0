//! Secret code generation

use super::{Code, Color, MastermindError, RandomSource};

/// Generate a secret code of `length` pegs
///
/// Each peg is a colour index drawn from `rng`. Without repeats, draws of a
/// colour already in the code are discarded until `length` distinct colours
/// are collected.
///
/// # Errors
/// Returns `MastermindError::Configuration` if repeats are disallowed and
/// `length` exceeds the number of colours, since no such code exists.
///
/// # Examples
/// ```
/// use mastermind::core::{generate, Color::*, RandomSource};
///
/// let mut rng = RandomSource::new(0);
/// let code = generate(&mut rng, 4, false).unwrap();
/// assert_eq!(code.pegs(), &[Blue, Yellow, Red, Brown]);
/// ```
pub fn generate(
    rng: &mut RandomSource,
    length: usize,
    repeat_allowed: bool,
) -> Result<Code, MastermindError> {
    if !repeat_allowed && length > Color::COUNT {
        return Err(MastermindError::Configuration {
            length,
            repeat_allowed,
        });
    }

    let max_index = (Color::COUNT - 1) as u32;
    let mut pegs = Vec::new();
    let mut draws = 0usize;

    while pegs.len() < length {
        let index = rng.draw(0, max_index)? as usize;
        draws += 1;
        let color = Color::from_index(index).ok_or_else(|| {
            MastermindError::InvariantViolation(format!("drew colour index {index}"))
        })?;

        if repeat_allowed || !pegs.contains(&color) {
            pegs.push(color);
        } else {
            log::trace!("rejected repeated {color} at draw {draws}");
        }
    }

    log::debug!("generated {length}-peg code in {draws} draws (repeats: {repeat_allowed})");
    Ok(Code::new(pegs))
}
