//! Contract violations raised by the rule engine
//!
//! Every variant signals a caller bug rather than bad player input: the console
//! and terminal front ends re-prompt for malformed text before calling in.

use std::fmt;

/// Error type for the game core
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MastermindError {
    /// A random draw was requested with `max < min`
    Range { min: u32, max: u32 },
    /// A code length / repeat combination that cannot be generated
    Configuration { length: usize, repeat_allowed: bool },
    /// An internal contract was broken (guess length, finished session, ...)
    InvariantViolation(String),
}

impl fmt::Display for MastermindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range { min, max } => {
                write!(f, "invalid draw range: max {max} is below min {min}")
            }
            Self::Configuration {
                length,
                repeat_allowed,
            } => {
                if *length < crate::game::MIN_CODE_LENGTH {
                    write!(
                        f,
                        "code length {length} is below the minimum of {}",
                        crate::game::MIN_CODE_LENGTH
                    )
                } else if *length > crate::game::MAX_CODE_LENGTH {
                    write!(
                        f,
                        "code length {length} is above the maximum of {}",
                        crate::game::MAX_CODE_LENGTH
                    )
                } else {
                    write!(
                        f,
                        "cannot build a code of length {length} with repeats {} from {} colours",
                        if *repeat_allowed { "allowed" } else { "disallowed" },
                        super::Color::COUNT
                    )
                }
            }
            Self::InvariantViolation(reason) => write!(f, "invariant violated: {reason}"),
        }
    }
}

impl std::error::Error for MastermindError {}
