//! Per-session configuration

use crate::core::{Color, MastermindError};

/// Shortest code a session accepts
pub const MIN_CODE_LENGTH: usize = 4;

/// Longest code a session accepts
pub const MAX_CODE_LENGTH: usize = 12;

/// Guesses allowed before the session is lost
pub const MAX_ATTEMPTS: usize = 10;

/// Settings fixed for the lifetime of one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub length: usize,
    pub repeat_allowed: bool,
    pub max_attempts: usize,
}

impl SessionConfig {
    /// Validate a length / repeat combination as given
    ///
    /// # Errors
    /// Returns `MastermindError::Configuration` if `length` is outside
    /// [`MIN_CODE_LENGTH`]..=[`MAX_CODE_LENGTH`], or above the colour count
    /// without repeats.
    pub fn new(length: usize, repeat_allowed: bool) -> Result<Self, MastermindError> {
        if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&length)
            || (!repeat_allowed && length > Color::COUNT)
        {
            return Err(MastermindError::Configuration {
                length,
                repeat_allowed,
            });
        }

        Ok(Self {
            length,
            repeat_allowed,
            max_attempts: MAX_ATTEMPTS,
        })
    }

    /// Build a config the way the front ends do: codes longer than the colour
    /// count always allow repeats
    ///
    /// Returns the config and whether repeats were forced on.
    ///
    /// # Errors
    /// Returns `MastermindError::Configuration` if `length` is outside
    /// [`MIN_CODE_LENGTH`]..=[`MAX_CODE_LENGTH`].
    pub fn with_repeat_policy(
        length: usize,
        repeat_requested: bool,
    ) -> Result<(Self, bool), MastermindError> {
        let forced = Self::forces_repeats(length) && !repeat_requested;
        let config = Self::new(length, repeat_requested || forced)?;
        Ok((config, forced))
    }

    /// True when a code of `length` cannot be built from distinct colours
    #[must_use]
    pub const fn forces_repeats(length: usize) -> bool {
        length > Color::COUNT
    }
}
