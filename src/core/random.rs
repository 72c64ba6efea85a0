//! Deterministic random source
//!
//! A 32-bit linear congruential generator with the Numerical Recipes
//! constants. One instance is seeded per process and threaded through every
//! session, so replays continue the same stream instead of restarting it.

use super::MastermindError;

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;

/// Seeded LCG stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomSource {
    state: u32,
}

impl RandomSource {
    /// Create a source from an explicit seed. Zero is a valid seed.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Create a source seeded from the thread RNG
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Current internal state
    #[inline]
    #[must_use]
    pub const fn state(&self) -> u32 {
        self.state
    }

    /// Draw a value in the inclusive range `[min, max]`
    ///
    /// Advances the state as `s = 1664525 * s + 1013904223 (mod 2^32)` and
    /// returns `min + s % (max - min + 1)`.
    ///
    /// # Errors
    /// Returns `MastermindError::Range` if `max < min`; the state is left untouched.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::RandomSource;
    ///
    /// let mut rng = RandomSource::new(0);
    /// assert_eq!(rng.draw(0, 5).unwrap(), 1);
    /// assert_eq!(rng.state(), 1_013_904_223);
    /// ```
    pub fn draw(&mut self, min: u32, max: u32) -> Result<u32, MastermindError> {
        if max < min {
            return Err(MastermindError::Range { min, max });
        }

        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);

        // Widen so the full u32 range does not overflow the span
        let span = u64::from(max - min) + 1;
        Ok(min + (u64::from(self.state) % span) as u32)
    }
}
