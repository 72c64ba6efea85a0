//! Score command
//!
//! Scores a single guess against a given code without starting a session.

use crate::core::{Code, Feedback};
use anyhow::{Context, Result};

/// Result of scoring one guess
#[derive(Debug)]
pub struct ScoreResult {
    pub code: Code,
    pub guess: Code,
    pub feedback: Feedback,
}

/// Parse both codes and score `guess` against `code`
///
/// # Errors
///
/// Returns an error if either text is not a valid code or the lengths differ.
pub fn score_codes(code: &str, guess: &str) -> Result<ScoreResult> {
    let code: Code = code
        .parse()
        .with_context(|| format!("Invalid code '{code}'"))?;
    let guess: Code = guess
        .parse()
        .with_context(|| format!("Invalid guess '{guess}'"))?;
    let feedback = Feedback::score(&code, &guess)?;

    Ok(ScoreResult {
        code,
        guess,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_textual_codes() {
        let result = score_codes("RD RD BL GN", "rdblrdgn").unwrap();
        assert_eq!(result.feedback, Feedback::new(2, 2));
        assert_eq!(result.code.len(), 4);
    }

    #[test]
    fn invalid_text_is_reported() {
        let err = score_codes("RD XX BL GN", "RD RD BL GN").unwrap_err();
        assert!(err.to_string().contains("Invalid code"));
    }

    #[test]
    fn length_mismatch_is_reported() {
        let err = score_codes("RD RD BL GN", "RD RD BL").unwrap_err();
        assert!(err.to_string().contains("invariant violated"));
    }
}
