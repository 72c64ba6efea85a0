//! Formatting utilities for terminal output

use crate::core::{Code, Feedback};
use crate::game::GuessRecord;

/// Square per peg in the right place
pub const POSITION_MARK: char = '■';
/// Square per peg of the right colour in the wrong place
pub const COLOR_MARK: char = '□';

const PEG_WIDTH: usize = 5;
const COLUMN_WIDTH: usize = 20;

/// Format a code as centred peg glyphs
#[must_use]
pub fn code_pegs(code: &Code) -> String {
    code.pegs()
        .iter()
        .map(|peg| format!("{:^PEG_WIDTH$}", peg.emoji()))
        .collect()
}

/// Feedback as (position squares, colour squares)
#[must_use]
pub fn feedback_marks(feedback: Feedback) -> (String, String) {
    (
        POSITION_MARK.to_string().repeat(feedback.position_correct),
        COLOR_MARK.to_string().repeat(feedback.color_correct),
    )
}

/// Render the guess history as a table, header first
#[must_use]
pub fn board_lines(history: &[GuessRecord], length: usize) -> Vec<String> {
    let guess_width = length * (PEG_WIDTH + 1);
    let mut lines = Vec::with_capacity(history.len() + 1);
    lines.push(format!(
        "|{:^guess_width$}|{:^COLUMN_WIDTH$}|{:^COLUMN_WIDTH$}|",
        "Guess", "Correct Position", "Correct Colour"
    ));

    for record in history {
        let (position, color) = feedback_marks(record.feedback);
        lines.push(format!(
            "|{:<guess_width$}|{position:^COLUMN_WIDTH$}|{color:^COLUMN_WIDTH$}|",
            code_pegs(&record.guess)
        ));
    }

    lines
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
