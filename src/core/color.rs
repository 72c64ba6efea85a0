//! Peg colours
//!
//! The six colours of the game in a fixed index order. The index is what the
//! codemaker draws; abbreviations and glyphs only matter to the front ends.

use std::fmt;
use std::str::FromStr;

/// A single peg colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Yellow,
    Green,
    Purple,
    Brown,
}

/// Error type for unrecognised colour text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    Empty,
    Unknown(String),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "No colour given"),
            Self::Unknown(text) => write!(
                f,
                "Unknown colour '{text}', expected one of RD, BL, YL, GN, PR, BN"
            ),
        }
    }
}

impl std::error::Error for ParseColorError {}

impl Color {
    /// Number of distinct colours
    pub const COUNT: usize = 6;

    /// All colours in draw-index order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Red,
        Self::Blue,
        Self::Yellow,
        Self::Green,
        Self::Purple,
        Self::Brown,
    ];

    /// Colour for a draw index in `0..COUNT`
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Position of this colour in [`Color::ALL`]
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Two-letter abbreviation typed by the player
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Red => "RD",
            Self::Blue => "BL",
            Self::Yellow => "YL",
            Self::Green => "GN",
            Self::Purple => "PR",
            Self::Brown => "BN",
        }
    }

    /// Single key used by the terminal UI
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Self::Red => 'r',
            Self::Blue => 'b',
            Self::Yellow => 'y',
            Self::Green => 'g',
            Self::Purple => 'p',
            Self::Brown => 'n',
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Blue => "Blue",
            Self::Yellow => "Yellow",
            Self::Green => "Green",
            Self::Purple => "Purple",
            Self::Brown => "Brown",
        }
    }

    /// Round peg glyph
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Red => '🔴',
            Self::Blue => '🔵',
            Self::Yellow => '🟡',
            Self::Green => '🟢',
            Self::Purple => '🟣',
            Self::Brown => '🟤',
        }
    }

    /// Colour for a terminal UI key (`1`-`6` or the colour initial)
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        if let Some(digit) = key.to_digit(10) {
            return (digit as usize).checked_sub(1).and_then(Self::from_index);
        }
        let key = key.to_ascii_lowercase();
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts the abbreviation or the full name, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseColorError::Empty);
        }

        Self::ALL
            .into_iter()
            .find(|c| {
                trimmed.eq_ignore_ascii_case(c.abbreviation())
                    || trimmed.eq_ignore_ascii_case(c.name())
            })
            .ok_or_else(|| ParseColorError::Unknown(trimmed.to_string()))
    }
}
