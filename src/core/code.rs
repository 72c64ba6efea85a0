//! Peg sequences
//!
//! A `Code` is both the codemaker's secret and each guess the player submits.

use super::Color;
use super::color::ParseColorError;
use std::fmt;
use std::str::FromStr;

/// An ordered sequence of peg colours
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code(Vec<Color>);

/// Error type for unparseable code text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCodeError {
    Empty,
    InvalidPeg { position: usize, source: ParseColorError },
}

impl fmt::Display for ParseCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Code must contain at least one colour"),
            Self::InvalidPeg { position, source } => {
                write!(f, "Peg {}: {source}", position + 1)
            }
        }
    }
}

impl std::error::Error for ParseCodeError {}

impl Code {
    #[must_use]
    pub const fn new(pegs: Vec<Color>) -> Self {
        Self(pegs)
    }

    #[inline]
    #[must_use]
    pub fn pegs(&self) -> &[Color] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.0.contains(&color)
    }

    /// Occurrences of each colour, indexed by [`Color::index`]
    #[must_use]
    pub fn color_counts(&self) -> [usize; Color::COUNT] {
        let mut counts = [0; Color::COUNT];
        for peg in &self.0 {
            counts[peg.index()] += 1;
        }
        counts
    }

    /// Render as space-separated abbreviations, e.g. `RD BL YL GN`
    #[must_use]
    pub fn to_abbreviations(&self) -> String {
        self.0
            .iter()
            .map(|c| c.abbreviation())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<Vec<Color>> for Code {
    fn from(pegs: Vec<Color>) -> Self {
        Self(pegs)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for peg in &self.0 {
            write!(f, "{}", peg.emoji())?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = ParseCodeError;

    /// Parse `"RD BL YL GN"`, `"rd,bl,yl,gn"`, `"red blue yellow green"` or the
    /// packed form `"RDBLYLGN"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens: Vec<String> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        if tokens.is_empty() {
            return Err(ParseCodeError::Empty);
        }

        // A single packed token is split into two-letter abbreviations
        if tokens.len() == 1 && tokens[0].parse::<Color>().is_err() {
            let chars: Vec<char> = tokens[0].chars().collect();
            if chars.len() > 2 && chars.len() % 2 == 0 {
                tokens = chars.chunks(2).map(|pair| pair.iter().collect()).collect();
            }
        }

        tokens
            .iter()
            .enumerate()
            .map(|(position, token)| {
                token
                    .parse::<Color>()
                    .map_err(|source| ParseCodeError::InvalidPeg { position, source })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::{Blue, Brown, Green, Red, Yellow};

    #[test]
    fn parses_separated_and_packed_forms() {
        let expected = Code::new(vec![Red, Blue, Yellow, Green]);
        assert_eq!("RD BL YL GN".parse::<Code>(), Ok(expected.clone()));
        assert_eq!("rd,bl, yl ,gn".parse::<Code>(), Ok(expected.clone()));
        assert_eq!("rdblylgn".parse::<Code>(), Ok(expected.clone()));
        assert_eq!("red blue yellow green".parse::<Code>(), Ok(expected));
    }

    #[test]
    fn single_full_name_is_not_split() {
        assert_eq!("brown".parse::<Code>(), Ok(Code::new(vec![Brown])));
    }

    #[test]
    fn reports_offending_peg() {
        let err = "RD XX GN".parse::<Code>().unwrap_err();
        assert!(matches!(err, ParseCodeError::InvalidPeg { position: 1, .. }));
        assert_eq!(err.to_string(), "Peg 2: Unknown colour 'XX', expected one of RD, BL, YL, GN, PR, BN");
        assert_eq!(" , ".parse::<Code>(), Err(ParseCodeError::Empty));
    }

    #[test]
    fn color_counts_tally_repeats() {
        let code = Code::new(vec![Red, Red, Blue, Red]);
        let counts = code.color_counts();
        assert_eq!(counts[Red.index()], 3);
        assert_eq!(counts[Blue.index()], 1);
        assert_eq!(counts.iter().sum::<usize>(), 4);
    }

    #[test]
    fn renders_abbreviations_and_glyphs() {
        let code = Code::new(vec![Green, Brown]);
        assert_eq!(code.to_abbreviations(), "GN BN");
        assert_eq!(code.to_string(), "🟢🟤");
    }
}
