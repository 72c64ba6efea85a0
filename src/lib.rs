//! Mastermind
//!
//! A code-breaking game: a seeded codemaker hides a sequence of coloured pegs
//! and the player has ten guesses to find it, scored by pegs in place and pegs
//! of the right colour.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, Color::*};
//! use mastermind::game::{Outcome, SessionRunner};
//!
//! let mut runner = SessionRunner::with_seed(0);
//! let mut session = runner.start_session(4, false).unwrap();
//!
//! let turn = session.submit_guess(Code::new(vec![Red, Blue, Yellow, Green])).unwrap();
//! println!("{} in place, {} colour only", turn.feedback.position_correct, turn.feedback.color_correct);
//!
//! session.abort().unwrap();
//! assert_eq!(session.outcome(), Some(Outcome::Aborted));
//! ```

// Core rule engine
pub mod core;

// Sessions and the runner that sequences them
pub mod game;

// Codebreaker assistant
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
