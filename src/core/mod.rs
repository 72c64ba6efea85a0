//! Core rule engine for Mastermind
//!
//! This module contains the colour alphabet, codes, the feedback scorer, the
//! deterministic random source and the code generator. Nothing here performs
//! I/O; every contract violation is reported as a `MastermindError`.

mod code;
mod color;
mod error;
mod feedback;
mod generator;
mod random;

pub use code::{Code, ParseCodeError};
pub use color::{Color, ParseColorError};
pub use error::MastermindError;
pub use feedback::Feedback;
pub use generator::generate;
pub use random::RandomSource;
