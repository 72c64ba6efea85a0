//! Codebreaker assistant
//!
//! Enumerates the code space, keeps the codes consistent with a session's
//! feedback and picks the next guess with a pluggable strategy.

mod candidates;
mod engine;
pub mod minimax;
pub mod strategy;

pub use candidates::{MAX_SOLVER_LENGTH, all_codes, is_consistent};
pub use engine::Solver;
pub use strategy::{FirstConsistentStrategy, MinimaxStrategy, Strategy, StrategyType};
