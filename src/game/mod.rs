//! Game sessions and the runner that sequences them

mod config;
mod runner;
mod session;

pub use config::{MAX_ATTEMPTS, MAX_CODE_LENGTH, MIN_CODE_LENGTH, SessionConfig};
pub use runner::{SessionRunner, Statistics};
pub use session::{GuessRecord, Outcome, Session, SessionState, TurnResult};
