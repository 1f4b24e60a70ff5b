//! Replays scripted tic-tac-toe matches through `tictactoe_engine`.
//!
//! A match script names two players and a list of attempted moves. Each move
//! is fed to the engine in order; accepted and rejected moves are logged and
//! collected into a [`MatchReport`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod runner;
mod script;

pub use runner::{MatchReport, Rejection, run};
pub use script::{ConfigError, MatchScript, ScriptedMove};
