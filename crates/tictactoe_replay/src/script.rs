//! Match scripts: a scripted tic-tac-toe match loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::{Move, Position};
use tracing::{debug, info, instrument};

/// A match to replay: the two players and the moves they attempt, in order.
///
/// ```toml
/// player1 = "alice"
/// player2 = "bob"
///
/// [[moves]]
/// player = "alice"
/// row = 1
/// column = 1
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchScript {
    /// Player who moves first.
    player1: String,

    /// Player who moves second.
    player2: String,

    /// Attempted moves. Illegal ones are allowed and get reported.
    #[serde(default)]
    moves: Vec<ScriptedMove>,
}

/// One attempted move in a script.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ScriptedMove {
    /// Who attempts the move.
    player: String,

    /// Target row.
    row: usize,

    /// Target column.
    column: usize,
}

impl ScriptedMove {
    /// Creates a scripted move.
    pub fn new(player: impl Into<String>, row: usize, column: usize) -> Self {
        Self {
            player: player.into(),
            row,
            column,
        }
    }

    /// Converts into an engine move.
    pub fn to_move(&self) -> Move<String> {
        Move::new(self.player.clone(), Position::new(self.row, self.column))
    }
}

impl MatchScript {
    /// Creates a script in code.
    pub fn new(player1: impl Into<String>, player2: impl Into<String>, moves: Vec<ScriptedMove>) -> Self {
        Self {
            player1: player1.into(),
            player2: player2.into(),
            moves,
        }
    }

    /// Parses a script from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let script: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse match script: {}", e)))?;

        debug!(
            player1 = %script.player1,
            player2 = %script.player2,
            moves = script.moves.len(),
            "Match script parsed"
        );
        Ok(script)
    }

    /// Loads a script from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading match script");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read match script: {}", e)))?;

        let script = Self::from_toml(&content)?;
        info!(moves = script.moves.len(), "Match script loaded");
        Ok(script)
    }
}

/// Script loading error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
