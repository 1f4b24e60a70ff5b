//! Drives a [`MatchScript`] through the engine and collects what happened.

use crate::script::MatchScript;
use derive_getters::Getters;
use std::fmt;
use tictactoe_engine::{Game, GameStatus, MoveOutcome, Position};
use tracing::{info, instrument, warn};

/// A scripted move the engine refused.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Rejection {
    /// Index of the move in the script.
    index: usize,
    /// Who attempted it.
    player: String,
    /// Where.
    position: Position,
    /// The engine's reason.
    reason: String,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "move {}: {} at {} rejected: {}",
            self.index + 1,
            self.player,
            self.position,
            self.reason
        )
    }
}

/// Result of replaying a script.
#[derive(Debug, Clone, Getters)]
pub struct MatchReport {
    /// Final game state.
    game: Game<String>,
    /// The outcome of the last accepted move, if any move was accepted.
    last_outcome: Option<MoveOutcome<String>>,
    /// Moves the engine rejected, in script order.
    rejections: Vec<Rejection>,
}

impl MatchReport {
    /// One-line summary of how the match ended.
    pub fn summary(&self) -> String {
        match &self.last_outcome {
            Some(outcome) if outcome.is_game_over() => outcome.to_string(),
            _ => match self.game.next_turn() {
                Some(next) => format!("Unfinished: {} moves next", next),
                None => self.game.status().to_string(),
            },
        }
    }

    /// Final game phase.
    pub fn status(&self) -> GameStatus<String> {
        self.game.status()
    }
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.game.board())?;
        for rejection in &self.rejections {
            writeln!(f, "{}", rejection)?;
        }
        write!(f, "{}", self.summary())
    }
}

/// Replays every scripted move in order.
///
/// Rejected moves leave the game untouched, so replay carries on with the
/// next scripted move.
#[instrument(skip(script), fields(player1 = %script.player1(), player2 = %script.player2()))]
pub fn run(script: &MatchScript) -> MatchReport {
    let mut game = Game::new(script.player1().clone(), script.player2().clone());
    let mut last_outcome = None;
    let mut rejections = Vec::new();

    for (index, scripted) in script.moves().iter().enumerate() {
        let action = scripted.to_move();
        let position = action.position();
        match game.apply(action) {
            Ok(outcome) => {
                info!(index, player = %scripted.player(), %position, %outcome, "Move accepted");
                last_outcome = Some(outcome);
            }
            Err(err) => {
                warn!(index, player = %scripted.player(), %position, %err, "Move rejected");
                rejections.push(Rejection {
                    index,
                    player: scripted.player().clone(),
                    position,
                    reason: err.to_string(),
                });
            }
        }
    }

    info!(status = %game.status(), rejected = rejections.len(), "Replay finished");
    MatchReport {
        game,
        last_outcome,
        rejections,
    }
}
