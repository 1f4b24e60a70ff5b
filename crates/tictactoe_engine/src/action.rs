//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They carry the player's intent
//! and are validated independently of execution. A committed move reports
//! how the game continues through [`MoveOutcome`]; a rejected move reports
//! why through [`MoveError`].

use crate::types::{Position, PositionOutOfRange};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move<P> {
    /// The player making the move.
    pub player: P,
    /// The position where the player places their mark.
    pub position: Position,
}

impl<P> Move<P> {
    /// Creates a new move.
    pub fn new(player: P, position: impl Into<Position>) -> Self {
        Self {
            player,
            position: position.into(),
        }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> &P {
        &self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl<P: fmt::Display> fmt::Display for Move<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// An illegal move. The game is left untouched and the caller may retry.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError<P> {
    /// The game already has a winner or the board is full.
    #[display("Game is over")]
    GameIsOver,

    /// Someone other than the expected player tried to move.
    #[display("{next} moves next")]
    NotYourTurn {
        /// The player whose turn it actually is.
        next: P,
    },

    /// The position is not one of the nine board squares.
    #[display("Position out of range")]
    OutOfRange,

    /// The target square already holds a mark.
    #[display("Position already taken")]
    PositionTaken {
        /// The occupied position.
        position: Position,
    },

    /// A postcondition failed after a move was applied.
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl<P> MoveError<P> {
    /// Returns true for ordinary rule violations, false for engine defects.
    pub fn is_invalid_movement(&self) -> bool {
        !matches!(self, MoveError::InvariantViolation(_))
    }
}

impl<P: fmt::Debug + fmt::Display> std::error::Error for MoveError<P> {}

impl<P> From<PositionOutOfRange> for MoveError<P> {
    fn from(_: PositionOutOfRange) -> Self {
        MoveError::OutOfRange
    }
}

/// The result of a legal move.
///
/// `Won` and `Tied` are the game-over notifications: the move has already
/// been committed when they are returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveOutcome<P> {
    /// The game goes on with `next` to move.
    #[display("{next} moves next")]
    Continue {
        /// The player who moves next.
        next: P,
    },

    /// The mover completed a line.
    #[display("{winner} wins!")]
    Won {
        /// The player who won.
        winner: P,
    },

    /// The board filled up without a winner.
    #[display("Game is tied!")]
    Tied,
}

impl<P> MoveOutcome<P> {
    /// Returns true if this move ended the game.
    pub fn is_game_over(&self) -> bool {
        !matches!(self, MoveOutcome::Continue { .. })
    }

    /// Returns the winner, if this move won the game.
    pub fn winner(&self) -> Option<&P> {
        match self {
            MoveOutcome::Won { winner } => Some(winner),
            _ => None,
        }
    }
}
