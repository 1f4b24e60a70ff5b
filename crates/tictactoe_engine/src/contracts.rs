//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} action {Q}`. Preconditions are the rule checks, run in a fixed order
//! so the first failing rule decides the error. Postconditions re-check the
//! game invariants after a move has been applied.

use crate::action::{Move, MoveError};
use crate::game::Game;
use crate::invariants::{InvariantSet, TicTacToeInvariants};
use crate::types::{Position, Square};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Error reported when a condition fails.
    type Error;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Error>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Self::Error>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: nobody has won and the board still has room.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with `Game is over` on a terminal game.
    pub fn check<P>(game: &Game<P>) -> Result<(), MoveError<P>> {
        if game.winner().is_some() || game.board().is_full() {
            Err(MoveError::GameIsOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with `<next> moves next` when someone else is due.
    pub fn check<P: Clone + PartialEq>(mov: &Move<P>, game: &Game<P>) -> Result<(), MoveError<P>> {
        match game.next_turn() {
            Some(next) if *next == mov.player => Ok(()),
            Some(next) => Err(MoveError::NotYourTurn { next: next.clone() }),
            // Only reachable on a terminal game; GameNotOver normally runs first.
            None => Err(MoveError::GameIsOver),
        }
    }
}

/// Precondition: the position is one of the nine squares.
pub struct PositionInRange;

impl PositionInRange {
    /// Fails with `Position out of range` for anything off the grid.
    pub fn check<P>(mov: &Move<P>) -> Result<(), MoveError<P>> {
        if mov.position.is_valid() {
            Ok(())
        } else {
            Err(MoveError::OutOfRange)
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct PositionIsEmpty;

impl PositionIsEmpty {
    /// Fails with `Position already taken` on a marked square.
    pub fn check<P>(mov: &Move<P>, game: &Game<P>) -> Result<(), MoveError<P>> {
        if game.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::PositionTaken {
                position: mov.position,
            })
        }
    }
}

/// Composite precondition, applied in rule order.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    pub fn check<P: Clone + PartialEq>(mov: &Move<P>, game: &Game<P>) -> Result<(), MoveError<P>> {
        GameNotOver::check(game)?;
        PlayersTurn::check(mov, game)?;
        PositionInRange::check(mov)?;
        PositionIsEmpty::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions: see [`LegalMove`].
///
/// Postconditions:
/// - every square marked before the move still holds the same mark
/// - all [`TicTacToeInvariants`] hold on the new state
pub struct MoveContract;

impl<P: Clone + PartialEq> Contract<Game<P>, Move<P>> for MoveContract {
    type Error = MoveError<P>;

    fn pre(game: &Game<P>, action: &Move<P>) -> Result<(), MoveError<P>> {
        LegalMove::check(action, game)
    }

    #[instrument(skip_all)]
    fn post(before: &Game<P>, after: &Game<P>) -> Result<(), MoveError<P>> {
        if !marks_preserved(before, after) {
            warn!("Marked square changed between states");
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: a marked square was overwritten".to_string(),
            ));
        }

        TicTacToeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant check failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

/// Every square marked in `before` is marked identically in `after`.
fn marks_preserved<P: PartialEq>(before: &Game<P>, after: &Game<P>) -> bool {
    Position::all().iter().all(|pos| match before.board().get(*pos) {
        Some(Square::Occupied(mark)) => after.board().get(*pos).and_then(Square::mark) == Some(mark),
        _ => true,
    })
}
