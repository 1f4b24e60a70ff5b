//! Tie detection for tic-tac-toe.

use crate::Board;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner is a tie.
pub fn is_full<P>(board: &Board<P>) -> bool {
    board.squares().iter().flatten().all(|s| !s.is_empty())
}
