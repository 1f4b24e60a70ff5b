//! History consistency invariant: the move log explains the board exactly.

use super::Invariant;
use crate::Game;
use crate::types::Square;

/// Invariant: each recorded move's square holds that move's player, and the
/// number of marked squares equals the number of recorded moves.
pub struct HistoryConsistentInvariant;

impl<P: PartialEq> Invariant<Game<P>> for HistoryConsistentInvariant {
    fn holds(game: &Game<P>) -> bool {
        let board = game.board();

        let matches_board = game.history().iter().all(|mov| {
            board.get(mov.position).and_then(Square::mark) == Some(&mov.player)
        });

        matches_board && board.marked_count() == game.history().len()
    }

    fn description() -> &'static str {
        "Move history matches the marks on the board"
    }
}
