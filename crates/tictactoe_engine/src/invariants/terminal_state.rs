//! Terminal state invariant: the turn is cleared exactly when the game ends.

use super::Invariant;
use crate::Game;
use crate::rules;

/// Invariant: `next_turn` is none if and only if the game is won or tied,
/// and a recorded winner really holds a line.
pub struct TerminalStateInvariant;

impl<P: PartialEq> Invariant<Game<P>> for TerminalStateInvariant {
    fn holds(game: &Game<P>) -> bool {
        let board = game.board();

        if let Some(winner) = game.winner()
            && !rules::has_won(board, winner)
        {
            return false;
        }

        let terminal = game.winner().is_some() || board.is_full();
        terminal == game.next_turn().is_none()
    }

    fn description() -> &'static str {
        "Turn is cleared exactly when the game is won or tied"
    }
}
