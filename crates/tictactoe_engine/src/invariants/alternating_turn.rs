//! Alternating turn invariant: player1, player2, player1, ...

use super::Invariant;
use crate::Game;

/// Invariant: moves alternate starting with player1, and while the game is
/// ongoing `next_turn` is whoever the history says is due.
pub struct AlternatingTurnInvariant;

impl<P: PartialEq> Invariant<Game<P>> for AlternatingTurnInvariant {
    fn holds(game: &Game<P>) -> bool {
        let expected = |index: usize| {
            if index % 2 == 0 {
                game.player1()
            } else {
                game.player2()
            }
        };

        let alternates = game
            .history()
            .iter()
            .enumerate()
            .all(|(index, mov)| mov.player == *expected(index));
        if !alternates {
            return false;
        }

        match game.next_turn() {
            Some(next) => *next == *expected(game.history().len()),
            None => true,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns starting with player1"
    }
}
