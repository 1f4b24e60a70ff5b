//! Win detection logic for tic-tac-toe.

use crate::{Board, Position};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// One of the eight winning combinations.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Line {
    /// Row 0.
    TopRow,
    /// Row 1.
    MiddleRow,
    /// Row 2.
    BottomRow,
    /// Column 0.
    LeftColumn,
    /// Column 1.
    CenterColumn,
    /// Column 2.
    RightColumn,
    /// (0, 0) to (2, 2).
    MainDiagonal,
    /// (2, 0) to (0, 2).
    AntiDiagonal,
}

impl Line {
    /// The three positions making up this line.
    pub const fn positions(self) -> [Position; 3] {
        match self {
            Line::TopRow => [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
            Line::MiddleRow => [Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)],
            Line::BottomRow => [Position::new(2, 0), Position::new(2, 1), Position::new(2, 2)],
            Line::LeftColumn => [Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)],
            Line::CenterColumn => [Position::new(0, 1), Position::new(1, 1), Position::new(2, 1)],
            Line::RightColumn => [Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)],
            Line::MainDiagonal => [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)],
            Line::AntiDiagonal => [Position::new(2, 0), Position::new(1, 1), Position::new(0, 2)],
        }
    }

    /// Returns true if `player` holds all three squares of this line.
    pub fn is_held_by<P: PartialEq>(self, board: &Board<P>, player: &P) -> bool {
        self.positions()
            .iter()
            .all(|pos| board.get(*pos).and_then(|sq| sq.mark()) == Some(player))
    }
}

/// Returns the first line completed by `player`, if any.
pub fn winning_line<P: PartialEq>(board: &Board<P>, player: &P) -> Option<Line> {
    Line::iter().find(|line| line.is_held_by(board, player))
}

/// Checks whether `player` has three in a row.
pub fn has_won<P: PartialEq>(board: &Board<P>, player: &P) -> bool {
    winning_line(board, player).is_some()
}
