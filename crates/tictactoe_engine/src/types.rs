//! Core domain types for tic-tac-toe: squares, the board, and positions.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: usize = 3;

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square<P> {
    /// Empty square.
    Empty,
    /// Square marked by a player.
    Occupied(P),
}

impl<P> Square<P> {
    /// Returns true if nobody has marked this square.
    pub fn is_empty(&self) -> bool {
        matches!(self, Square::Empty)
    }

    /// Returns the player holding this square, if any.
    pub fn mark(&self) -> Option<&P> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

impl<P> Default for Square<P> {
    fn default() -> Self {
        Square::Empty
    }
}

impl<P: fmt::Display> fmt::Display for Square<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Square::Empty => write!(f, "-"),
            Square::Occupied(player) => write!(f, "{}", player),
        }
    }
}

/// A `(row, column)` pair as supplied by a caller.
///
/// Positions are not range checked on construction. The engine rejects
/// anything outside the 3x3 grid when a move is attempted, so a `Position`
/// can always carry whatever the caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("({row}, {column})")]
pub struct Position {
    /// Row index, valid range 0..=2.
    pub row: usize,
    /// Column index, valid range 0..=2.
    pub column: usize,
}

/// The nine positions that exist on the board, row-major.
const VALID_POSITIONS: [Position; 9] = [
    Position::new(0, 0),
    Position::new(0, 1),
    Position::new(0, 2),
    Position::new(1, 0),
    Position::new(1, 1),
    Position::new(1, 2),
    Position::new(2, 0),
    Position::new(2, 1),
    Position::new(2, 2),
];

impl Position {
    /// Creates a position from a row and column.
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Returns true if this position is one of the nine board squares.
    pub fn is_valid(&self) -> bool {
        VALID_POSITIONS.contains(self)
    }

    /// All nine board positions in row-major order.
    pub fn all() -> &'static [Position; 9] {
        &VALID_POSITIONS
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

impl From<[usize; 2]> for Position {
    fn from([row, column]: [usize; 2]) -> Self {
        Self::new(row, column)
    }
}

/// A coordinate list that does not describe a board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Position out of range")]
pub struct PositionOutOfRange;

impl TryFrom<&[usize]> for Position {
    type Error = PositionOutOfRange;

    /// Parses a coordinate slice. Anything other than exactly two in-range
    /// coordinates is rejected.
    fn try_from(coordinates: &[usize]) -> Result<Self, Self::Error> {
        match coordinates {
            [row, column] => {
                let position = Position::new(*row, *column);
                if position.is_valid() {
                    Ok(position)
                } else {
                    Err(PositionOutOfRange)
                }
            }
            _ => Err(PositionOutOfRange),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board<P> {
    /// Squares indexed by `[row][column]`.
    squares: [[Square<P>; BOARD_SIZE]; BOARD_SIZE],
}

impl<P> Board<P> {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: std::array::from_fn(|_| std::array::from_fn(|_| Square::Empty)),
        }
    }

    /// Gets the square at the given position, or `None` if it is off the board.
    pub fn get(&self, position: Position) -> Option<&Square<P>> {
        self.squares
            .get(position.row)
            .and_then(|row| row.get(position.column))
    }

    /// Checks if the square at `position` exists and is empty.
    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position).is_some_and(Square::is_empty)
    }

    /// Returns true if every square is marked.
    pub fn is_full(&self) -> bool {
        crate::rules::is_full(self)
    }

    /// Returns all squares as rows.
    pub fn squares(&self) -> &[[Square<P>; BOARD_SIZE]; BOARD_SIZE] {
        &self.squares
    }

    /// Number of marked squares.
    pub fn marked_count(&self) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|square| !square.is_empty())
            .count()
    }

    /// Marks a square. Callers must have validated the position first.
    #[instrument(skip(self, player))]
    pub(crate) fn place(&mut self, position: Position, player: P) {
        debug_assert!(self.is_empty(position), "placing onto an unavailable square");
        self.squares[position.row][position.column] = Square::Occupied(player);
    }

    /// Replaces a square regardless of its contents.
    #[cfg(test)]
    pub(crate) fn overwrite(&mut self, position: Position, player: P) {
        self.squares[position.row][position.column] = Square::Occupied(player);
    }
}

impl<P> Default for Board<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: fmt::Display> fmt::Display for Board<P> {
    /// Renders three rows of `a | b | c` separated by `-----` lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.squares.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
                writeln!(f, "-----")?;
            }
            write!(f, "{} | {} | {}", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
