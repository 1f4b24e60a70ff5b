//! Tic-tac-toe rules engine.
//!
//! A self-contained state machine for a two-player game on a fixed 3x3 grid:
//! move validation, win and tie detection, turn management, and a plain-text
//! rendering of the board.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, MoveError, MoveOutcome};
//!
//! let mut game = Game::new("alice", "bob");
//! assert_eq!(
//!     game.make_move(&"alice", (1, 1)),
//!     Ok(MoveOutcome::Continue { next: "bob" })
//! );
//! assert_eq!(
//!     game.make_move(&"alice", (0, 0)),
//!     Err(MoveError::NotYourTurn { next: "bob" })
//! );
//! ```
//!
//! A game is owned by one caller. Callers sharing a game across threads must
//! serialize moves themselves, e.g. behind a `Mutex`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod invariants;
mod rules;
mod types;

pub use action::{Move, MoveError, MoveOutcome};
pub use contracts::{
    Contract, GameNotOver, LegalMove, MoveContract, PlayersTurn, PositionInRange, PositionIsEmpty,
};
pub use game::{
    Game, GameStatus, SnapshotError, get_board_as_string, get_next_turn, get_winner, make_move,
    start_new_game,
};
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, TerminalStateInvariant, TicTacToeInvariants,
};
pub use rules::{Line, has_won, is_full, winning_line};
pub use types::{BOARD_SIZE, Board, Position, PositionOutOfRange, Square};
