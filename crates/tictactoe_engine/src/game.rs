//! The tic-tac-toe game engine.
//!
//! [`Game`] holds the full state of one match and is mutated in place by
//! [`Game::make_move`]. The state machine is implicit in its fields:
//!
//! - ongoing: `next_turn` is set, `winner` is not
//! - won: `winner` is set, `next_turn` is cleared
//! - tied: the board is full, neither field is set
//!
//! Won and tied are terminal. Every move on a terminal game fails with
//! [`MoveError::GameIsOver`].

use crate::action::{Move, MoveError, MoveOutcome};
use crate::contracts::{Contract, MoveContract};
use crate::invariants::{InvariantSet, TicTacToeInvariants};
use crate::rules;
use crate::types::{Board, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, instrument, warn};

/// Where a game stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus<P> {
    /// Moves are still being accepted.
    #[display("In progress")]
    InProgress,
    /// A player completed a line.
    #[display("{_0} won")]
    Won(P),
    /// The board filled up without a winner.
    #[display("Tied")]
    Tied,
}

/// State of a single tic-tac-toe match between two players.
///
/// `P` is the player identity: anything comparable, such as a name or a
/// mark. Player distinctness is not enforced.
///
/// Deserialized games are checked against [`TicTacToeInvariants`] and
/// rejected if the board, history and turn disagree.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(
    try_from = "GameSnapshot<P>",
    bound(deserialize = "P: Deserialize<'de> + PartialEq")
)]
pub struct Game<P> {
    /// The player who moves first.
    player1: P,
    /// The player who moves second.
    player2: P,
    /// The board, owned by this game.
    board: Board<P>,
    #[getter(skip)]
    next_turn: Option<P>,
    #[getter(skip)]
    winner: Option<P>,
    #[getter(skip)]
    history: Vec<Move<P>>,
}

/// Unvalidated wire form of a [`Game`].
#[derive(Deserialize)]
#[serde(bound(deserialize = "P: Deserialize<'de>"))]
pub struct GameSnapshot<P> {
    player1: P,
    player2: P,
    board: Board<P>,
    next_turn: Option<P>,
    winner: Option<P>,
    #[serde(default)]
    history: Vec<Move<P>>,
}

/// A deserialized game whose fields contradict each other.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Inconsistent game snapshot: {}", reason)]
pub struct SnapshotError {
    /// The violated invariants.
    pub reason: String,
}

impl<P: PartialEq> TryFrom<GameSnapshot<P>> for Game<P> {
    type Error = SnapshotError;

    fn try_from(snapshot: GameSnapshot<P>) -> Result<Self, Self::Error> {
        let game = Self {
            player1: snapshot.player1,
            player2: snapshot.player2,
            board: snapshot.board,
            next_turn: snapshot.next_turn,
            winner: snapshot.winner,
            history: snapshot.history,
        };

        TicTacToeInvariants::check_all(&game).map_err(|violations| {
            let reason = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%reason, "Rejected game snapshot");
            SnapshotError { reason }
        })?;
        Ok(game)
    }
}

impl<P> Game<P> {
    /// Starts a new game: empty board, player1 to move, no winner.
    pub fn new(player1: P, player2: P) -> Self
    where
        P: Clone,
    {
        Self {
            next_turn: Some(player1.clone()),
            player1,
            player2,
            board: Board::new(),
            winner: None,
            history: Vec::new(),
        }
    }

    /// The player who must move next, or `None` once the game is over.
    pub fn next_turn(&self) -> Option<&P> {
        self.next_turn.as_ref()
    }

    /// The winner, or `None` while the game is ongoing or after a tie.
    pub fn winner(&self) -> Option<&P> {
        self.winner.as_ref()
    }

    /// Committed moves, oldest first.
    pub fn history(&self) -> &[Move<P>] {
        &self.history
    }

    /// Returns true once the game is won or tied.
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.board.is_full()
    }

    /// Positions that would accept the next move. Empty once the game is over.
    pub fn available_positions(&self) -> Vec<Position> {
        if self.is_over() {
            return Vec::new();
        }
        Position::all()
            .iter()
            .copied()
            .filter(|pos| self.board.is_empty(*pos))
            .collect()
    }

    /// Renders the board as text; see [`Board`]'s `Display` impl.
    pub fn board_as_string(&self) -> String
    where
        P: fmt::Display,
    {
        self.board.to_string()
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board<P> {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn record_unchecked(&mut self, action: Move<P>) {
        self.history.push(action);
    }
}

impl<P: Clone> Game<P> {
    /// Derived view of the game phase.
    pub fn status(&self) -> GameStatus<P> {
        match &self.winner {
            Some(winner) => GameStatus::Won(winner.clone()),
            None if self.board.is_full() => GameStatus::Tied,
            None => GameStatus::InProgress,
        }
    }
}

impl<P: Clone + PartialEq + fmt::Debug> Game<P> {
    /// Attempts a move by `player` at `position`.
    ///
    /// Checks, in order: game not over, player's turn, position on the board,
    /// square empty. The first failure is returned and the game is unchanged.
    ///
    /// On success the mark is committed and the outcome says whether the game
    /// continues, was won by `player`, or is tied.
    #[instrument(skip(self, player, position), fields(player = ?player, next_turn = ?self.next_turn))]
    pub fn make_move(
        &mut self,
        player: &P,
        position: impl Into<Position>,
    ) -> Result<MoveOutcome<P>, MoveError<P>> {
        self.apply(Move::new(player.clone(), position))
    }

    /// Applies a [`Move`] value. Same rules as [`Game::make_move`].
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn apply(&mut self, action: Move<P>) -> Result<MoveOutcome<P>, MoveError<P>> {
        if let Err(err) = MoveContract::pre(&*self, &action) {
            debug!(?err, position = %action.position, "Move rejected");
            return Err(err);
        }

        // Work on a copy so a failed postcondition leaves `self` untouched.
        let mut next_state = self.clone();
        let outcome = next_state.commit(action);

        #[cfg(debug_assertions)]
        MoveContract::post(&*self, &next_state)?;

        *self = next_state;
        Ok(outcome)
    }

    /// Marks the board, records the move and settles the turn or result.
    /// Preconditions must already hold.
    fn commit(&mut self, action: Move<P>) -> MoveOutcome<P> {
        let player = action.player.clone();
        self.board.place(action.position, action.player.clone());
        self.history.push(action);

        if let Some(line) = rules::winning_line(&self.board, &player) {
            info!(winner = ?player, %line, "Game won");
            self.winner = Some(player.clone());
            self.next_turn = None;
            MoveOutcome::Won { winner: player }
        } else if self.board.is_full() {
            info!("Game tied");
            self.next_turn = None;
            MoveOutcome::Tied
        } else {
            let next = if self.next_turn.as_ref() == Some(&self.player2) {
                self.player1.clone()
            } else {
                self.player2.clone()
            };
            debug!(next = ?next, "Turn passes");
            self.next_turn = Some(next.clone());
            MoveOutcome::Continue { next }
        }
    }

    /// Rebuilds a game by applying `moves` in order from a fresh start.
    ///
    /// Stops at the first illegal move and returns its error.
    #[instrument(skip(player1, player2, moves), fields(moves = moves.len()))]
    pub fn replay(player1: P, player2: P, moves: &[Move<P>]) -> Result<Self, MoveError<P>> {
        let mut game = Self::new(player1, player2);
        for action in moves {
            game.apply(action.clone())?;
        }
        Ok(game)
    }
}

/// Creates a new game with `player1` to move.
pub fn start_new_game<P: Clone>(player1: P, player2: P) -> Game<P> {
    Game::new(player1, player2)
}

/// Returns the winner, if any.
pub fn get_winner<P>(game: &Game<P>) -> Option<&P> {
    game.winner()
}

/// Returns the player who moves next, or `None` if the game is over.
pub fn get_next_turn<P>(game: &Game<P>) -> Option<&P> {
    game.next_turn()
}

/// Attempts a move. See [`Game::make_move`].
pub fn make_move<P: Clone + PartialEq + fmt::Debug>(
    game: &mut Game<P>,
    player: &P,
    position: impl Into<Position>,
) -> Result<MoveOutcome<P>, MoveError<P>> {
    game.make_move(player, position)
}

/// Renders the board as text.
pub fn get_board_as_string<P: fmt::Display>(game: &Game<P>) -> String {
    game.board_as_string()
}
