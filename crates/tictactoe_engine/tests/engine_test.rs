//! Rule tests for the tic-tac-toe engine.

use tictactoe_engine::{
    Game, GameStatus, Move, MoveError, MoveOutcome, Position, get_next_turn, get_winner,
    start_new_game,
};

/// Plays `moves` alternately from a fresh A/B game, asserting each continues.
fn play(moves: &[(&'static str, (usize, usize))]) -> Game<&'static str> {
    let mut game = start_new_game("A", "B");
    for (player, pos) in moves {
        let outcome = game.make_move(player, *pos).unwrap();
        assert!(!outcome.is_game_over(), "{player} at {pos:?} ended the game early");
    }
    game
}

/// Moves of a full game that ends without a winner:
/// X O X / X O X / O X O
const TIE_SEQUENCE: [(&str, (usize, usize)); 9] = [
    ("A", (0, 0)),
    ("B", (0, 1)),
    ("A", (0, 2)),
    ("B", (1, 1)),
    ("A", (1, 0)),
    ("B", (2, 0)),
    ("A", (1, 2)),
    ("B", (2, 2)),
    ("A", (2, 1)),
];

#[test]
fn test_new_game() {
    let game = start_new_game("A", "B");
    assert_eq!(*game.player1(), "A");
    assert_eq!(*game.player2(), "B");
    assert_eq!(get_next_turn(&game), Some(&"A"));
    assert_eq!(get_winner(&game), None);
}

#[test]
fn test_each_position_accepts_exactly_once() {
    for &position in Position::all() {
        let mut game = start_new_game("A", "B");
        assert!(game.make_move(&"A", position).is_ok(), "{position} rejected");

        let err = game.make_move(&"B", position).unwrap_err();
        assert_eq!(err, MoveError::PositionTaken { position });
        assert_eq!(err.to_string(), "Position already taken");
    }
}

#[test]
fn test_out_of_range_positions() {
    for pos in [(3, 0), (0, 3), (3, 3), (9, 8), (usize::MAX, 1)] {
        let mut game = start_new_game("A", "B");
        let err = game.make_move(&"A", pos).unwrap_err();
        assert_eq!(err, MoveError::OutOfRange);
        assert_eq!(err.to_string(), "Position out of range");
        assert!(game.history().is_empty());
        assert_eq!(get_next_turn(&game), Some(&"A"));
    }
}

#[test]
fn test_coordinate_slices_of_wrong_length_are_out_of_range() {
    let attempt = |coords: &[usize]| -> Result<MoveOutcome<&str>, MoveError<&str>> {
        let mut game = start_new_game("A", "B");
        let position = Position::try_from(coords)?;
        game.make_move(&"A", position)
    };

    assert_eq!(attempt(&[0, 0, 1]), Err(MoveError::OutOfRange));
    assert_eq!(attempt(&[1]), Err(MoveError::OutOfRange));
    assert_eq!(attempt(&[]), Err(MoveError::OutOfRange));
    assert!(attempt(&[2, 2]).is_ok());
}

#[test]
fn test_turn_alternation() {
    let mut game = start_new_game("A", "B");
    assert_eq!(
        game.make_move(&"A", (0, 0)),
        Ok(MoveOutcome::Continue { next: "B" })
    );
    assert_eq!(get_next_turn(&game), Some(&"B"));

    let err = game.make_move(&"A", (0, 1)).unwrap_err();
    assert_eq!(err, MoveError::NotYourTurn { next: "B" });
    assert!(err.to_string().contains('B'));
    assert_eq!(err.to_string(), "B moves next");
}

#[test]
fn test_unknown_player_is_told_who_moves() {
    let mut game = start_new_game("A", "B");
    assert_eq!(
        game.make_move(&"C", (0, 0)),
        Err(MoveError::NotYourTurn { next: "A" })
    );
}

#[test]
fn test_turn_checked_before_position() {
    let mut game = start_new_game("A", "B");
    game.make_move(&"A", (0, 0)).unwrap();

    // Wrong player, off-board and occupied: the turn rule reports first.
    assert_eq!(
        game.make_move(&"A", (5, 5)),
        Err(MoveError::NotYourTurn { next: "B" })
    );
    assert_eq!(
        game.make_move(&"A", (0, 0)),
        Err(MoveError::NotYourTurn { next: "B" })
    );
}

#[test]
fn test_horizontal_win() {
    let mut game = play(&[("A", (0, 0)), ("B", (1, 0)), ("A", (0, 1)), ("B", (1, 1))]);

    let outcome = game.make_move(&"A", (0, 2)).unwrap();
    assert_eq!(outcome, MoveOutcome::Won { winner: "A" });
    assert_eq!(outcome.to_string(), "A wins!");
    assert_eq!(get_winner(&game), Some(&"A"));
    assert_eq!(get_next_turn(&game), None);
    assert_eq!(game.status(), GameStatus::Won("A"));
}

#[test]
fn test_every_row_wins() {
    for row in 0..3 {
        let other = (row + 1) % 3;
        let mut game = play(&[
            ("A", (row, 0)),
            ("B", (other, 0)),
            ("A", (row, 1)),
            ("B", (other, 1)),
        ]);
        assert_eq!(
            game.make_move(&"A", (row, 2)),
            Ok(MoveOutcome::Won { winner: "A" }),
            "row {row}"
        );
    }
}

#[test]
fn test_every_column_wins() {
    for column in 0..3 {
        let other = (column + 1) % 3;
        let mut game = play(&[
            ("A", (0, column)),
            ("B", (0, other)),
            ("A", (1, column)),
            ("B", (1, other)),
        ]);
        assert_eq!(
            game.make_move(&"A", (2, column)),
            Ok(MoveOutcome::Won { winner: "A" }),
            "column {column}"
        );
        assert_eq!(get_winner(&game), Some(&"A"));
    }
}

#[test]
fn test_main_diagonal_win() {
    let mut game = play(&[("A", (0, 0)), ("B", (0, 1)), ("A", (1, 1)), ("B", (0, 2))]);
    assert_eq!(
        game.make_move(&"A", (2, 2)),
        Ok(MoveOutcome::Won { winner: "A" })
    );
}

#[test]
fn test_anti_diagonal_win() {
    let mut game = play(&[("A", (2, 0)), ("B", (0, 0)), ("A", (1, 1)), ("B", (0, 1))]);
    assert_eq!(
        game.make_move(&"A", (0, 2)),
        Ok(MoveOutcome::Won { winner: "A" })
    );
}

#[test]
fn test_second_player_can_win() {
    let mut game = play(&[
        ("A", (0, 0)),
        ("B", (2, 0)),
        ("A", (0, 1)),
        ("B", (2, 1)),
        ("A", (1, 2)),
    ]);
    assert_eq!(
        game.make_move(&"B", (2, 2)),
        Ok(MoveOutcome::Won { winner: "B" })
    );
    assert_eq!(get_winner(&game), Some(&"B"));
}

#[test]
fn test_win_on_last_square_is_a_win_not_a_tie() {
    // A completes the left column with the last empty square.
    let mut game = play(&[
        ("A", (0, 0)),
        ("B", (0, 1)),
        ("A", (0, 2)),
        ("B", (1, 1)),
        ("A", (1, 0)),
        ("B", (1, 2)),
        ("A", (2, 1)),
        ("B", (2, 2)),
    ]);
    assert_eq!(
        game.make_move(&"A", (2, 0)),
        Ok(MoveOutcome::Won { winner: "A" })
    );
    assert!(game.board().is_full());
    assert_eq!(game.status(), GameStatus::Won("A"));
}

#[test]
fn test_tie() {
    let (last, rest) = TIE_SEQUENCE.split_last().unwrap();
    let mut game = play(rest);

    let outcome = game.make_move(&last.0, last.1).unwrap();
    assert_eq!(outcome, MoveOutcome::Tied);
    assert_eq!(outcome.to_string(), "Game is tied!");
    assert_eq!(get_next_turn(&game), None);
    assert_eq!(get_winner(&game), None);
    assert_eq!(game.status(), GameStatus::Tied);
}

#[test]
fn test_no_moves_after_win() {
    let mut game = play(&[("A", (0, 0)), ("B", (1, 0)), ("A", (0, 1)), ("B", (1, 1))]);
    game.make_move(&"A", (0, 2)).unwrap();
    let finished = game.clone();

    for player in ["A", "B", "C"] {
        for pos in [(2, 2), (0, 0), (7, 7)] {
            let err = game.make_move(&player, pos).unwrap_err();
            assert_eq!(err, MoveError::GameIsOver);
            assert_eq!(err.to_string(), "Game is over");
        }
    }
    assert_eq!(game, finished);
}

#[test]
fn test_no_moves_after_tie() {
    let moves: Vec<_> = TIE_SEQUENCE
        .iter()
        .map(|(player, pos)| Move::new(*player, *pos))
        .collect();
    let mut game = Game::replay("A", "B", &moves).unwrap();

    for player in ["A", "B"] {
        for &pos in Position::all() {
            assert_eq!(game.make_move(&player, pos), Err(MoveError::GameIsOver));
        }
    }
}

#[test]
fn test_history_matches_moves() {
    let game = play(&[("A", (2, 2)), ("B", (0, 0)), ("A", (1, 2))]);
    let history: Vec<_> = game
        .history()
        .iter()
        .map(|m| (*m.player(), m.position()))
        .collect();
    assert_eq!(
        history,
        vec![
            ("A", Position::new(2, 2)),
            ("B", Position::new(0, 0)),
            ("A", Position::new(1, 2)),
        ]
    );
    assert_eq!(game.board().marked_count(), 3);
}

#[test]
fn test_replay_matches_incremental_play() {
    let moves: Vec<_> = TIE_SEQUENCE[..5]
        .iter()
        .map(|(player, pos)| Move::new(*player, *pos))
        .collect();
    let replayed = Game::replay("A", "B", &moves).unwrap();
    let played = play(&TIE_SEQUENCE[..5]);
    assert_eq!(replayed, played);
}

#[test]
fn test_replay_rejects_moves_after_game_over() {
    let moves = [
        Move::new("A", (0, 0)),
        Move::new("B", (1, 0)),
        Move::new("A", (0, 1)),
        Move::new("B", (1, 1)),
        Move::new("A", (0, 2)),
        Move::new("B", (2, 2)),
    ];
    assert_eq!(Game::replay("A", "B", &moves), Err(MoveError::GameIsOver));
}

#[test]
fn test_numeric_player_ids() {
    let mut game: Game<u32> = Game::new(7, 42);
    game.make_move(&7, (1, 1)).unwrap();
    assert_eq!(game.next_turn(), Some(&42));
    assert_eq!(
        game.make_move(&7, (0, 0)),
        Err(MoveError::NotYourTurn { next: 42 })
    );
}
