//! Exhaustive and property tests for the win evaluator and history.

use proptest::prelude::*;
use tictactoe_timeline::invariants::{HistoryInvariants, InvariantSet};
use tictactoe_timeline::rules::LINES;
use tictactoe_timeline::{Board, GameHistory, Input, Mark, Square, evaluate};

fn square_from_digit(digit: usize) -> Square {
    match digit {
        0 => Square::Empty,
        1 => Square::Occupied(Mark::X),
        _ => Square::Occupied(Mark::O),
    }
}

fn board_from_code(mut code: usize) -> Board {
    let mut squares = [Square::Empty; 9];
    for square in &mut squares {
        *square = square_from_digit(code % 3);
        code /= 3;
    }
    Board::from_squares(squares)
}

fn has_completed_line(board: &Board) -> bool {
    let s = board.squares();
    [
        [0, 1, 2],
        [3, 4, 5],
        [6, 7, 8],
        [0, 3, 6],
        [1, 4, 7],
        [2, 5, 8],
        [0, 4, 8],
        [2, 4, 6],
    ]
    .iter()
    .any(|[a, b, c]| s[*a] != Square::Empty && s[*a] == s[*b] && s[*a] == s[*c])
}

#[test]
fn test_each_line_alone_wins() {
    for line in LINES {
        for mark in [Mark::X, Mark::O] {
            let board = line
                .positions()
                .into_iter()
                .fold(Board::new(), |board, pos| board.with_mark(pos, mark));
            let win = evaluate(&board).expect("filled line wins");
            assert_eq!(win.mark, mark);
            assert_eq!(win.line, line);
        }
    }
}

#[test]
fn test_every_board_without_a_line_has_no_winner() {
    for code in 0..3usize.pow(9) {
        let board = board_from_code(code);
        assert_eq!(
            evaluate(&board).is_some(),
            has_completed_line(&board),
            "board {code}:\n{}",
            board.display()
        );
    }
}

#[test]
fn test_reported_line_is_really_filled() {
    for code in 0..3usize.pow(9) {
        let board = board_from_code(code);
        if let Some(win) = evaluate(&board) {
            for pos in win.line.positions() {
                assert_eq!(board.get(pos), Square::Occupied(win.mark));
            }
        }
    }
}

fn input_strategy() -> impl Strategy<Value = Input> {
    prop_oneof![
        6 => (0usize..11).prop_map(Input::CellSelected),
        2 => (0usize..11).prop_map(Input::HistoryEntrySelected),
        1 => Just(Input::SortToggleRequested),
        1 => Just(Input::ResetRequested),
    ]
}

proptest! {
    #[test]
    fn prop_invariants_hold_for_any_input_sequence(
        inputs in prop::collection::vec(input_strategy(), 0..40)
    ) {
        let mut game = GameHistory::new();
        for input in inputs {
            let before = game.clone();
            let transition = game.dispatch(input);
            if !transition.is_applied() {
                prop_assert_eq!(&game, &before);
            }
            prop_assert!(HistoryInvariants::check_all(&game).is_ok());
        }
    }

    #[test]
    fn prop_turn_follows_pointer_parity(
        moves in prop::collection::vec(0usize..9, 0..12),
        target in 0usize..10,
    ) {
        let mut game = GameHistory::replay(&moves);
        game.jump_to(target);
        let expected = if game.pointer() % 2 == 0 { Mark::X } else { Mark::O };
        prop_assert_eq!(game.to_move(), expected);
    }

    #[test]
    fn prop_accepted_move_appends_one_snapshot(
        moves in prop::collection::vec(0usize..9, 0..9),
        next in 0usize..9,
    ) {
        let game = GameHistory::replay(&moves);
        if let Ok(after) = game.applied(next) {
            prop_assert_eq!(after.len(), game.pointer() + 2);
            prop_assert_eq!(after.board().occupied_count(), game.board().occupied_count() + 1);
            prop_assert_eq!(after.board().squares()[next], Square::Occupied(game.to_move()));
        }
    }
}
