//! Tests for the move history and time travel.

use tictactoe_timeline::invariants::{HistoryInvariants, InvariantSet};
use tictactoe_timeline::{
    FULL_HISTORY_LEN, GameHistory, Input, Mark, Position, Rejection, Snapshot, Status, Transition,
};

/// X O X / X O O / O X X, no completed line.
const DRAW_MOVES: [usize; 9] = [0, 1, 2, 4, 3, 5, 7, 6, 8];

#[test]
fn test_occupied_cell_is_noop() {
    let mut game = GameHistory::replay(&[4, 0]);
    let before = game.clone();

    let transition = game.apply_move(4);

    assert_eq!(
        transition,
        Transition::Ignored(Rejection::SquareOccupied(Position::Center))
    );
    assert_eq!(game, before);
}

#[test]
fn test_moves_after_win_are_noops_for_every_cell() {
    let mut game = GameHistory::replay(&[0, 3, 1, 4, 2]);
    assert_eq!(game.status(), Status::Winner(Mark::X));
    let before = game.clone();

    for index in 0..9 {
        let transition = game.apply_move(index);
        assert!(!transition.is_applied(), "cell {index} accepted after win");
    }
    assert_eq!(game, before);
}

#[test]
fn test_diagonal_win_reported_with_its_line() {
    let mut game = GameHistory::new();
    for index in [0, 1, 4, 2] {
        game.apply_move(index);
        assert_eq!(game.winner(), None);
    }

    game.apply_move(8);

    let win = game.winner().expect("X completes the diagonal");
    assert_eq!(win.mark, Mark::X);
    assert_eq!(win.line.indices(), [0, 4, 8]);
    assert_eq!(game.status().to_string(), "Winner X");

    let before = game.clone();
    for index in [7, 6, 5] {
        assert_eq!(
            game.apply_move(index),
            Transition::Ignored(Rejection::GameWon(Mark::X))
        );
    }
    assert_eq!(game, before);
}

#[test]
fn test_alternating_sequence_wins_on_bottom_row() {
    let mut game = GameHistory::new();
    let moves = [0, 4, 8, 1, 7, 2, 6];
    for (played, index) in moves.iter().enumerate() {
        assert_eq!(game.winner(), None, "winner before move {}", played + 1);
        assert!(game.apply_move(*index).is_applied());
    }

    let win = game.winner().expect("X completes the bottom row");
    assert_eq!(win.mark, Mark::X);
    assert_eq!(win.line.indices(), [6, 7, 8]);
    assert!(!game.apply_move(3).is_applied());
    assert_eq!(game.len(), moves.len() + 1);
}

#[test]
fn test_draw_exactly_at_full_history() {
    let mut game = GameHistory::new();
    for index in DRAW_MOVES {
        assert_ne!(game.status(), Status::Draw, "draw at length {}", game.len());
        game.apply_move(index);
    }

    assert_eq!(game.len(), FULL_HISTORY_LEN);
    assert_eq!(game.winner(), None);
    assert_eq!(game.status(), Status::Draw);
    assert_eq!(game.status().to_string(), "Draw. No one won.");
}

#[test]
fn test_draw_reported_on_earlier_snapshots_of_full_history() {
    let mut game = GameHistory::replay(&DRAW_MOVES);
    game.jump_to(3);
    assert_eq!(game.status(), Status::Draw);
}

#[test]
fn test_jump_turn_matches_replay() {
    let full = GameHistory::replay(&DRAW_MOVES);

    for k in 0..full.len() {
        let mut jumped = full.clone();
        jumped.jump_to(k);

        let replayed = GameHistory::replay(&DRAW_MOVES[..k]);
        assert_eq!(jumped.to_move(), replayed.to_move(), "turn differs at {k}");
        assert_eq!(jumped.board(), replayed.board(), "board differs at {k}");
    }
}

#[test]
fn test_jump_is_idempotent_and_order_independent() {
    let mut a = GameHistory::replay(&[0, 1, 2, 3]);
    let mut b = a.clone();

    a.jump_to(2);
    a.jump_to(2);
    b.jump_to(4);
    b.jump_to(0);
    b.jump_to(2);

    assert_eq!(a, b);
    assert_eq!(a.to_move(), Mark::X);
}

#[test]
fn test_reset_from_any_state() {
    let mut won = GameHistory::replay(&[0, 3, 1, 4, 2]);
    let mut rewound = GameHistory::replay(&[0, 1, 2]);
    rewound.jump_to(1);
    let mut reversed = GameHistory::replay(&[4, 0]);
    reversed.reverse_order();

    for game in [&mut won, &mut rewound, &mut reversed] {
        assert!(game.reset().is_applied());
        assert_eq!(game.len(), 1);
        assert_eq!(game.snapshots()[0], Snapshot::initial());
        assert_eq!(game.pointer(), 0);
        assert_eq!(game.to_move(), Mark::X);
    }
}

#[test]
fn test_reverse_preserves_pointer_index_not_content() {
    let mut game = GameHistory::replay(&[0, 4, 8]);
    assert_eq!(game.current().move_number(), Some(3));

    game.reverse_order();

    assert_eq!(game.pointer(), 3);
    assert!(game.current().is_initial());
    assert_eq!(game.snapshots()[0].move_number(), Some(3));

    game.reverse_order();
    assert_eq!(game.current().move_number(), Some(3));
}

#[test]
fn test_move_on_reversed_list_truncates_in_list_order() {
    let mut game = GameHistory::replay(&[0, 4]);
    game.reverse_order();
    game.jump_to(1);

    // Displayed: move #1 (X at 0). List order: [#2, #1, start].
    assert!(game.apply_move(8).is_applied());

    assert_eq!(game.len(), 3);
    assert_eq!(game.pointer(), 2);
    assert_eq!(game.current().move_number(), Some(2));
    assert_eq!(game.board().get(Position::BottomRight).mark(), Some(Mark::O));
    assert!(HistoryInvariants::check_all(&game).is_ok());
}

#[test]
fn test_move_after_reversal_can_put_o_ahead() {
    let mut game = GameHistory::replay(&[0]);
    game.reverse_order();

    // Pointer 1 now shows the empty start, with O to move.
    assert!(game.current().is_initial());
    assert_eq!(game.to_move(), Mark::O);
    assert!(game.apply_move(4).is_applied());

    assert_eq!(game.len(), 3);
    assert_eq!(game.board().count(Mark::O), 1);
    assert_eq!(game.board().count(Mark::X), 0);
    assert_eq!(game.status(), Status::NextPlayer(Mark::X));
    assert!(HistoryInvariants::check_all(&game).is_ok());
}

#[test]
fn test_move_after_reversing_full_draw_grows_past_ten() {
    let mut game = GameHistory::replay(&DRAW_MOVES);
    assert_eq!(game.len(), FULL_HISTORY_LEN);
    game.reverse_order();

    assert!(game.current().is_initial());
    assert!(game.apply_move(4).is_applied());

    assert_eq!(game.len(), FULL_HISTORY_LEN + 1);
    assert_eq!(game.pointer(), FULL_HISTORY_LEN);
    assert_eq!(game.current().move_number(), Some(FULL_HISTORY_LEN));
    assert_eq!(game.board().get(Position::Center).mark(), Some(Mark::O));
    assert_eq!(game.board().occupied_count(), 1);
    assert_eq!(game.status(), Status::NextPlayer(Mark::X));
    assert!(HistoryInvariants::check_all(&game).is_ok());
}

#[test]
fn test_inputs_drive_a_full_game() {
    let mut game = GameHistory::new();
    let inputs = [
        Input::CellSelected(0),
        Input::CellSelected(4),
        Input::HistoryEntrySelected(1),
        Input::CellSelected(2),
        Input::SortToggleRequested,
        Input::HistoryEntrySelected(7),
    ];
    let applied: Vec<_> = inputs
        .into_iter()
        .map(|input| game.dispatch(input).is_applied())
        .collect();

    assert_eq!(applied, [true, true, true, true, true, false]);
    assert_eq!(game.len(), 3);
    assert_eq!(game.pointer(), 2);
}
