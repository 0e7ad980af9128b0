//! Single-winner invariant: no board is won by both marks.

use super::Invariant;
use crate::history::GameHistory;
use crate::rules::LINES;
use crate::types::{Board, Mark, Square};

/// Invariant: no snapshot has completed lines of both marks.
///
/// Moves are refused once the displayed board has a winner, so every board
/// descends from a winner-free board by one mark.
pub struct SingleWinnerInvariant;

fn line_owners(board: &Board) -> impl Iterator<Item = Mark> + '_ {
    LINES.into_iter().filter_map(|line| {
        let [a, b, c] = line.positions().map(|pos| board.get(pos));
        match a {
            Square::Occupied(mark) if a == b && a == c => Some(mark),
            _ => None,
        }
    })
}

impl Invariant<GameHistory> for SingleWinnerInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.snapshots().iter().all(|snapshot| {
            let mut owners = line_owners(snapshot.board());
            match owners.next() {
                Some(first) => owners.all(|mark| mark == first),
                None => true,
            }
        })
    }

    fn description() -> &'static str {
        "No board has completed lines for both marks"
    }
}
