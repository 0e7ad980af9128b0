//! Single-step invariant: neighbouring snapshots differ by one move.

use super::Invariant;
use crate::history::GameHistory;
use crate::types::{Board, Square};

/// Invariant: adjacent snapshots differ in exactly one square, which is
/// empty in one of them.
///
/// Marks are never erased or overwritten between neighbours, whichever
/// direction the list is read in.
pub struct SingleStepInvariant;

fn one_move_apart(a: &Board, b: &Board) -> bool {
    let mut changed = a
        .squares()
        .iter()
        .zip(b.squares())
        .filter(|(x, y)| x != y);

    match (changed.next(), changed.next()) {
        (Some((x, y)), None) => *x == Square::Empty || *y == Square::Empty,
        _ => false,
    }
}

impl Invariant<GameHistory> for SingleStepInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .snapshots()
            .windows(2)
            .all(|pair| one_move_apart(pair[0].board(), pair[1].board()))
    }

    fn description() -> &'static str {
        "Adjacent snapshots differ by exactly one placed mark"
    }
}
