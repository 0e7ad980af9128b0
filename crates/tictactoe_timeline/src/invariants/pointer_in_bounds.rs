//! Pointer invariant: the displayed snapshot exists.

use super::Invariant;
use crate::history::GameHistory;

/// Invariant: `pointer < len` and the history is never empty.
pub struct PointerInBoundsInvariant;

impl Invariant<GameHistory> for PointerInBoundsInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.pointer() < history.snapshots().len()
    }

    fn description() -> &'static str {
        "Pointer indexes an existing snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::Snapshot;

    #[test]
    fn test_holds_through_jumps() {
        let mut game = GameHistory::replay(&[0, 1, 2]);
        for position in 0..game.len() {
            game.jump_to(position);
            assert!(PointerInBoundsInvariant::holds(&game));
        }
    }

    #[test]
    fn test_detects_dangling_pointer() {
        let game = GameHistory::from_parts(vec![Snapshot::initial()], 1);
        assert!(!PointerInBoundsInvariant::holds(&game));
    }
}
