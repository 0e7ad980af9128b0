//! Move history with time travel.
//!
//! A [`GameHistory`] owns every board snapshot played so far and a pointer
//! to the one currently displayed. Selecting a cell while the pointer is
//! behind the end discards the abandoned future before the new move is
//! appended.

use crate::invariants::assert_invariants;
use crate::location::Locale;
use crate::position::Position;
use crate::rules::{Line, Win, evaluate};
use crate::status::Status;
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// History length of a game whose nine squares are all filled: the
/// initial snapshot plus one per move.
pub const FULL_HISTORY_LEN: usize = 10;

/// Immutable board state at one point in the move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    played: Option<Position>,
    move_number: Option<usize>,
}

impl Snapshot {
    /// The empty board a game starts from.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            played: None,
            move_number: None,
        }
    }

    fn after_move(board: Board, played: Position, move_number: usize) -> Self {
        Self {
            board,
            played: Some(played),
            move_number: Some(move_number),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_board(board: Board) -> Self {
        Self {
            board,
            played: None,
            move_number: None,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Position of the mark placed to reach this snapshot.
    pub fn played(&self) -> Option<Position> {
        self.played
    }

    /// Sequential move number, `None` for the initial snapshot.
    pub fn move_number(&self) -> Option<usize> {
        self.move_number
    }

    /// Whether this is the empty starting snapshot.
    pub fn is_initial(&self) -> bool {
        self.move_number.is_none()
    }

    /// Localized location of the move that produced this snapshot.
    pub fn location(&self, locale: Locale) -> Option<&'static str> {
        self.played.map(|pos| locale.location(pos))
    }
}

/// Why an input left the game unchanged.
///
/// These are ordinary game-rule rejections, not failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Rejection {
    /// Cell index outside 0-8.
    #[display("Cell {_0} is outside the board")]
    OutOfBounds(usize),

    /// The displayed board already has a mark there.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(Position),

    /// The displayed board already has a completed line.
    #[display("Game already won by {_0}")]
    GameWon(Mark),

    /// History position past the end of the list.
    #[display("No snapshot at history position {_0}")]
    NoSuchSnapshot(usize),
}

/// Result of feeding one input to a [`GameHistory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The input changed the game.
    Applied,
    /// The input was a no-op.
    Ignored(Rejection),
}

impl Transition {
    /// Whether the input changed the game.
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied)
    }

    /// The rejection reason, if the input was ignored.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Transition::Applied => None,
            Transition::Ignored(rejection) => Some(*rejection),
        }
    }
}

/// Ordered board snapshots plus the pointer to the displayed one.
///
/// The mark to move is never stored: it is X when the pointer is even and
/// O when it is odd. A move advances the pointer by exactly one, so this
/// alternates like a toggled flag would, and jumping is a pure function of
/// the target position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameHistory {
    snapshots: Vec<Snapshot>,
    pointer: usize,
}

impl GameHistory {
    /// Creates a history holding only the empty starting snapshot.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
            pointer: 0,
        }
    }

    /// Builds a history by selecting `indices` in order from a fresh game.
    ///
    /// Rejected indices are skipped, exactly as they would be interactively.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Self {
        let mut game = Self::new();
        for &index in indices {
            game.apply_move(index);
        }
        game
    }

    #[cfg(test)]
    pub(crate) fn from_parts(snapshots: Vec<Snapshot>, pointer: usize) -> Self {
        Self { snapshots, pointer }
    }

    /// All snapshots in list order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Number of snapshots, including the starting one.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: a history holds at least its starting snapshot.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the displayed snapshot.
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// The displayed snapshot.
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.pointer]
    }

    /// The displayed board.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Mark to move, derived from pointer parity.
    pub fn to_move(&self) -> Mark {
        Mark::for_move_count(self.pointer)
    }

    /// Completed line on the displayed board, if any.
    pub fn winner(&self) -> Option<Win> {
        evaluate(self.board())
    }

    /// Winning line to highlight on the displayed board.
    pub fn winning_line(&self) -> Option<Line> {
        self.winner().map(|win| win.line)
    }

    /// Status of the displayed snapshot.
    ///
    /// The draw check looks at the total history length, not the displayed
    /// board: once nine moves have been recorded without a winner, every
    /// winner-free snapshot reports a draw.
    pub fn status(&self) -> Status {
        if let Some(win) = self.winner() {
            Status::Winner(win.mark)
        } else if self.snapshots.len() == FULL_HISTORY_LEN {
            Status::Draw
        } else {
            Status::NextPlayer(self.to_move())
        }
    }

    /// Derives the history that results from selecting cell `index`.
    ///
    /// `self` is left untouched; the caller decides whether to install the
    /// new state.
    pub fn applied(&self, index: usize) -> Result<Self, Rejection> {
        let pos = Position::from_index(index).ok_or(Rejection::OutOfBounds(index))?;
        let current = self.current();

        if let Some(win) = evaluate(current.board()) {
            return Err(Rejection::GameWon(win.mark));
        }
        if !current.board().is_empty(pos) {
            return Err(Rejection::SquareOccupied(pos));
        }

        let mut snapshots = self.snapshots[..=self.pointer].to_vec();
        let move_number = snapshots.len();
        let board = current.board().with_mark(pos, self.to_move());
        snapshots.push(Snapshot::after_move(board, pos, move_number));

        Ok(Self {
            snapshots,
            pointer: move_number,
        })
    }

    /// Selects cell `index` for the mark to move.
    ///
    /// Occupied cells, out-of-range indices and boards that already have a
    /// winner leave the game unchanged.
    #[instrument(skip(self), fields(pointer = self.pointer, to_move = %self.to_move()))]
    pub fn apply_move(&mut self, index: usize) -> Transition {
        match self.applied(index) {
            Ok(next) => {
                let discarded = self.snapshots.len() - self.pointer - 1;
                *self = next;
                assert_invariants(self);
                info!(
                    move_number = self.pointer,
                    discarded,
                    status = %self.status(),
                    "Move applied"
                );
                Transition::Applied
            }
            Err(rejection) => {
                debug!(%rejection, "Move ignored");
                Transition::Ignored(rejection)
            }
        }
    }

    /// Displays the snapshot at `position` in list order.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, position: usize) -> Transition {
        if position >= self.snapshots.len() {
            let rejection = Rejection::NoSuchSnapshot(position);
            debug!(%rejection, "Jump ignored");
            return Transition::Ignored(rejection);
        }
        self.pointer = position;
        debug!(to_move = %self.to_move(), "Jumped");
        Transition::Applied
    }

    /// Reverses the list order in place.
    ///
    /// The pointer keeps its index, so it now refers to the snapshot at the
    /// mirrored place in the timeline. Jumping and moving use list order
    /// from here on.
    #[instrument(skip(self), fields(pointer = self.pointer))]
    pub fn reverse_order(&mut self) -> Transition {
        self.snapshots.reverse();
        debug!("History order reversed");
        Transition::Applied
    }

    /// Returns to the single empty starting snapshot.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Transition {
        *self = Self::new();
        info!("Game reset");
        Transition::Applied
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = GameHistory::new();
        assert_eq!(game.len(), 1);
        assert_eq!(game.pointer(), 0);
        assert!(game.current().is_initial());
        assert_eq!(game.to_move(), Mark::X);
        assert_eq!(game.status(), Status::NextPlayer(Mark::X));
    }

    #[test]
    fn test_move_annotates_snapshot() {
        let mut game = GameHistory::new();
        assert!(game.apply_move(5).is_applied());

        let snapshot = game.current();
        assert_eq!(snapshot.played(), Some(Position::MiddleRight));
        assert_eq!(snapshot.move_number(), Some(1));
        assert_eq!(snapshot.location(Locale::English), Some("row 2, column 3"));
        assert_eq!(game.to_move(), Mark::O);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut game = GameHistory::new();
        assert_eq!(
            game.apply_move(9),
            Transition::Ignored(Rejection::OutOfBounds(9))
        );
        assert_eq!(game, GameHistory::new());
    }

    #[test]
    fn test_applied_does_not_touch_original() {
        let game = GameHistory::new();
        let next = game.applied(4).expect("legal move");
        assert_eq!(game.len(), 1);
        assert_eq!(next.len(), 2);
    }

    #[test]
    fn test_winner_checked_before_occupancy() {
        let game = GameHistory::replay(&[0, 3, 1, 4, 2]);
        assert_eq!(game.applied(0), Err(Rejection::GameWon(Mark::X)));
    }

    #[test]
    fn test_jump_out_of_range_is_ignored() {
        let mut game = GameHistory::replay(&[0, 1]);
        let before = game.clone();
        assert_eq!(
            game.jump_to(3),
            Transition::Ignored(Rejection::NoSuchSnapshot(3))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_move_after_jump_truncates_future() {
        let mut game = GameHistory::replay(&[0, 1, 2, 3]);
        game.jump_to(1);
        assert!(game.apply_move(8).is_applied());

        assert_eq!(game.len(), 3);
        assert_eq!(game.pointer(), 2);
        assert_eq!(game.current().move_number(), Some(2));
        assert_eq!(game.board().get(Position::BottomRight).mark(), Some(Mark::O));
        assert!(game.board().is_empty(Position::TopCenter));
    }

    #[test]
    fn test_reverse_keeps_pointer_index() {
        let mut game = GameHistory::replay(&[0, 1, 2]);
        game.jump_to(1);
        game.reverse_order();

        assert_eq!(game.pointer(), 1);
        // Index 1 of the reversed list is move #2.
        assert_eq!(game.current().move_number(), Some(2));
        assert_eq!(game.snapshots()[3], Snapshot::initial());
        assert_eq!(game.to_move(), Mark::O);
    }
}
