//! View model handed to the presentation layer.

use crate::history::{GameHistory, Snapshot};
use crate::location::Locale;
use crate::status::Status;
use crate::types::{Mark, Square};
use serde::Serialize;
use tracing::instrument;

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_new::new)]
pub struct MoveEntry {
    /// Position in list order, the argument for a jump.
    pub position: usize,
    /// Move number, `None` for the starting snapshot.
    pub move_number: Option<usize>,
    /// Localized location of the move.
    pub location: Option<String>,
    /// Whether this entry is the displayed snapshot.
    pub current: bool,
}

impl MoveEntry {
    fn from_snapshot(position: usize, snapshot: &Snapshot, pointer: usize, locale: Locale) -> Self {
        Self::new(
            position,
            snapshot.move_number(),
            snapshot.location(locale).map(str::to_string),
            position == pointer,
        )
    }

    /// "Start" or "Move #n".
    pub fn label(&self) -> String {
        match self.move_number {
            Some(n) => format!("Move #{n}"),
            None => "Start".to_string(),
        }
    }

    /// Label followed by the location in parentheses, when there is one.
    pub fn description(&self) -> String {
        match &self.location {
            Some(location) => format!("{} ({})", self.label(), location),
            None => self.label(),
        }
    }
}

/// Everything needed to draw one frame of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Displayed board, row-major.
    pub squares: [Square; 9],
    /// Indices of the winning line on the displayed board.
    pub winning_line: Option<[usize; 3]>,
    /// Derived status.
    pub status: Status,
    /// Status rendered as text.
    pub status_text: String,
    /// Mark to move.
    pub to_move: Mark,
    /// Index of the displayed snapshot.
    pub pointer: usize,
    /// Move list in list order.
    pub moves: Vec<MoveEntry>,
}

impl GameHistory {
    /// Builds the view of the displayed snapshot.
    #[instrument(skip(self))]
    pub fn view(&self, locale: Locale) -> GameView {
        let status = self.status();
        let moves = self
            .snapshots()
            .iter()
            .enumerate()
            .map(|(position, snapshot)| {
                MoveEntry::from_snapshot(position, snapshot, self.pointer(), locale)
            })
            .collect();

        GameView {
            squares: *self.board().squares(),
            winning_line: self.winning_line().map(|line| line.indices()),
            status,
            status_text: status.to_string(),
            to_move: self.to_move(),
            pointer: self.pointer(),
            moves,
        }
    }
}
