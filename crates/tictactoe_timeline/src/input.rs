//! Discrete user inputs accepted by a game.

use crate::history::{GameHistory, Transition};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One user event from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    /// A board cell (0-8) was selected.
    CellSelected(usize),
    /// A move-list entry was selected, by list position.
    HistoryEntrySelected(usize),
    /// The move-list order toggle was pressed.
    SortToggleRequested,
    /// A new game was requested.
    ResetRequested,
}

impl GameHistory {
    /// Routes an input to the matching operation.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, input: Input) -> Transition {
        match input {
            Input::CellSelected(index) => self.apply_move(index),
            Input::HistoryEntrySelected(position) => self.jump_to(position),
            Input::SortToggleRequested => self.reverse_order(),
            Input::ResetRequested => self.reset(),
        }
    }
}
