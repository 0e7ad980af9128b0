//! Status line derived from the displayed snapshot.

use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// What the status line reports for the displayed snapshot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Status {
    /// A line is complete.
    #[display("Winner {_0}")]
    Winner(Mark),
    /// Nine moves were played without a winner.
    #[display("Draw. No one won.")]
    Draw,
    /// The game continues with this mark to move.
    #[display("Next player: {_0}")]
    NextPlayer(Mark),
}
