//! Pure tic-tac-toe game logic with a time-travelling move history.
//!
//! # Architecture
//!
//! - **Rules**: the win evaluator and draw detection over a single [`Board`]
//! - **History**: [`GameHistory`], the ordered list of board [`Snapshot`]s with
//!   a pointer to the displayed one
//! - **View**: [`GameView`], everything a presentation layer needs to draw a frame
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameHistory, Mark, Status};
//!
//! let mut game = GameHistory::new();
//! for index in [0, 4, 8, 1, 7, 2, 6] {
//!     game.apply_move(index);
//! }
//! assert_eq!(game.status(), Status::Winner(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod history;
mod input;
pub mod invariants;
mod location;
mod position;
pub mod rules;
mod status;
mod types;
mod view;

pub use history::{FULL_HISTORY_LEN, GameHistory, Rejection, Snapshot, Transition};
pub use input::Input;
pub use location::Locale;
pub use position::Position;
pub use rules::{Line, Win, check_winner, evaluate, is_draw, is_full};
pub use status::Status;
pub use types::{Board, Mark, Square};
pub use view::{GameView, MoveEntry};
