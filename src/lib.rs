//! Terminal front end for the time-travelling tic-tac-toe game.
//!
//! # Architecture
//!
//! - **CLI**: argument parsing for the `tictactoe-timeline` binary
//! - **Config**: TOML configuration with defaults
//! - **Logging**: tracing subscriber setup per front end
//! - **Script**: line-oriented commands from stdin, one view printed per command
//! - **TUI**: interactive ratatui board and move list
//!
//! All game decisions live in [`tictactoe_timeline`]; this crate only turns
//! key presses and text lines into [`tictactoe_timeline::Input`]s and draws
//! the resulting [`tictactoe_timeline::GameView`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod script;
mod tui;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};
pub use logging::{init_stderr_logging, init_tui_logging};
pub use script::{CommandError, OutputFormat, ScriptCommand, render_text, run_script};
pub use tui::{App, Focus, move_cursor, run_tui};
