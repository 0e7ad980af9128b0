//! Command-line interface for tictactoe-timeline.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_timeline::Locale;

/// Tic-tac-toe with a time-travelling move list
#[derive(Parser, Debug)]
#[command(name = "tictactoe-timeline")]
#[command(about = "Tic-tac-toe with a time-travelling move list", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Language for move locations (english, vietnamese)
    #[arg(short, long, global = true)]
    pub locale: Option<Locale>,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Tui,

    /// Read commands from stdin and print the game after each one
    Script {
        /// Print each view as a JSON line instead of text
        #[arg(long)]
        json: bool,
    },
}
