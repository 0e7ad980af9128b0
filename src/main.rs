//! tictactoe-timeline - play tic-tac-toe and travel through the move list.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io;
use tictactoe_timeline_app::{
    AppConfig, Cli, Command, OutputFormat, init_stderr_logging, init_tui_logging, run_script,
    run_tui,
};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?.with_locale(cli.locale);

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            init_tui_logging(&config)?;
            run_tui(&config)
        }
        Command::Script { json } => {
            init_stderr_logging(&config);
            let format = if json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            };
            let game = run_script(
                io::stdin().lock(),
                &mut io::stdout().lock(),
                &mut io::stderr().lock(),
                *config.locale(),
                format,
            )?;
            info!(moves = game.len() - 1, status = %game.status(), "Script finished");
            Ok(())
        }
    }
}
