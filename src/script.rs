//! Line-oriented play: one command per line, one view per command.
//!
//! ```text
//! move 4      # select cell 4 (0-8) or a label such as "center"
//! jump 1      # display move-list entry 1
//! sort        # reverse the move list
//! reset       # start over
//! show        # print the view without changing anything
//! ```

use anyhow::Result;
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tictactoe_timeline::{GameHistory, GameView, Input, Locale, Position};
use tracing::{debug, instrument, warn};

/// How views are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Board, status and move list as plain text.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// One parsed script line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptCommand {
    /// Feed an input to the game.
    Input(Input),
    /// Print the view only.
    Show,
}

/// Script line that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// First word is not a command.
    #[display("Unknown command {word:?}")]
    Unknown {
        /// The unrecognised word.
        word: String,
    },

    /// Command needs an argument.
    #[display("Missing argument for {command}")]
    MissingArgument {
        /// Command name.
        command: &'static str,
    },

    /// Argument is neither a number nor a cell label.
    #[display("Invalid argument {argument:?} for {command}")]
    InvalidArgument {
        /// Command name.
        command: &'static str,
        /// Offending argument.
        argument: String,
    },
}

fn argument<'a>(command: &'static str, rest: &'a str) -> Result<&'a str, CommandError> {
    let rest = rest.trim();
    if rest.is_empty() {
        Err(CommandError::MissingArgument { command })
    } else {
        Ok(rest)
    }
}

fn number(command: &'static str, arg: &str) -> Result<usize, CommandError> {
    arg.parse().map_err(|_| CommandError::InvalidArgument {
        command,
        argument: arg.to_string(),
    })
}

impl FromStr for ScriptCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        match word.to_lowercase().as_str() {
            "move" | "m" => {
                let arg = argument("move", rest)?;
                // Raw numbers pass through so out-of-range cells reach the game.
                let index = match arg.parse::<usize>() {
                    Ok(index) => index,
                    Err(_) => Position::from_label_or_number(arg)
                        .map(Position::to_index)
                        .ok_or_else(|| CommandError::InvalidArgument {
                            command: "move",
                            argument: arg.to_string(),
                        })?,
                };
                Ok(ScriptCommand::Input(Input::CellSelected(index)))
            }
            "jump" | "j" => {
                let arg = argument("jump", rest)?;
                Ok(ScriptCommand::Input(Input::HistoryEntrySelected(number(
                    "jump", arg,
                )?)))
            }
            "sort" | "s" => Ok(ScriptCommand::Input(Input::SortToggleRequested)),
            "reset" | "new" => Ok(ScriptCommand::Input(Input::ResetRequested)),
            "show" => Ok(ScriptCommand::Show),
            _ => Err(CommandError::Unknown {
                word: word.to_string(),
            }),
        }
    }
}

/// Renders a view as plain text.
pub fn render_text(view: &GameView) -> String {
    let mut out = String::new();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                match view.squares[index].mark() {
                    Some(mark) => mark.to_string(),
                    None => (index + 1).to_string(),
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
        if row < 2 {
            out.push_str("-+-+-\n");
        }
    }

    out.push_str(&view.status_text);
    if let Some([a, b, c]) = view.winning_line {
        out.push_str(&format!(" ({a}, {b}, {c})"));
    }
    out.push('\n');

    for entry in &view.moves {
        let marker = if entry.current { '>' } else { ' ' };
        out.push_str(&format!("{marker} {}. {}\n", entry.position, entry.description()));
    }
    out
}

fn print_view<W: Write>(out: &mut W, view: &GameView, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", render_text(view))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(view)?)?,
    }
    Ok(())
}

/// Plays every line of `input` against a fresh game.
///
/// Blank lines and `#` comments are skipped. Lines that do not parse are
/// reported on `errors` and skipped; rejected game inputs are ordinary
/// no-ops and still print the (unchanged) view.
#[instrument(skip_all, fields(%locale, ?format))]
pub fn run_script<R, W, E>(
    input: R,
    out: &mut W,
    errors: &mut E,
    locale: Locale,
    format: OutputFormat,
) -> Result<GameHistory>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut game = GameHistory::new();

    for (number, line) in input.lines().enumerate() {
        let line = line?;
        let text = line.split('#').next().unwrap_or_default().trim();
        if text.is_empty() {
            continue;
        }

        match text.parse::<ScriptCommand>() {
            Ok(ScriptCommand::Input(input)) => {
                let transition = game.dispatch(input);
                debug!(line = number + 1, ?input, ?transition, "Command played");
            }
            Ok(ScriptCommand::Show) => {}
            Err(e) => {
                warn!(line = number + 1, error = %e, "Skipping line");
                writeln!(errors, "line {}: {}", number + 1, e)?;
                continue;
            }
        }

        print_view(out, &game.view(locale), format)?;
    }

    Ok(game)
}
