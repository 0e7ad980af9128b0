//! Application state and key handling.

use super::input::move_cursor;
use crossterm::event::KeyCode;
use tictactoe_timeline::{GameHistory, GameView, Input, Locale, Position, Transition};
use tracing::{debug, instrument};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The board: arrows move the cursor, Enter places a mark.
    #[default]
    Board,
    /// The move list: arrows pick an entry, Enter jumps to it.
    Moves,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: GameHistory,
    locale: Locale,
    cursor: Position,
    focus: Focus,
    selected: usize,
    message: Option<String>,
}

impl App {
    /// Creates a new application with an empty game.
    pub fn new(locale: Locale) -> Self {
        Self {
            game: GameHistory::new(),
            locale,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            message: None,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameHistory {
        &self.game
    }

    /// View of the displayed snapshot.
    pub fn view(&self) -> GameView {
        self.game.view(self.locale)
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted move-list entry while the list has focus.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Why the last input was ignored, if it was.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Handles one key press. Returns `false` when the user asked to quit.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Char('s') => self.send(Input::SortToggleRequested),
            KeyCode::Char('n') => {
                self.send(Input::ResetRequested);
                self.selected = 0;
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.send(Input::CellSelected(index));
            }
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::Moves => self.handle_moves_key(key),
            },
        }
        true
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.send(Input::CellSelected(self.cursor.to_index()))
            }
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    fn handle_moves_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(self.game.len() - 1)
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.send(Input::HistoryEntrySelected(self.selected))
            }
            _ => {}
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                self.selected = self.game.pointer();
                Focus::Moves
            }
            Focus::Moves => Focus::Board,
        };
        debug!(focus = ?self.focus, "Focus changed");
    }

    fn send(&mut self, input: Input) {
        let transition = self.game.dispatch(input);
        self.message = match transition {
            Transition::Applied => None,
            Transition::Ignored(rejection) => Some(rejection.to_string()),
        };
        self.selected = self.selected.min(self.game.len() - 1);
    }
}
