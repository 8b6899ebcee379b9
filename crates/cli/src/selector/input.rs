use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::types::Action;
use comment_rules_core::error::Result;

/// A queue of selector actions, consumed one at a time.
pub trait ActionSource {
    /// Blocks until the next action is available.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying input cannot be read.
    fn next_action(&mut self) -> Result<Action>;
}

/// Reads actions from the terminal's event stream.
pub struct TerminalEvents;

impl ActionSource for TerminalEvents {
    fn next_action(&mut self) -> Result<Action> {
        Ok(action_for_event(event::read()?))
    }
}

/// Maps a terminal event to a selector action
pub fn action_for_event(event: Event) -> Action {
    match event {
        Event::Key(key_event) => action_for_key(key_event),
        Event::Resize(_, rows) => Action::Resize { rows },
        _ => Action::Ignored,
    }
}

/// Maps a key press to a selector action
pub fn action_for_key(key_event: KeyEvent) -> Action {
    if key_event.kind == KeyEventKind::Release {
        return Action::Ignored;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        return match key_event.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Action::Interrupt,
            _ => Action::Ignored,
        };
    }

    match key_event.code {
        KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::Home => Action::Home,
        KeyCode::End => Action::End,
        KeyCode::Char(' ') => Action::Toggle,
        KeyCode::Char('a') | KeyCode::Char('A') => Action::SelectAll,
        KeyCode::Char('n') | KeyCode::Char('N') => Action::SelectNone,
        KeyCode::Enter => Action::Confirm,
        _ => Action::Ignored,
    }
}
