//! Keyboard input

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A key press the sessions care about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Spin,
    Execute,
    Quit,
}

impl Action {
    /// Map a key event to an action; releases and repeats are ignored
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match key.code {
            KeyCode::Char(' ') => Some(Action::Spin),
            KeyCode::Enter => Some(Action::Execute),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Quit)
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        }
    }
}
