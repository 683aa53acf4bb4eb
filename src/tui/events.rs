use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use super::app::View;

/// User actions from keyboard events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    NextView,
    PrevView,
    Input(char),
    DeleteChar,
    ToggleField,
    MoveUp,
    MoveDown,
    SubmitIngest,
    SubmitQuery,
    Refresh,
    None,
}

/// Poll for keyboard events and convert to actions
pub fn poll_event(view: View, timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
    {
        return Ok(key_to_action(view, key));
    }
    Ok(Action::None)
}

/// Map a key event to an action. Bindings depend on the active view: the Add
/// and Ask views route printable characters into their input fields, while
/// the Knowledge view uses them as shortcuts.
fn key_to_action(view: View, key: KeyEvent) -> Action {
    // Global bindings first
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Action::Quit,
        (KeyCode::Esc, _) => return Action::Quit,
        (KeyCode::Tab, _) => return Action::NextView,
        (KeyCode::BackTab, _) => return Action::PrevView,
        _ => {}
    }

    match view {
        View::Add => match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => Action::SubmitIngest,
            (KeyCode::Up, _) | (KeyCode::Down, _) => Action::ToggleField,
            (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
                Action::Input(c)
            }
            (KeyCode::Backspace, _) => Action::DeleteChar,
            _ => Action::None,
        },
        View::Knowledge => match (key.code, key.modifiers) {
            (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => Action::MoveUp,
            (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => Action::MoveDown,
            (KeyCode::Char('r'), KeyModifiers::NONE) => Action::Refresh,
            _ => Action::None,
        },
        View::Ask => match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => Action::SubmitQuery,
            (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
                Action::Input(c)
            }
            (KeyCode::Backspace, _) => Action::DeleteChar,
            _ => Action::None,
        },
    }
}
