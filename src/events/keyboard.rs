//! Keyboard event handling by picker state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::picker::{AxisKind, ScrollDirection};

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    if app.picker.is_open() {
        handle_picker_mode(key)
    } else {
        handle_normal_mode(key)
    }
}

fn handle_normal_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('o') | KeyCode::Enter | KeyCode::Char(' ') => Action::OpenPicker,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

fn handle_picker_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Action::ClosePicker,
        KeyCode::Enter => Action::ConfirmPicker,
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => Action::FocusPrev,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Action::FocusNext,
        KeyCode::Up | KeyCode::Char('k') => Action::StepFocused(ScrollDirection::Previous),
        KeyCode::Down | KeyCode::Char('j') => Action::StepFocused(ScrollDirection::Next),
        KeyCode::Char('d') => Action::FocusAxis(AxisKind::Day),
        KeyCode::Char('m') => Action::FocusAxis(AxisKind::Month),
        KeyCode::Char('y') => Action::FocusAxis(AxisKind::Year),
        _ => Action::None,
    }
}
