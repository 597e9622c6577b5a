//! Key event handlers for each view mode

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, ViewMode};

/// Map a key press to an optional follow-up message.
///
/// Form editing (focus moves, toggles, typing) mutates state directly and
/// returns `None`; commands (submit, restart, quit) come back as messages
/// so they flow through `update()` like everything else.
pub(crate) fn handle_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.view_mode() {
        ViewMode::Form => handle_form_key(state, key),
        ViewMode::Processing | ViewMode::Results => handle_run_key(state, key),
    }
}

/// Keys while the console or results are on screen
fn handle_run_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::Char('r') if state.show_restart() => Some(Message::Restart),
        _ => None,
    }
}

/// Keys while the submission form is on screen
fn handle_form_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    let form = &mut state.form;
    match key {
        InputKey::Down | InputKey::Tab => {
            form.focus_next();
            None
        }
        InputKey::Up | InputKey::BackTab => {
            form.focus_prev();
            None
        }

        InputKey::Enter => {
            if form.path_focused() {
                form.confirm_path_input();
                None
            } else if form.submit_focused() {
                form.is_submittable().then_some(Message::Submit)
            } else {
                if let Some(control) = form.focused_control() {
                    control.toggle();
                }
                None
            }
        }

        // Typing into the path row
        InputKey::Backspace if form.path_focused() => {
            form.path_input.pop();
            None
        }
        InputKey::Char(c) if form.path_focused() => {
            form.path_input.push(c);
            None
        }

        // Typing into a text control
        InputKey::Backspace if form.focused_is_text() => {
            if let Some(control) = form.focused_control() {
                if let crate::form::OptionValue::Text(text) = &mut control.value {
                    text.pop();
                }
            }
            None
        }
        InputKey::Char(c) if form.focused_is_text() => {
            if let Some(control) = form.focused_control() {
                if let crate::form::OptionValue::Text(text) = &mut control.value {
                    text.push(c);
                }
            }
            None
        }

        // Option rows
        InputKey::Char(' ') | InputKey::Right => {
            if let Some(control) = form.focused_control() {
                control.toggle();
            }
            None
        }
        InputKey::Left => {
            if let Some(control) = form.focused_control() {
                control.cycle_back();
            }
            None
        }

        // Shortcuts (only reachable when no text row is focused)
        InputKey::Char('s') if form.is_submittable() => Some(Message::Submit),
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),

        _ => None,
    }
}
