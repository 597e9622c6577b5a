//! Backend-agnostic key representation
//!
//! The TUI layer maps crossterm key events into this enum so the handler
//! crate never depends on a terminal backend.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Char(char),
    CharCtrl(char),
    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Up,
    Down,
    Left,
    Right,
}
