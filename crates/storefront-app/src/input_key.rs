//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm key events into [`InputKey`] at its boundary so
//! the checkout logic can be driven and tested without a terminal.

/// Keyboard input as the app sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character (letters, digits, symbols, space)
    Char(char),
    /// Character with Ctrl held (Ctrl+c, Ctrl+s, ...)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
}
