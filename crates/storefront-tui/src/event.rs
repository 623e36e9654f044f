//! Terminal event polling

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use storefront_app::{InputKey, Message};
use storefront_core::prelude::*;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c.to_ascii_lowercase()))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<Message>> {
    // 50ms keeps notification expiry responsive
    if event::poll(Duration::from_millis(50))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(key_event_to_input(key).map(Message::Key))
            }
            _ => Ok(None),
        }
    } else {
        Ok(Some(Message::Tick))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_conversion() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('a')));
    }

    #[test]
    fn test_ctrl_chars_are_lowercased() {
        let key = KeyEvent::new(KeyCode::Char('S'), KeyModifiers::CONTROL | KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('s')));
    }

    #[test]
    fn test_shift_tab_is_backtab() {
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::BackTab));
        let key = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::BackTab));
    }

    #[test]
    fn test_unsupported_keys_ignored() {
        let key = KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), None);
    }
}
