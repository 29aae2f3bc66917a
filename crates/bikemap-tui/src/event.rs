//! Terminal event polling

use std::time::Duration;

use bikemap_app::message::Message;
use bikemap_app::InputKey;
use bikemap_core::prelude::*;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// Poll interval; also the animation tick period
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// What a poll produced
#[derive(Debug, Clone)]
pub enum TerminalEvent {
    /// Input for the update loop (keys, or a tick on timeout)
    Message(Message),
    /// Terminal size changed; the next frame must be drawn in full
    Resize,
}

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<TerminalEvent>> {
    if !event::poll(POLL_INTERVAL)? {
        // Tick on timeout for spinners
        return Ok(Some(TerminalEvent::Message(Message::Tick)));
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(key_event_to_input(key)
            .map(|input| TerminalEvent::Message(Message::Key(input)))),
        Event::Resize(_, _) => Ok(Some(TerminalEvent::Resize)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    #[test]
    fn test_char_conversion() {
        let key = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('r')));
    }

    #[test]
    fn test_char_with_ctrl_conversion() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('c')));
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
            Some(InputKey::Up)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)),
            Some(InputKey::Left)
        );
    }

    #[test]
    fn test_shift_tab_variants() {
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT)),
            Some(InputKey::BackTab)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(InputKey::BackTab)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
            Some(InputKey::Tab)
        );
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE)),
            None
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Home, KeyModifiers::NONE)),
            None
        );
    }
}
