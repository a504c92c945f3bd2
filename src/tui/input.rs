//! Input - crossterm event conversion and polling
//!
//! Bridges crossterm's event system with the app's key model. Screens
//! never see crossterm types; they handle the closed [`Key`] enum.
//!
//! # API
//!
//! - `convert_key_event` - Convert a crossterm KeyEvent to a [`Key`]
//! - `poll_event` - Non-blocking event check with timeout
//! - `read_event` - Blocking event read

use crossterm::event::{
    poll, read, Event as CrosstermEvent, KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind,
    KeyModifiers,
};
use std::io;
use std::time::Duration;

// =============================================================================
// TYPES
// =============================================================================

/// A key press, reduced to what the screens handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// A printable character (lowercased modifiers-free form).
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
    /// Ctrl-C, always treated as quit.
    Quit,
}

/// Unified event type for the app loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    /// Terminal resize (new columns, rows).
    Resize(u16, u16),
    /// Unhandled event type (mouse, focus, paste).
    None,
}

// =============================================================================
// CONVERSION
// =============================================================================

/// Convert a crossterm KeyEvent. Returns `None` for key releases and
/// keys the app has no use for.
pub fn convert_key_event(event: CrosstermKeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') => Some(Key::Quit),
            _ => None,
        };
    }

    match event.code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        _ => None,
    }
}

// =============================================================================
// POLLING
// =============================================================================

/// Poll for an event with timeout. Returns `None` if nothing arrived
/// within the timeout (the app loop uses this as its tick).
pub fn poll_event(timeout: Duration) -> io::Result<Option<InputEvent>> {
    if poll(timeout)? {
        Ok(Some(read_event()?))
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking).
pub fn read_event() -> io::Result<InputEvent> {
    match read()? {
        CrosstermEvent::Key(key) => Ok(convert_key_event(key)
            .map(InputEvent::Key)
            .unwrap_or(InputEvent::None)),
        CrosstermEvent::Resize(w, h) => Ok(InputEvent::Resize(w, h)),
        _ => Ok(InputEvent::None),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> CrosstermKeyEvent {
        CrosstermKeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_convert_chars() {
        assert_eq!(
            convert_key_event(press(KeyCode::Char('7'), KeyModifiers::empty())),
            Some(Key::Char('7'))
        );
        assert_eq!(
            convert_key_event(press(KeyCode::Char('+'), KeyModifiers::empty())),
            Some(Key::Char('+'))
        );
    }

    #[test]
    fn test_convert_special_keys() {
        let table = [
            (KeyCode::Enter, Key::Enter),
            (KeyCode::Esc, Key::Escape),
            (KeyCode::Backspace, Key::Backspace),
            (KeyCode::Tab, Key::Tab),
            (KeyCode::Up, Key::Up),
            (KeyCode::Down, Key::Down),
            (KeyCode::Left, Key::Left),
            (KeyCode::Right, Key::Right),
        ];
        for (code, expected) in table {
            assert_eq!(
                convert_key_event(press(code, KeyModifiers::empty())),
                Some(expected)
            );
        }
    }

    #[test]
    fn test_ctrl_c_is_quit() {
        assert_eq!(
            convert_key_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Key::Quit)
        );
    }

    #[test]
    fn test_other_ctrl_chords_ignored() {
        assert_eq!(
            convert_key_event(press(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_release_ignored() {
        let event = CrosstermKeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(convert_key_event(event), None);
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        assert_eq!(
            convert_key_event(press(KeyCode::F(5), KeyModifiers::empty())),
            None
        );
        assert_eq!(
            convert_key_event(press(KeyCode::Home, KeyModifiers::empty())),
            None
        );
    }
}
