//! Key mapping from terminal events to simulation inputs.

use crate::types::{Key, ARROW_DOWN, ARROW_LEFT, ARROW_RIGHT, ARROW_UP};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, ModifierKeyCode};

/// A key event as the simulation sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mapped {
    /// A letter typed toward the rack
    Char(char),
    Key(Key),
}

/// Map a keyboard event. Only letters are passed through as characters.
pub fn map_key_event(key: KeyEvent) -> Option<Mapped> {
    match key.code {
        // Terminals rarely report a bare Ctrl press, so Ctrl+letter asks for a shuffle too.
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            c.is_ascii_alphabetic().then_some(Mapped::Key(Key::LeftCtrl))
        }
        KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(Mapped::Char(c)),

        KeyCode::Backspace => Some(Mapped::Key(Key::Backspace)),
        KeyCode::Enter => Some(Mapped::Key(Key::Enter)),
        KeyCode::Tab | KeyCode::BackTab => Some(Mapped::Key(Key::Tab)),

        KeyCode::Up => Some(Mapped::Key(Key::Up)),
        KeyCode::Down => Some(Mapped::Key(Key::Down)),
        KeyCode::Left => Some(Mapped::Key(Key::Left)),
        KeyCode::Right => Some(Mapped::Key(Key::Right)),

        KeyCode::Modifier(ModifierKeyCode::LeftControl) => Some(Mapped::Key(Key::LeftCtrl)),
        KeyCode::Modifier(ModifierKeyCode::RightControl) => Some(Mapped::Key(Key::RightCtrl)),
        KeyCode::Modifier(ModifierKeyCode::LeftShift) => Some(Mapped::Key(Key::LeftShift)),
        KeyCode::Modifier(ModifierKeyCode::RightShift) => Some(Mapped::Key(Key::RightShift)),

        _ => None,
    }
}

/// Index into `Inputs::arrow_timers` for an arrow key.
pub fn arrow_index(code: KeyCode) -> Option<usize> {
    match code {
        KeyCode::Up => Some(ARROW_UP),
        KeyCode::Down => Some(ARROW_DOWN),
        KeyCode::Left => Some(ARROW_LEFT),
        KeyCode::Right => Some(ARROW_RIGHT),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_letters_pass_through() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('q'))),
            Some(Mapped::Char('q'))
        );
        assert_eq!(
            map_key_event(KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
            Some(Mapped::Char('Q'))
        );
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char(' '))), None);
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('7'))), None);
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(Mapped::Key(Key::Enter))
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Backspace)),
            Some(Mapped::Key(Key::Backspace))
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Tab)),
            Some(Mapped::Key(Key::Tab))
        );
        assert_eq!(
            map_key_event(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            Some(Mapped::Key(Key::LeftCtrl))
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Modifier(ModifierKeyCode::RightControl))),
            Some(Mapped::Key(Key::RightCtrl))
        );
    }

    #[test]
    fn test_arrow_index() {
        assert_eq!(arrow_index(KeyCode::Up), Some(ARROW_UP));
        assert_eq!(arrow_index(KeyCode::Right), Some(ARROW_RIGHT));
        assert_eq!(arrow_index(KeyCode::Enter), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q'))));
    }
}
