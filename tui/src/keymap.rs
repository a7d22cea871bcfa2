//! Terminal Event Translation
//!
//! Converts crossterm events into [`SessionEvent`]s. Only key presses are
//! forwarded (not Release or Repeat); mouse and focus events are dropped.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use movcli_core::{Key, SessionEvent};

/// Translate one terminal event
pub fn translate(event: &Event) -> Option<SessionEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            translate_key(key).map(SessionEvent::Key)
        }
        Event::Resize(width, height) => Some(SessionEvent::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<Key> {
    let key = match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Key::Ctrl(c.to_ascii_lowercase())
        }
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::ALT) => return None,
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent, MouseEventKind};
    use pretty_assertions::assert_eq;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_plain_characters() {
        assert_eq!(
            translate(&press(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(SessionEvent::Key(Key::Char('a')))
        );
        // Shifted letters arrive already uppercased
        assert_eq!(
            translate(&press(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            Some(SessionEvent::Key(Key::Char('G')))
        );
    }

    #[test]
    fn test_control_chords() {
        assert_eq!(
            translate(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(SessionEvent::Key(Key::Ctrl('c')))
        );
        assert_eq!(
            translate(&press(KeyCode::Char('U'), KeyModifiers::CONTROL | KeyModifiers::SHIFT)),
            Some(SessionEvent::Key(Key::Ctrl('u')))
        );
    }

    #[test]
    fn test_named_keys() {
        let cases = [
            (KeyCode::Enter, Key::Enter),
            (KeyCode::Esc, Key::Esc),
            (KeyCode::Backspace, Key::Backspace),
            (KeyCode::Up, Key::Up),
            (KeyCode::Down, Key::Down),
            (KeyCode::PageDown, Key::PageDown),
            (KeyCode::Home, Key::Home),
        ];
        for (code, expected) in cases {
            assert_eq!(
                translate(&press(code, KeyModifiers::NONE)),
                Some(SessionEvent::Key(expected))
            );
        }
    }

    #[test]
    fn test_release_and_repeat_are_ignored() {
        let release = Event::Key(KeyEvent::new_with_kind_and_state(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        ));
        assert_eq!(translate(&release), None);
    }

    #[test]
    fn test_resize() {
        assert_eq!(
            translate(&Event::Resize(120, 40)),
            Some(SessionEvent::Resize {
                width: 120,
                height: 40
            })
        );
    }

    #[test]
    fn test_unhandled_events() {
        assert_eq!(translate(&press(KeyCode::Tab, KeyModifiers::NONE)), None);
        assert_eq!(translate(&press(KeyCode::Char('x'), KeyModifiers::ALT)), None);
        assert_eq!(translate(&Event::FocusGained), None);
        let mouse = Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate(&mouse), None);
    }
}
