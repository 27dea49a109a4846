use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The closed set of key events the dispatcher understands. The event loop
/// decodes raw crossterm events into these one at a time; everything else is
/// dropped before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Backspace,
    Char(char),
}

pub fn decode(event: &KeyEvent) -> Option<Key> {
    match event.code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Backspace | KeyCode::Delete => Some(Key::Backspace),
        // Modifier chords are commands, not text; plain and shifted chars
        // are the only printables that reach the search query.
        KeyCode::Char(c)
            if !event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(Key::Char(c))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    #[test]
    fn plain_and_shifted_chars_decode() {
        let plain = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE);
        assert_eq!(decode(&plain), Some(Key::Char('d')));

        let shifted = KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT);
        assert_eq!(decode(&shifted), Some(Key::Char('D')));
    }

    #[test]
    fn control_chords_are_dropped() {
        let chord = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(decode(&chord), None);
    }

    #[test]
    fn delete_maps_to_backspace() {
        let delete = KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE);
        assert_eq!(decode(&delete), Some(Key::Backspace));
    }
}
