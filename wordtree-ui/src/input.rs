/// A decoded keystroke relevant to the input line.
///
/// This is intentionally UI-specific: anything the terminal sends that is
/// not one of these is dropped before it reaches the buffer.
#[derive(Debug, PartialEq)]
pub enum Key {
    /// A printable character, including space.
    Char(char),
    /// Backspace or delete.
    Backspace,
    /// Enter, confirming the line and ending the session.
    Enter,
}

impl Key {
    /// Decodes a raw input byte, if it maps to an editing key.
    pub fn from_byte(byte: u8) -> Option<Key> {
        match byte {
            b'\r' | b'\n' => Some(Key::Enter),
            0x08 | 0x7f => Some(Key::Backspace),
            byte if byte == b' ' || byte.is_ascii_graphic() => Some(Key::Char(byte as char)),
            _ => None,
        }
    }
}

/// Single-line edit buffer behind the interactive prompt.
///
/// Holds the text typed so far and knows which part of it is the word
/// currently being completed. There is no persisted state beyond this line.
#[derive(Debug, Default)]
pub struct InputBuffer {
    line: String,
}

impl InputBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one keystroke to the buffer.
    ///
    /// Returns `false` when the keystroke ends the input loop (enter),
    /// `true` otherwise. Backspace on an empty line is a no-op.
    pub fn apply(&mut self, key: Key) -> bool {
        match key {
            Key::Char(c) => {
                self.line.push(c);
                true
            }
            Key::Backspace => {
                self.line.pop();
                true
            }
            Key::Enter => false,
        }
    }

    /// The whole line typed so far.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// The word being typed: everything after the last whitespace
    /// character, or the whole line when there is none.
    pub fn current_word(&self) -> &str {
        match self.line.rfind(char::is_whitespace) {
            Some(index) => &self.line[index + 1..],
            None => &self.line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn characters_append_to_the_line() {
        let mut buffer = InputBuffer::new();
        assert!(buffer.apply(Key::Char('h')));
        assert!(buffer.apply(Key::Char('i')));
        assert_eq!(buffer.line(), "hi");
    }

    #[test]
    fn backspace_removes_the_last_character() {
        let mut buffer = InputBuffer::new();
        buffer.apply(Key::Char('h'));
        buffer.apply(Key::Char('i'));
        buffer.apply(Key::Backspace);
        assert_eq!(buffer.line(), "h");
    }

    #[test]
    fn backspace_on_an_empty_line_does_nothing() {
        let mut buffer = InputBuffer::new();
        assert!(buffer.apply(Key::Backspace));
        assert_eq!(buffer.line(), "");
    }

    #[test]
    fn enter_ends_the_session() {
        let mut buffer = InputBuffer::new();
        assert!(!buffer.apply(Key::Enter));
    }

    #[test]
    fn current_word_is_the_whole_line_without_whitespace() {
        let mut buffer = InputBuffer::new();
        for c in "tre".chars() {
            buffer.apply(Key::Char(c));
        }
        assert_eq!(buffer.current_word(), "tre");
    }

    #[test]
    fn current_word_follows_the_last_space() {
        let mut buffer = InputBuffer::new();
        for c in "free pizza to".chars() {
            buffer.apply(Key::Char(c));
        }
        assert_eq!(buffer.current_word(), "to");
        buffer.apply(Key::Char(' '));
        assert_eq!(buffer.current_word(), "");
    }

    #[test]
    fn byte_decoding_covers_the_editing_keys() {
        assert_eq!(Key::from_byte(b'a'), Some(Key::Char('a')));
        assert_eq!(Key::from_byte(b' '), Some(Key::Char(' ')));
        assert_eq!(Key::from_byte(0x7f), Some(Key::Backspace));
        assert_eq!(Key::from_byte(0x08), Some(Key::Backspace));
        assert_eq!(Key::from_byte(b'\r'), Some(Key::Enter));
        assert_eq!(Key::from_byte(b'\n'), Some(Key::Enter));
        assert_eq!(Key::from_byte(0x1b), None);
        assert_eq!(Key::from_byte(0x00), None);
    }
}
