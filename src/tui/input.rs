// Text entry state for forms
//
// The client has four places the user types: the login form, the list search
// box, the comment composer, and the article editor. These two small types
// hold the buffer and cursor for them; key events are translated by the view
// dispatch in tui::mod and applied here.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Single-line text input with a character cursor
#[derive(Debug, Default, Clone)]
pub struct TextField {
    value: String,
    /// Cursor position in characters, 0..=len
    cursor: usize,
}

impl TextField {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Byte offset of the character cursor
    fn byte_cursor(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_cursor();
        self.value.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_cursor();
        self.value.remove(at);
    }

    /// Apply one key event; returns true if the event was consumed
    ///
    /// Control-modified characters are left alone - those are shortcuts,
    /// not text.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert(c);
                true
            }
            KeyCode::Backspace => {
                self.backspace();
                true
            }
            KeyCode::Delete => {
                if self.cursor < self.value.chars().count() {
                    let at = self.byte_cursor();
                    self.value.remove(at);
                }
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.value.chars().count());
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.value.chars().count();
                true
            }
            _ => false,
        }
    }
}

/// Multi-line text input; Enter inserts a newline
///
/// The cursor is a flat character offset into the buffer - the renderer is
/// responsible for wrapping, this type only edits.
#[derive(Debug, Default, Clone)]
pub struct TextArea {
    inner: TextField,
}

impl TextArea {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            inner: TextField::new(value),
        }
    }

    pub fn value(&self) -> &str {
        self.inner.value()
    }

    pub fn cursor(&self) -> usize {
        self.inner.cursor()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn line_count(&self) -> usize {
        self.inner.value().split('\n').count()
    }

    /// Apply one key event; returns true if the event was consumed
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key.code == KeyCode::Enter {
            self.inner.insert('\n');
            return true;
        }
        self.inner.handle_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut field = TextField::default();
        for c in "hello".chars() {
            field.handle_key(&press(KeyCode::Char(c)));
        }
        assert_eq!(field.value(), "hello");

        field.handle_key(&press(KeyCode::Home));
        field.handle_key(&press(KeyCode::Char('>')));
        assert_eq!(field.value(), ">hello");
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut field = TextField::new("abc");
        field.handle_key(&press(KeyCode::Backspace));
        assert_eq!(field.value(), "ab");

        field.handle_key(&press(KeyCode::Home));
        field.handle_key(&press(KeyCode::Backspace)); // nothing before cursor
        assert_eq!(field.value(), "ab");
    }

    #[test]
    fn cursor_respects_multibyte_characters() {
        let mut field = TextField::new("héllo");
        field.handle_key(&press(KeyCode::Home));
        field.handle_key(&press(KeyCode::Right));
        field.handle_key(&press(KeyCode::Right));
        field.handle_key(&press(KeyCode::Backspace));
        assert_eq!(field.value(), "hllo");
    }

    #[test]
    fn textarea_enter_inserts_newline() {
        let mut area = TextArea::default();
        area.handle_key(&press(KeyCode::Char('a')));
        area.handle_key(&press(KeyCode::Enter));
        area.handle_key(&press(KeyCode::Char('b')));
        assert_eq!(area.value(), "a\nb");
        assert_eq!(area.line_count(), 2);
    }
}
