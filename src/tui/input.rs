//! Single-line text input state for the path and filter fields.

use unicode_width::UnicodeWidthStr;

/// Editable line of text with a cursor measured in characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the whole value and move the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        *self = Self::new(value);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index();
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor. Returns whether anything changed.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index();
        self.value.remove(at);
        true
    }

    /// Delete the character under the cursor. Returns whether anything changed.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.value.chars().count() {
            return false;
        }
        let at = self.byte_index();
        self.value.remove(at);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    /// Display columns occupied by the text left of the cursor.
    pub fn cursor_column(&self) -> usize {
        self.value[..self.byte_index()].width()
    }

    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map_or(self.value.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::default();
        input.insert('a');
        input.insert('c');
        input.move_left();
        input.insert('b');
        assert_eq!(input.value(), "abc");
        assert!(input.backspace());
        assert_eq!(input.value(), "ac");
        input.move_home();
        assert!(!input.backspace());
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let mut input = TextInput::new("ab");
        assert!(!input.delete());
        input.move_home();
        assert!(input.delete());
        assert_eq!(input.value(), "b");
    }

    #[test]
    fn test_multibyte_cursor() {
        let mut input = TextInput::new("héllo");
        input.move_home();
        input.move_right();
        input.move_right();
        input.insert('!');
        assert_eq!(input.value(), "hé!llo");
        assert_eq!(input.cursor_column(), 3);
    }

    #[test]
    fn test_wide_characters_width() {
        let input = TextInput::new("日本");
        assert_eq!(input.cursor_column(), 4);
    }
}
