//! Query Input
//!
//! Single-line edit buffer for the search field. The cursor is a character
//! index, so multibyte input moves and deletes one character at a time.

/// Edit buffer with a cursor and a character limit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryInput {
    text: String,
    /// Cursor position in characters (0..=len)
    cursor: usize,
    char_limit: usize,
}

impl QueryInput {
    /// Create an empty buffer accepting at most `char_limit` characters
    pub fn new(char_limit: usize) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            char_limit,
        }
    }

    /// Current text
    pub fn value(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Insert at the cursor; returns false when the limit is reached
    pub fn insert(&mut self, c: char) -> bool {
        if c.is_control() || self.len() >= self.char_limit {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
        true
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    /// Empty the buffer
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}
