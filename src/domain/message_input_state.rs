//! Composition field of the chat form.

/// Maximum number of characters a single message may hold.
pub const MAX_INPUT_CHARS: usize = 4096;

/// Text being composed and the cursor inside it.
///
/// The cursor is a character index, never a byte index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageInputState {
    text: String,
    cursor: usize,
}

impl MessageInputState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True when the field holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Inserts a character at the cursor. Returns false when the field is full.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if self.char_len() >= MAX_INPUT_CHARS {
            return false;
        }

        let at = self.byte_offset(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
        true
    }

    /// Backspace.
    pub fn delete_char_before(&mut self) {
        if self.cursor == 0 {
            return;
        }

        self.cursor -= 1;
        self.remove_at_cursor();
    }

    /// Delete.
    pub fn delete_char_at(&mut self) {
        if self.cursor < self.char_len() {
            self.remove_at_cursor();
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Returns the composed text and leaves the field empty.
    pub fn take_text(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    fn remove_at_cursor(&mut self) {
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(offset, _)| offset)
    }
}
