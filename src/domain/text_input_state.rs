//! Editable single-line text used by the post composer and the group name prompt.

/// Upper bound on characters accepted by one input line.
pub const MAX_INPUT_CHARS: usize = 2_000;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInputState {
    text: String,
    /// Character index, not byte index.
    cursor: usize,
}

impl TextInputState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns false when the line is already full.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if self.text.chars().count() >= MAX_INPUT_CHARS {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
        true
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let start = self.byte_index(self.cursor);
        let end = self.byte_index(self.cursor + 1);
        self.text.drain(start..end);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(byte, _)| byte)
            .unwrap_or(self.text.len())
    }
}
