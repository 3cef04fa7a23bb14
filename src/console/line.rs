//! Single-line input editor.

use unicode_width::UnicodeWidthStr;

/// The console input line. The cursor is a char index, `0..=len`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEditor {
    text: String,
    cursor: usize,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Display width of the text before the cursor.
    pub fn cursor_width(&self) -> usize {
        self.text[..self.byte_index(self.cursor)].width()
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars().filter(|c| !c.is_control()) {
            self.insert(c);
        }
    }

    /// Delete the char before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
    }

    /// Delete the char under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Replace the text and put the cursor at the end.
    pub fn set(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_move() {
        let mut line = LineEditor::new();
        line.insert_str("hlp");
        line.move_left();
        line.move_left();
        line.insert('e');
        assert_eq!(line.text(), "help");
        assert_eq!(line.cursor(), 2);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut line = LineEditor::new();
        line.set("theme");
        line.backspace();
        assert_eq!(line.text(), "them");

        line.move_home();
        line.delete();
        assert_eq!(line.text(), "hem");

        line.move_home();
        line.backspace();
        assert_eq!(line.text(), "hem");

        line.move_end();
        line.delete();
        assert_eq!(line.text(), "hem");
    }

    #[test]
    fn test_multibyte_chars() {
        let mut line = LineEditor::new();
        line.insert_str("café");
        line.backspace();
        assert_eq!(line.text(), "caf");
        line.insert('é');
        line.move_left();
        assert_eq!(line.cursor_width(), 3);
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut line = LineEditor::new();
        line.move_left();
        line.move_right();
        assert_eq!(line.cursor(), 0);
    }

    #[test]
    fn test_insert_str_drops_control_chars() {
        let mut line = LineEditor::new();
        line.insert_str("echo\nhi\t");
        assert_eq!(line.text(), "echohi");
    }

    #[test]
    fn test_set_and_clear() {
        let mut line = LineEditor::new();
        line.set("blog");
        assert_eq!(line.cursor(), 4);
        line.clear();
        assert!(line.is_empty());
        assert_eq!(line.cursor(), 0);
    }
}
