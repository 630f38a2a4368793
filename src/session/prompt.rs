/// The editable input field: text plus a caret measured in chars.

#[derive(Clone, Debug, Default)]
pub struct Prompt {
    text: String,
    caret: usize,
}

impl Prompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the text and put the caret at the end.
    pub fn set(&mut self, text: &str) {
        self.text = text.to_string();
        self.caret = self.text.chars().count();
    }

    /// Take the text out, leaving the field empty.
    pub fn take(&mut self) -> String {
        self.caret = 0;
        std::mem::take(&mut self.text)
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.caret = 0;
    }

    pub fn insert(&mut self, ch: char) {
        let at = self.byte_at(self.caret);
        self.text.insert(at, ch);
        self.caret += 1;
    }

    pub fn backspace(&mut self) {
        if self.caret == 0 {
            return;
        }
        self.caret -= 1;
        let at = self.byte_at(self.caret);
        self.text.remove(at);
    }

    pub fn delete(&mut self) {
        if self.caret < self.char_len() {
            let at = self.byte_at(self.caret);
            self.text.remove(at);
        }
    }

    pub fn left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.caret = (self.caret + 1).min(self.char_len());
    }

    pub fn home(&mut self) {
        self.caret = 0;
    }

    pub fn end(&mut self) {
        self.caret = self.char_len();
    }

    // ── Internal ──

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_at(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(b, _)| b)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_and_editing() {
        let mut p = Prompt::new();
        for c in "hlp".chars() {
            p.insert(c);
        }
        p.left();
        p.left();
        p.insert('e');
        assert_eq!(p.text(), "help");
        assert_eq!(p.caret(), 2);

        p.end();
        p.backspace();
        assert_eq!(p.text(), "hel");
        p.home();
        p.delete();
        assert_eq!(p.text(), "el");
    }

    #[test]
    fn caret_is_clamped() {
        let mut p = Prompt::new();
        p.backspace();
        p.left();
        p.delete();
        p.right();
        assert_eq!(p.caret(), 0);
        assert!(p.is_empty());
    }

    #[test]
    fn set_and_take() {
        let mut p = Prompt::new();
        p.set("théme");
        assert_eq!(p.caret(), 5);
        p.backspace();
        assert_eq!(p.text(), "thém");
        assert_eq!(p.take(), "thém");
        assert!(p.is_empty());
        assert_eq!(p.caret(), 0);
    }
}
