/// The scrollback: an append-only, insertion-ordered list of lines.
///
/// The only removal is `clear`, which empties the whole buffer. The
/// renderer always shows the tail, so every append scrolls to the bottom.

use crate::domain::line::Line;

#[derive(Clone, Debug, Default)]
pub struct LineBuffer {
    lines: Vec<Line>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = Line>) {
        self.lines.extend(lines);
    }

    pub fn clear(&mut self) {
        self.lines = Vec::new();
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut b = LineBuffer::new();
        b.push(Line::info("one"));
        b.extend([Line::hint("two"), Line::error("three")]);
        let texts: Vec<&str> = b.lines().iter().map(|l| l.text()).collect();
        assert_eq!(texts, ["one", "two", "three"]);
    }

    #[test]
    fn clear_empties_everything() {
        let mut b = LineBuffer::new();
        b.push(Line::info("x"));
        b.push(Line::info("y"));
        b.clear();
        assert!(b.is_empty());
        assert_eq!(b.len(), 0);
    }
}
