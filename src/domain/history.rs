/// Command history with a browsing cursor.
///
/// The cursor is `None` while not browsing, otherwise always a valid
/// index into `entries`. Recall methods return the text the input field
/// should now hold, or `None` when the input must stay as it is.

#[derive(Clone, Debug, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted command and stop browsing.
    pub fn push(&mut self, cmd: &str) {
        self.entries.push(cmd.to_string());
        self.cursor = None;
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[allow(dead_code)]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Step back in time. Jumps to the newest entry when not browsing,
    /// sticks at the oldest.
    pub fn recall_previous(&mut self) -> Option<&str> {
        let last = self.entries.len().checked_sub(1)?;
        let idx = match self.cursor {
            None => last,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(idx);
        Some(&self.entries[idx])
    }

    /// Step forward. Leaving the newest entry stops browsing and yields an
    /// empty input.
    pub fn recall_next(&mut self) -> Option<&str> {
        let last = self.entries.len().checked_sub(1)?;
        let i = self.cursor?;
        if i >= last {
            self.cursor = None;
            return Some("");
        }
        let idx = (i + 1).min(last);
        self.cursor = Some(idx);
        Some(&self.entries[idx])
    }
}
