/// Deadline-stamped delayed lines.
///
/// Timers never run on their own thread. The session loop calls
/// `take_due(now)` and appends whatever has expired, in deadline order
/// (ties keep scheduling order).

use std::time::Instant;

use crate::domain::line::Line;

#[derive(Clone, Debug)]
struct Timer {
    due: Instant,
    line: Line,
}

#[derive(Clone, Debug, Default)]
pub struct Timers {
    pending: Vec<Timer>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due: Instant, line: Line) {
        // Keep sorted by deadline; insert after equal deadlines.
        let pos = self.pending.partition_point(|t| t.due <= due);
        self.pending.insert(pos, Timer { due, line });
    }

    /// Remove and return every line whose deadline is at or before `now`.
    pub fn take_due(&mut self, now: Instant) -> Vec<Line> {
        let n = self.pending.partition_point(|t| t.due <= now);
        self.pending.drain(..n).map(|t| t.line).collect()
    }

    /// Drop all pending timers. Returns how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let n = self.pending.len();
        self.pending.clear();
        n
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
