/// One-shot intro animation: reveals a fixed string one character per
/// interval.
///
/// Lifecycle:
///   Typing   : `tick(now)` reveals every character whose slot has passed
///   Finished : the full string is visible; reported exactly once
///   Cancelled: pending reveal dropped, nothing more happens
///
/// The caller owns the clock. Long gaps between ticks catch up in one call.

use std::time::{Duration, Instant};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum State {
    Typing,
    Finished,
    Cancelled,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    text: &'static str,
    total: usize,
    revealed: usize,
    interval: Duration,
    next_due: Instant,
    state: State,
}

impl Typewriter {
    pub fn new(text: &'static str, interval: Duration, start: Instant) -> Self {
        Typewriter {
            text,
            total: text.chars().count(),
            revealed: 0,
            interval,
            next_due: start + interval,
            state: State::Typing,
        }
    }

    /// Advance the animation. Returns `true` on the single call in which
    /// the full string becomes visible.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.state != State::Typing {
            return false;
        }
        while self.revealed < self.total && self.next_due <= now {
            self.revealed += 1;
            self.next_due += self.interval;
        }
        if self.revealed == self.total {
            self.state = State::Finished;
            return true;
        }
        false
    }

    /// Jump to the full string. Completion is still reported by the next
    /// `tick`.
    pub fn skip(&mut self) {
        if self.state == State::Typing {
            self.revealed = self.total;
        }
    }

    pub fn cancel(&mut self) {
        if self.state == State::Typing {
            self.state = State::Cancelled;
        }
    }

    #[allow(dead_code)]
    pub fn is_typing(&self) -> bool {
        self.state == State::Typing
    }

    #[allow(dead_code)]
    pub fn is_finished(&self) -> bool {
        self.state == State::Finished
    }

    /// The currently revealed prefix.
    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.revealed) {
            Some((byte, _)) => &self.text[..byte],
            None => self.text,
        }
    }

    pub fn text(&self) -> &'static str {
        self.text
    }
}
