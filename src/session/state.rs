/// Session: the complete state of one terminal session.
///
/// ## Ownership
///
/// Everything mutable lives here: scrollback, history, theme, the input
/// field, delayed lines and the intro typewriter. There is no global
/// state; dropping the session drops its timers with it.
///
/// ## Update path
///
/// A single loop feeds two kinds of input into the session:
///   - key actions (`submit`, `recall_previous`, `recall_next`, `complete`,
///     prompt edits)
///   - `tick(now)`, which fires due timers and advances the typewriter
///
/// Both run to completion before the next one starts. After `shutdown`
/// the session is `Closed` and neither path touches the buffer again.

use std::time::{Duration, Instant};

use crate::domain::command::Command;
use crate::domain::completion;
use crate::domain::history::History;
use crate::domain::line::Line;
use crate::domain::project::{WELCOME, WELCOME_HINT};
use crate::domain::theme::Theme;
use super::buffer::LineBuffer;
use super::event::SessionEvent;
use super::interpreter::{self, Effect};
use super::prompt::Prompt;
use super::timer::Timers;
use super::typewriter::Typewriter;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    /// Welcome text still being typed. Input is already accepted.
    Intro,
    Ready,
    Closed,
}

/// Timing knobs, filled from the config file.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub typewriter_interval: Duration,
    pub hire_delay: Duration,
    pub intro: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            typewriter_interval: Duration::from_millis(15),
            hire_delay: Duration::from_millis(1000),
            intro: true,
        }
    }
}

pub struct Session {
    phase: Phase,
    buffer: LineBuffer,
    history: History,
    theme: Theme,
    prompt: Prompt,
    timers: Timers,
    typewriter: Typewriter,
    hire_delay: Duration,
}

impl Session {
    pub fn new(config: &SessionConfig, now: Instant) -> Self {
        let mut typewriter = Typewriter::new(WELCOME, config.typewriter_interval, now);
        if !config.intro {
            typewriter.skip();
        }
        Session {
            phase: Phase::Intro,
            buffer: LineBuffer::new(),
            history: History::new(),
            theme: Theme::default(),
            prompt: Prompt::new(),
            timers: Timers::new(),
            typewriter,
            hire_delay: config.hire_delay,
        }
    }

    // ── Accessors ──

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn lines(&self) -> &[Line] {
        self.buffer.lines()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    /// Caret movement and character edits.
    pub fn prompt_mut(&mut self) -> &mut Prompt {
        &mut self.prompt
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    #[allow(dead_code)]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// The partially typed welcome while the intro runs.
    pub fn intro_text(&self) -> Option<&str> {
        (self.phase() == Phase::Intro).then(|| self.typewriter.visible())
    }

    pub fn is_closed(&self) -> bool {
        self.phase == Phase::Closed
    }

    // ── Input ──

    /// Submit the field's contents. The field is cleared either way.
    pub fn submit(&mut self, now: Instant) -> Vec<SessionEvent> {
        let raw = self.prompt.take();
        self.run(&raw, now)
    }

    /// Interpret `raw` as if typed and submitted.
    pub fn run(&mut self, raw: &str, now: Instant) -> Vec<SessionEvent> {
        if self.is_closed() {
            return vec![];
        }
        let outcome = match interpreter::interpret(raw) {
            Some(o) => o,
            None => return vec![],
        };

        let mut events = vec![SessionEvent::CommandSubmitted { command: outcome.input.clone() }];
        self.history.push(&outcome.input);
        self.buffer.extend(outcome.lines);

        match &outcome.command {
            Command::Unknown(token) => {
                events.push(SessionEvent::UnknownCommand { token: token.clone() });
            }
            Command::Theme(None) => events.push(SessionEvent::ThemeRejected),
            _ => {}
        }

        match outcome.effect {
            Some(Effect::SetTheme(theme)) => {
                self.theme = theme;
                events.push(SessionEvent::ThemeChanged { theme });
            }
            Some(Effect::ClearBuffer) => {
                self.buffer.clear();
                events.push(SessionEvent::BufferCleared);
            }
            Some(Effect::Delayed(line)) => {
                self.timers.schedule(now + self.hire_delay, line);
                events.push(SessionEvent::HireScheduled { delay: self.hire_delay });
            }
            None => {}
        }

        events
    }

    pub fn recall_previous(&mut self) {
        if self.is_closed() {
            return;
        }
        if let Some(text) = self.history.recall_previous() {
            self.prompt.set(text);
        }
    }

    pub fn recall_next(&mut self) {
        if self.is_closed() {
            return;
        }
        if let Some(text) = self.history.recall_next() {
            self.prompt.set(text);
        }
    }

    pub fn complete(&mut self) {
        if self.is_closed() {
            return;
        }
        if let Some(full) = completion::complete(self.prompt.text()) {
            self.prompt.set(full);
        }
    }

    // ── Timers ──

    /// Fire due timers and advance the intro.
    pub fn tick(&mut self, now: Instant) -> Vec<SessionEvent> {
        if self.is_closed() {
            return vec![];
        }
        let mut events = vec![];

        for line in self.timers.take_due(now) {
            self.buffer.push(line);
            events.push(SessionEvent::DelayedLineFired);
        }

        if self.typewriter.tick(now) {
            self.buffer.push(Line::info(self.typewriter.text()));
            self.buffer.push(Line::hint(WELCOME_HINT));
            self.phase = Phase::Ready;
            events.push(SessionEvent::IntroFinished);
        }

        events
    }

    /// End the session: cancel everything pending. Idempotent.
    pub fn shutdown(&mut self) -> Vec<SessionEvent> {
        if self.is_closed() {
            return vec![];
        }
        self.typewriter.cancel();
        let count = self.timers.cancel_all();
        self.phase = Phase::Closed;
        vec![SessionEvent::TimersCancelled { count }]
    }
}
