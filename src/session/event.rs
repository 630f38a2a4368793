/// Events emitted while the session processes input or timers.
/// The front end consumes these for logging.

use std::time::Duration;

use crate::domain::theme::Theme;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    CommandSubmitted { command: String },
    UnknownCommand { token: String },
    ThemeChanged { theme: Theme },
    ThemeRejected,
    BufferCleared,
    HireScheduled { delay: Duration },
    DelayedLineFired,
    IntroFinished,
    TimersCancelled { count: usize },
}
