/// Keyboard input → session actions.
///
/// Drains every pending crossterm event without blocking and translates
/// key presses into `Action`s for the frame. Release events are ignored
/// (some terminals report them, most don't). Non-key events only matter
/// to the renderer, which re-reads the terminal size every frame.

use std::time::Duration;

use crossterm::event::{self, poll, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    Submit,
    HistoryPrev,
    HistoryNext,
    Complete,
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    ClearField,
    Quit,
}

pub struct InputState {
    /// Actions decoded during the most recent drain.
    pub actions: Vec<Action>,
}

impl InputState {
    pub fn new() -> Self {
        InputState {
            actions: Vec::with_capacity(8),
        }
    }

    /// Drain all pending terminal events. Call once per frame.
    pub fn drain_events(&mut self) -> std::io::Result<()> {
        self.actions.clear();

        while poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = map_key(key) {
                    self.actions.push(action);
                }
            }
        }
        Ok(())
    }
}

/// Pure key translation, kept separate from event polling for tests.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Action::Quit),
            KeyCode::Char('u') | KeyCode::Char('U') => Some(Action::ClearField),
            KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::Home),
            KeyCode::Char('e') | KeyCode::Char('E') => Some(Action::End),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Up => Some(Action::HistoryPrev),
        KeyCode::Down => Some(Action::HistoryNext),
        // BackTab is Shift+Tab on most terminals; neither moves focus here.
        KeyCode::Tab | KeyCode::BackTab => Some(Action::Complete),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Delete => Some(Action::Delete),
        KeyCode::Left => Some(Action::Left),
        KeyCode::Right => Some(Action::Right),
        KeyCode::Home => Some(Action::Home),
        KeyCode::End => Some(Action::End),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) if !c.is_control() => Some(Action::Insert(c)),
        _ => None,
    }
}
