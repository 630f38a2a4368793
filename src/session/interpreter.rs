/// The command interpreter: raw input → lines to append + side effect.
///
/// `interpret` is pure. Applying the outcome (buffer, theme, timers) is
/// the session's job, so the whole dispatch table is testable without a
/// clock.

use crate::domain::command::Command;
use crate::domain::line::Line;
use crate::domain::project::{
    ABOUT, CONTACT, HELP, HIRE_AUTH, HIRE_DONE, PROJECTS, PROJECTS_TIP, RESUME, THEME_USAGE,
};
use crate::domain::theme::Theme;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    SetTheme(Theme),
    ClearBuffer,
    /// Append this line once the configured delay has elapsed.
    Delayed(Line),
}

#[derive(Clone, Debug)]
pub struct Outcome {
    /// Trimmed input, as recorded in history.
    pub input: String,
    pub command: Command,
    /// Echo line first, then handler output.
    pub lines: Vec<Line>,
    pub effect: Option<Effect>,
}

/// `None` for blank input: nothing is echoed or recorded.
pub fn interpret(raw: &str) -> Option<Outcome> {
    let input = raw.trim();
    if input.is_empty() {
        return None;
    }

    let command = Command::parse(input);
    let mut lines = vec![Line::command(input)];
    let mut effect = None;

    match &command {
        Command::Hire => {
            lines.push(Line::success(HIRE_AUTH));
            effect = Some(Effect::Delayed(Line::success(HIRE_DONE)));
        }
        Command::Help => lines.push(Line::info(HELP)),
        Command::About => lines.extend(ABOUT.iter().map(|t| Line::info(*t))),
        Command::Projects => {
            lines.extend(PROJECTS.iter().map(|p| Line::info(p.summary())));
            lines.push(Line::info(PROJECTS_TIP));
        }
        Command::Contact => lines.push(Line::info(CONTACT)),
        Command::Theme(Some(theme)) => {
            lines.push(Line::info(format!("Theme switched to {}", theme.name())));
            effect = Some(Effect::SetTheme(*theme));
        }
        Command::Theme(None) => lines.push(Line::error(THEME_USAGE)),
        Command::Resume => lines.push(Line::info(RESUME)),
        Command::Clear => effect = Some(Effect::ClearBuffer),
        Command::Unknown(token) => lines.push(Line::error(format!(
            "Command not found: {token}. Type 'help' for commands."
        ))),
    }

    Some(Outcome {
        input: input.to_string(),
        command,
        lines,
        effect,
    })
}
