/// Command recognition: maps a trimmed, non-empty input to a `Command`.
///
/// Recognition is total. Anything that is not a known root token
/// becomes `Command::Unknown` carrying the lower-cased token.

use super::project::HIRE_COMMAND;
use super::theme::Theme;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Command {
    Hire,
    Help,
    About,
    Projects,
    Contact,
    /// `None` when the argument is missing or not an exact theme name.
    Theme(Option<Theme>),
    Resume,
    Clear,
    Unknown(String),
}

impl Command {
    /// `cmd` must already be trimmed.
    pub fn parse(cmd: &str) -> Command {
        if cmd.eq_ignore_ascii_case(HIRE_COMMAND) {
            return Command::Hire;
        }

        // Single-space split: "theme  dark" yields an empty second token.
        let mut parts = cmd.split(' ');
        let root = parts.next().unwrap_or_default().to_lowercase();

        match root.as_str() {
            "help" => Command::Help,
            "about" => Command::About,
            "projects" => Command::Projects,
            "contact" => Command::Contact,
            "theme" => Command::Theme(parts.next().and_then(Theme::parse)),
            "resume" | "cat" => Command::Resume,
            "clear" => Command::Clear,
            _ => Command::Unknown(root),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_token_is_case_insensitive() {
        assert_eq!(Command::parse("HELP"), Command::Help);
        assert_eq!(Command::parse("About"), Command::About);
        assert_eq!(Command::parse("projects github"), Command::Projects);
    }

    #[test]
    fn resume_alias() {
        assert_eq!(Command::parse("cat"), Command::Resume);
        assert_eq!(Command::parse("cat resume.pdf"), Command::Resume);
    }

    #[test]
    fn hire_matches_whole_string_ignoring_case() {
        assert_eq!(Command::parse("sudo hire enoch"), Command::Hire);
        assert_eq!(Command::parse("SUDO Hire ENOCH"), Command::Hire);
        assert_eq!(Command::parse("sudo hire enoch now"), Command::Unknown("sudo".into()));
        assert_eq!(Command::parse("sudo  hire enoch"), Command::Unknown("sudo".into()));
    }

    #[test]
    fn theme_argument_is_exact() {
        assert_eq!(Command::parse("theme light"), Command::Theme(Some(Theme::Light)));
        assert_eq!(Command::parse("THEME dark"), Command::Theme(Some(Theme::Dark)));
        assert_eq!(Command::parse("theme Dark"), Command::Theme(None));
        assert_eq!(Command::parse("theme"), Command::Theme(None));
        assert_eq!(Command::parse("theme  dark"), Command::Theme(None));
        assert_eq!(Command::parse("theme purple"), Command::Theme(None));
    }

    #[test]
    fn unknown_carries_lowercased_root() {
        assert_eq!(Command::parse("LS -la"), Command::Unknown("ls".into()));
    }
}
