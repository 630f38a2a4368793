/// A single line of scrollback output.
///
/// Lines are created by the interpreter or the intro typewriter and are
/// never edited afterwards. The only way one disappears is a wholesale
/// buffer clear.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LineKind {
    Command, // echoed user input, "$ ..."
    Info,
    Hint,
    Error,
    Success,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Line {
    kind: LineKind,
    text: String,
}

impl Line {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Line { kind, text: text.into() }
    }

    pub fn command(cmd: &str) -> Self {
        Line::new(LineKind::Command, format!("$ {cmd}"))
    }

    pub fn info(text: impl Into<String>) -> Self {
        Line::new(LineKind::Info, text)
    }

    pub fn hint(text: impl Into<String>) -> Self {
        Line::new(LineKind::Hint, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Line::new(LineKind::Error, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Line::new(LineKind::Success, text)
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_echo_is_prefixed() {
        let l = Line::command("help");
        assert_eq!(l.kind(), LineKind::Command);
        assert_eq!(l.text(), "$ help");
    }

    #[test]
    fn constructors_tag_kind() {
        assert_eq!(Line::info("x").kind(), LineKind::Info);
        assert_eq!(Line::hint("x").kind(), LineKind::Hint);
        assert_eq!(Line::error("x").kind(), LineKind::Error);
        assert_eq!(Line::success("x").kind(), LineKind::Success);
    }
}
