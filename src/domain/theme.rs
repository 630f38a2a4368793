/// Display theme for the whole session view.
///
/// Only two variants exist. Parsing is exact and case-sensitive:
/// `"dark"` and `"light"` are accepted, nothing else.

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn parse(s: &str) -> Option<Theme> {
        match s {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_starts_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("Light"), None);
        assert_eq!(Theme::parse("purple"), None);
        assert_eq!(Theme::parse(""), None);
    }

    #[test]
    fn name_round_trips_through_parse() {
        for t in [Theme::Dark, Theme::Light] {
            assert_eq!(Theme::parse(t.name()), Some(t));
        }
    }
}
