/// Prefix completion against a fixed, ordered command list.

pub const COMPLETIONS: &[&str] = &[
    "help",
    "about",
    "projects",
    "contact",
    "resume",
    "theme dark",
    "theme light",
    "clear",
    "sudo hire enoch",
];

/// First entry (in list order) that starts with `input`, case-sensitive.
/// An empty input matches the first entry.
pub fn complete(input: &str) -> Option<&'static str> {
    COMPLETIONS.iter().copied().find(|c| c.starts_with(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_match_in_list_order() {
        assert_eq!(complete("th"), Some("theme dark"));
        assert_eq!(complete("theme l"), Some("theme light"));
        assert_eq!(complete("c"), Some("contact"));
        assert_eq!(complete("cl"), Some("clear"));
    }

    #[test]
    fn no_match_leaves_input() {
        assert_eq!(complete("zz"), None);
        assert_eq!(complete("Help"), None);
        assert_eq!(complete("help me"), None);
    }

    #[test]
    fn full_entry_completes_to_itself() {
        assert_eq!(complete("sudo hire enoch"), Some("sudo hire enoch"));
    }

    #[test]
    fn empty_input_takes_first_entry() {
        assert_eq!(complete(""), Some("help"));
    }
}
