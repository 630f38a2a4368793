/// Static portfolio content: the project list plus the fixed texts the
/// interpreter prints. Nothing here is mutable.

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

impl Project {
    /// `"<name> — <description> (Tech: <t1, t2, ...>)"`
    pub fn summary(&self) -> String {
        format!(
            "{} — {} (Tech: {})",
            self.name,
            self.description,
            self.technologies.join(", "),
        )
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Freelance CRM",
        description: "Client & project dashboard, invoice PDF, protected sessions",
        technologies: &["React", "Node.js", "MongoDB"],
    },
    Project {
        name: "Scam Scanner AI",
        description: "AI-based scanner for phishing & scams (prototype)",
        technologies: &["Python", "OpenAI"],
    },
    Project {
        name: "Portfolio 3D Card",
        description: "Glowing 3D hover profile card",
        technologies: &["Three.js", "React"],
    },
];

// ── Fixed texts ──

pub const WELCOME: &str = "Welcome to Enoch's terminal portfolio. Type 'help' to get started.";
pub const WELCOME_HINT: &str = "Try: about · projects · contact · help";

pub const HELP: &str =
    "Commands: about · projects · contact · theme [dark|light] · resume · clear";
pub const ABOUT: &[&str] = &[
    "Enoch Agboola — Full-stack developer. Loves React, Node.js, Tailwind, and creative UIs.",
    "Open to freelance & full-time roles. Based in Nigeria.",
];
pub const PROJECTS_TIP: &str = "Tip: type 'projects github' to fetch live repos (placeholder).";
pub const CONTACT: &str = "Email: enoch@example.com · LinkedIn: linkedin.com/in/enoch";
pub const THEME_USAGE: &str = "Usage: theme dark | theme light";
pub const RESUME: &str = "Downloading resume...";

pub const HIRE_COMMAND: &str = "sudo hire enoch";
pub const HIRE_AUTH: &str = "Authenticating...";
pub const HIRE_DONE: &str = "🎉 Hired! Redirecting to interview scheduler...";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_format() {
        assert_eq!(
            PROJECTS[0].summary(),
            "Freelance CRM — Client & project dashboard, invoice PDF, protected sessions \
             (Tech: React, Node.js, MongoDB)"
        );
    }

    #[test]
    fn single_technology_has_no_separator() {
        let p = Project { name: "N", description: "D", technologies: &["Rust"] };
        assert_eq!(p.summary(), "N — D (Tech: Rust)");
    }
}
