/// Entry point and session loop.

mod config;
mod domain;
mod session;
mod ui;

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;

use config::AppConfig;
use session::event::SessionEvent;
use session::state::Session;
use ui::input::{Action, InputState};
use ui::renderer::Renderer;

#[derive(Parser, Debug)]
#[command(name = "termfolio", version, about = "A portfolio you browse like a shell")]
struct Cli {
    /// Path to config.toml (default: next to the binary, then the CWD)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip the typewriter intro
    #[arg(long)]
    no_intro: bool,

    /// Override the configured log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<log::LevelFilter>,

    /// Override the configured log file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = AppConfig::load(cli.config.as_deref());
    let mut config = loaded.config;
    if cli.no_intro {
        config.intro = false;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(path) = cli.log_file {
        config.log_file = path;
    }

    init_logging(&config.log_file, config.log_level)?;
    for w in &loaded.warnings {
        log::warn!("config: {w}");
    }
    log::info!("session start: {:?}", config.timing);

    let mut session = Session::new(&config.session(), Instant::now());
    let mut renderer = Renderer::new();

    renderer.init().context("terminal init failed")?;

    let result = session_loop(&mut session, &mut renderer, config.frame_sleep());

    // Teardown order: stop timers first, then hand the terminal back.
    for event in session.shutdown() {
        log_event(&event);
    }
    if let Err(e) = renderer.cleanup() {
        log::error!("terminal cleanup failed: {e}");
        eprintln!("Terminal cleanup failed: {e}");
    }

    if let Err(e) = &result {
        log::error!("session error: {e}");
    }
    log::info!("session end: {} commands", session.history().entries().len());

    result.context("session loop failed")
}

/// Log to a file: the screen belongs to the renderer.
fn init_logging(path: &Path, level: log::LevelFilter) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("could not open log file {}", path.display()))?;

    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn session_loop(
    session: &mut Session,
    renderer: &mut Renderer,
    frame_sleep: Duration,
) -> std::io::Result<()> {
    let mut kb = InputState::new();

    loop {
        kb.drain_events()?;

        for &action in &kb.actions {
            if action == Action::Quit {
                return Ok(());
            }
            for event in apply_action(session, action, Instant::now()) {
                log_event(&event);
            }
        }

        for event in session.tick(Instant::now()) {
            log_event(&event);
        }

        renderer.render(session)?;
        std::thread::sleep(frame_sleep);
    }
}

/// Route one key action into the session.
fn apply_action(session: &mut Session, action: Action, now: Instant) -> Vec<SessionEvent> {
    match action {
        Action::Submit => return session.submit(now),
        Action::HistoryPrev => session.recall_previous(),
        Action::HistoryNext => session.recall_next(),
        Action::Complete => session.complete(),
        Action::Insert(c) => session.prompt_mut().insert(c),
        Action::Backspace => session.prompt_mut().backspace(),
        Action::Delete => session.prompt_mut().delete(),
        Action::Left => session.prompt_mut().left(),
        Action::Right => session.prompt_mut().right(),
        Action::Home => session.prompt_mut().home(),
        Action::End => session.prompt_mut().end(),
        Action::ClearField => session.prompt_mut().clear(),
        Action::Quit => {}
    }
    vec![]
}

fn log_event(event: &SessionEvent) {
    match event {
        SessionEvent::CommandSubmitted { command } => log::info!("command: {command}"),
        SessionEvent::UnknownCommand { token } => log::info!("unknown command: {token}"),
        SessionEvent::ThemeChanged { theme } => log::info!("theme -> {}", theme.name()),
        SessionEvent::ThemeRejected => log::debug!("theme: bad argument"),
        SessionEvent::BufferCleared => log::debug!("buffer cleared"),
        SessionEvent::HireScheduled { delay } => log::debug!("easter egg, follow-up in {delay:?}"),
        SessionEvent::DelayedLineFired => log::debug!("delayed line fired"),
        SessionEvent::IntroFinished => log::debug!("intro finished"),
        SessionEvent::TimersCancelled { count } => {
            log::debug!("shutdown: {count} timer(s) cancelled")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use session::state::SessionConfig;

    fn ready(now: Instant) -> Session {
        let cfg = SessionConfig { intro: false, ..SessionConfig::default() };
        let mut s = Session::new(&cfg, now);
        s.tick(now);
        s
    }

    fn type_str(s: &mut Session, text: &str, now: Instant) {
        for c in text.chars() {
            apply_action(s, Action::Insert(c), now);
        }
    }

    #[test]
    fn typed_command_submits_through_actions() {
        let now = Instant::now();
        let mut s = ready(now);
        type_str(&mut s, "theme light", now);
        let events = apply_action(&mut s, Action::Submit, now);
        let changed = SessionEvent::ThemeChanged { theme: domain::theme::Theme::Light };
        assert!(events.contains(&changed));
        assert!(s.prompt().is_empty());
    }

    #[test]
    fn tab_then_enter() {
        let now = Instant::now();
        let mut s = ready(now);
        type_str(&mut s, "proj", now);
        apply_action(&mut s, Action::Complete, now);
        assert_eq!(s.prompt().text(), "projects");
        apply_action(&mut s, Action::Submit, now);
        assert_eq!(s.history().entries(), ["projects"]);
    }

    #[test]
    fn up_arrow_recalls_and_edits() {
        let now = Instant::now();
        let mut s = ready(now);
        type_str(&mut s, "help", now);
        apply_action(&mut s, Action::Submit, now);
        apply_action(&mut s, Action::HistoryPrev, now);
        apply_action(&mut s, Action::Backspace, now);
        assert_eq!(s.prompt().text(), "hel");
        apply_action(&mut s, Action::ClearField, now);
        assert!(s.prompt().is_empty());
    }
}
