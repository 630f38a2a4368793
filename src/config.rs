/// External configuration loader.
///
/// Reads `config.toml` from an explicit path, or else from the
/// executable's directory, or else the CWD. Falls back to defaults if the
/// file is missing, unreadable, or incomplete.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::session::state::SessionConfig;

// ── Public Config Struct ──

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub timing: TimingConfig,
    pub intro: bool,
    pub log_file: PathBuf,
    pub log_level: log::LevelFilter,
}

#[derive(Clone, Debug)]
pub struct TimingConfig {
    pub frame_ms: u64,
    pub typewriter_ms: u64,
    pub hire_delay_ms: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} parse error: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    timing: TomlTiming,
    #[serde(default)]
    general: TomlGeneral,
}

#[derive(Deserialize, Debug)]
struct TomlTiming {
    #[serde(default = "default_frame")]
    frame_ms: u64,
    #[serde(default = "default_typewriter")]
    typewriter_ms: u64,
    #[serde(default = "default_hire_delay")]
    hire_delay_ms: u64,
}

#[derive(Deserialize, Debug)]
struct TomlGeneral {
    #[serde(default = "default_intro")]
    intro: bool,
    #[serde(default = "default_log_file")]
    log_file: String,
    #[serde(default = "default_log_level")]
    log_level: String,
}

// ── Defaults ──

fn default_frame() -> u64 { 16 }
fn default_typewriter() -> u64 { 15 }
fn default_hire_delay() -> u64 { 1000 }
fn default_intro() -> bool { true }
fn default_log_file() -> String { "termfolio.log".into() }
fn default_log_level() -> String { "info".into() }

impl Default for TomlTiming {
    fn default() -> Self {
        TomlTiming {
            frame_ms: default_frame(),
            typewriter_ms: default_typewriter(),
            hire_delay_ms: default_hire_delay(),
        }
    }
}

impl Default for TomlGeneral {
    fn default() -> Self {
        TomlGeneral {
            intro: default_intro(),
            log_file: default_log_file(),
            log_level: default_log_level(),
        }
    }
}

// ── Loading ──

/// A config plus the warnings collected while loading it. Logging is not
/// set up yet at load time (the log file path comes from here), so the
/// caller reports these once the logger exists.
pub struct Loaded {
    pub config: AppConfig,
    pub warnings: Vec<String>,
}

impl AppConfig {
    /// Load config. `explicit` wins over the search path; missing file or
    /// missing keys fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Loaded {
        let mut warnings = vec![];
        let toml_cfg = match explicit {
            Some(path) => match read_toml(path) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warnings.push(format!("{e}; using default settings"));
                    TomlConfig::default()
                }
            },
            None => search_toml(&candidate_dirs(), &mut warnings),
        };
        let config = AppConfig::from_toml(toml_cfg, &mut warnings);
        Loaded { config, warnings }
    }

    fn from_toml(cfg: TomlConfig, warnings: &mut Vec<String>) -> Self {
        let log_level = cfg.general.log_level.parse().unwrap_or_else(|_| {
            warnings.push(format!(
                "unknown log_level '{}', using info",
                cfg.general.log_level
            ));
            log::LevelFilter::Info
        });

        AppConfig {
            timing: TimingConfig {
                frame_ms: cfg.timing.frame_ms.max(1),
                typewriter_ms: cfg.timing.typewriter_ms,
                hire_delay_ms: cfg.timing.hire_delay_ms,
            },
            intro: cfg.general.intro,
            log_file: PathBuf::from(cfg.general.log_file),
            log_level,
        }
    }

    pub fn frame_sleep(&self) -> Duration {
        Duration::from_millis(self.timing.frame_ms)
    }

    pub fn session(&self) -> SessionConfig {
        SessionConfig {
            typewriter_interval: Duration::from_millis(self.timing.typewriter_ms),
            hire_delay: Duration::from_millis(self.timing.hire_delay_ms),
            intro: self.intro,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig::from_toml(TomlConfig::default(), &mut vec![])
    }
}

/// Candidate directories to search: exe dir + CWD (deduplicated).
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    if let Ok(exe) = std::env::current_exe() {
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.iter().any(|d| d == &cwd) {
            dirs.push(cwd);
        }
    }

    if dirs.is_empty() {
        dirs.push(PathBuf::from("."));
    }

    dirs
}

fn read_toml(path: &Path) -> Result<TomlConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// First config.toml found in `search_dirs`. A file that exists but does
/// not parse stops the search and yields defaults.
fn search_toml(search_dirs: &[PathBuf], warnings: &mut Vec<String>) -> TomlConfig {
    for dir in search_dirs {
        let path = dir.join("config.toml");
        if !path.exists() {
            continue;
        }
        match read_toml(&path) {
            Ok(cfg) => return cfg,
            Err(e @ ConfigError::Parse { .. }) => {
                warnings.push(format!("{e}; using default settings"));
                return TomlConfig::default();
            }
            Err(e) => warnings.push(e.to_string()),
        }
    }
    TomlConfig::default()
}
