//! Configuration directory lookup following the XDG base directory layout.

use std::env;
use std::path::PathBuf;

/// File name looked up inside the config directory
pub const CONFIG_FILE: &str = "config.toml";

/// Where condense reads its configuration from
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}

impl XdgDirs {
    /// Resolve from the environment.
    ///
    /// `CONDENSE_CONFIG_DIR` is used as is; otherwise `condense/` under
    /// `XDG_CONFIG_HOME`, falling back to `~/.config`.
    pub fn new() -> Self {
        let config_dir = env::var_os("CONDENSE_CONFIG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| config_home().join("condense"));
        Self { config_dir }
    }

    /// Use `config_dir` regardless of the environment
    pub fn with_config_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    pub fn log_paths(&self) {
        tracing::debug!("Config file candidate: {:?}", self.config_file());
    }
}

fn config_home() -> PathBuf {
    match env::var_os("XDG_CONFIG_HOME") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config"),
    }
}
