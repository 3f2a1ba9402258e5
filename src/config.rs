use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::{vlog_debug, Error, Result};

/// User configuration, read once at startup from `~/.vista/vista.toml`.
/// Vista never writes it back.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Start in dark mode. The theme toggled at runtime is never written back.
    #[serde(default)]
    pub dark: bool,
    /// Page file opened when none is given on the command line.
    pub default_page: Option<String>,
}

impl Config {
    pub fn vista_dir() -> Result<PathBuf> {
        Ok(dirs::home_dir().ok_or(Error::NoHomeDir)?.join(".vista"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::vista_dir()?.join("vista.toml"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        vlog_debug!("Config::load path={}", path.display());
        if !path.exists() {
            vlog_debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(&fs::read_to_string(&path)?)?;
        vlog_debug!(
            "Config loaded: dark={}, default_page={:?}",
            config.dark,
            config.default_page
        );
        Ok(config)
    }

    /// Resolve the page to open: CLI argument wins, then config default.
    pub fn effective_page(&self, cli_page: Option<PathBuf>) -> Option<PathBuf> {
        cli_page.or_else(|| self.default_page.as_deref().map(expand_tilde))
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
