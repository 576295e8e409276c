//! Optional user configuration for toolbelt.
//!
//! # Location
//!
//! 1. `--config <path>` (or `TOOLBELT_CONFIG`)
//! 2. `XDG_CONFIG_HOME/toolbelt/config.toml` (if set)
//! 3. Platform config dir, e.g. `~/.config/toolbelt/config.toml`
//!
//! A missing file is not an error; defaults are used instead.
//!
//! # Format
//!
//! ```toml
//! color = true
//!
//! [spinner]
//! interval_ms = 80
//! max_message_length = 60
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use termkit::spinner::{DEFAULT_INTERVAL, DEFAULT_MAX_MESSAGE_LENGTH};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Whether to emit colors (`NO_COLOR` still wins)
    pub color: bool,
    pub spinner: SpinnerSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpinnerSettings {
    pub interval_ms: u64,
    pub max_message_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            spinner: SpinnerSettings::default(),
        }
    }
}

impl Default for SpinnerSettings {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL.as_millis() as u64,
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
        }
    }
}

impl SpinnerSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Config {
    /// Load from `explicit` if given, otherwise from the default location.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_path() {
                Some(path) => path,
                None => {
                    log::debug!("No config directory available, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        if !path.exists() {
            if explicit.is_some() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            log::debug!("Config file {} does not exist, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Parse the file at `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Invalid config format in {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Default config file path, if a config directory can be determined.
fn default_path() -> Option<PathBuf> {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg_config).join("toolbelt").join(CONFIG_FILE);
        log::debug!("Using XDG_CONFIG_HOME: {}", path.display());
        return Some(path);
    }
    dirs::config_dir().map(|dir| dir.join("toolbelt").join(CONFIG_FILE))
}
