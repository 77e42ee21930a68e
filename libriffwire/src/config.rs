//! Configuration management for Riffwire
//!
//! Layered the usual way: built-in defaults, overridden by an optional
//! toml file at `~/.config/riffwire/config.toml` (or `RIFFWIRE_CONFIG`).
//! A missing file means defaults; a malformed file is an error.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::theme::{ColorName, Rgb, Theme};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiSection,
    pub search: SearchSection,
    pub assets: AssetsSection,
    /// Per-name color overrides, e.g. `primary = "#CC0000"`
    pub theme: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Event-loop tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for UiSection {
    fn default() -> Self {
        Self { tick_rate_ms: 100 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSection {
    /// Simulated backend latency in milliseconds
    pub settle_ms: u64,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self { settle_ms: 500 }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsSection {
    /// Path to the ASCII-art banner; tilde-expanded
    pub banner: Option<String>,
}

impl Config {
    /// Load configuration from the default location
    ///
    /// An absent file yields the defaults; read or parse failures are
    /// surfaced as errors.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }

    /// Resolve the theme: the stock palette with this config's overrides
    pub fn theme(&self) -> Result<Theme> {
        let mut theme = Theme::default();
        for (name, hex) in &self.theme {
            let color = ColorName::from_str(name)?;
            let rgb = Rgb::from_hex(hex)?;
            theme.set(color, rgb);
        }
        Ok(theme)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.search.settle_ms)
    }

    /// The banner path, tilde-expanded; falls back to the data-dir default
    pub fn banner_path(&self) -> Option<PathBuf> {
        match &self.assets.banner {
            Some(raw) => Some(PathBuf::from(shellexpand::tilde(raw).to_string())),
            None => crate::assets::AssetLoader::default_banner_path(),
        }
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("RIFFWIRE_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("riffwire").join("config.toml"))
}

/// Resolve the data directory path following XDG Base Directory spec
pub fn resolve_data_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| ConfigError::MissingField("data directory".to_string()))?;

    Ok(data_dir.join("riffwire"))
}
