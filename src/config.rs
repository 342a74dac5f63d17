//! Configuration management for termtype

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::animator::{AnimatorConfig, PreambleConfig};
use crate::samples::DEFAULT_LANGUAGE;
use crate::theme::Theme;

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "TERMTYPE_CONFIG_DIR";

const CONFIG_FILE: &str = "config.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

/// Animation timing configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    /// Base delay per character in milliseconds
    pub speed: f64,
    /// Start typing as soon as the player opens
    pub auto_start: bool,
    /// Show loading phrases before typing
    pub preamble: bool,
    /// Replacement loading-phrase pool
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phrases: Option<Vec<String>>,
    /// Fixed RNG seed for reproducible runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            speed: 40.0,
            auto_start: true,
            preamble: true,
            phrases: None,
            seed: None,
        }
    }
}

/// Look of the terminal window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppearanceConfig {
    pub theme: String,
    pub title: String,
    /// Language label shown in the title bar
    pub language: String,
    pub show_line_numbers: bool,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            title: "Terminal".to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            show_line_numbers: true,
        }
    }
}

impl Config {
    /// Directory holding the config file.
    ///
    /// `TERMTYPE_CONFIG_DIR` wins over the platform config directory.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join("termtype"))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from the default location, or defaults when missing.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a specific file, or defaults when missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to a specific file, creating its directory.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        std::fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Reject values the animator cannot run with.
    pub fn validate(&self) -> Result<()> {
        let speed = self.animation.speed;
        if !speed.is_finite() || speed <= 0.0 {
            bail!("animation.speed must be a positive number of milliseconds, got {speed}");
        }
        if Theme::find(&self.appearance.theme).is_none() {
            tracing::warn!(theme = %self.appearance.theme, "unknown theme, falling back to dark");
        }
        Ok(())
    }

    /// Resolved theme.
    pub fn theme(&self) -> Theme {
        Theme::by_name(&self.appearance.theme)
    }

    /// Settings for the animator core.
    pub fn to_animator_config(&self) -> AnimatorConfig {
        let animation = &self.animation;
        let preamble = animation.preamble.then(|| match &animation.phrases {
            Some(phrases) => PreambleConfig::default().with_phrases(phrases.iter().cloned()),
            None => PreambleConfig::default(),
        });
        AnimatorConfig {
            speed_ms: animation.speed,
            preamble,
            seed: animation.seed,
        }
    }
}
