//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Settings for the winning-line flash.
#[derive(Debug, Clone, Copy, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashSettings {
    /// Milliseconds between alpha toggles.
    interval_ms: u64,
    /// Total flash time in milliseconds.
    duration_ms: u64,
    /// Alpha used for the dim phase (0.0 - 1.0).
    dim_alpha: f32,
}

impl FlashSettings {
    /// Creates flash settings.
    #[instrument]
    pub fn new(interval_ms: u64, duration_ms: u64, dim_alpha: f32) -> Self {
        Self {
            interval_ms,
            duration_ms,
            dim_alpha,
        }
    }

    /// Toggle interval.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Total flash duration.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    #[instrument]
    fn validate(&self) -> Result<(), ConfigError> {
        if self.interval_ms == 0 {
            return Err(ConfigError::new("flash.interval_ms must be greater than 0"));
        }
        if !(0.0..=1.0).contains(&self.dim_alpha) {
            return Err(ConfigError::new(format!(
                "flash.dim_alpha must be within 0.0..=1.0, got {}",
                self.dim_alpha
            )));
        }
        Ok(())
    }
}

impl Default for FlashSettings {
    fn default() -> Self {
        Self::new(100, 2000, 0.3)
    }
}

/// Top-level configuration, loaded from TOML.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding `click.wav`, `win.wav` and `draw.wav`.
    assets_dir: PathBuf,
    /// Whether sound cues are played at all.
    sound: bool,
    /// File receiving the tracing output.
    log_file: PathBuf,
    /// Winning-line flash settings.
    flash: FlashSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            sound: true,
            log_file: PathBuf::from("tictactoe.log"),
            flash: FlashSettings::default(),
        }
    }
}

impl AppConfig {
    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.flash.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(assets_dir = %config.assets_dir.display(), sound = config.sound, "Config loaded");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the assets directory.
    pub fn set_assets_dir(&mut self, dir: PathBuf) {
        self.assets_dir = dir;
    }

    /// Overrides the log file.
    pub fn set_log_file(&mut self, path: PathBuf) {
        self.log_file = path;
    }

    /// Turns sound off.
    pub fn mute(&mut self) {
        self.sound = false;
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
