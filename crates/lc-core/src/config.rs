use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::timer::Timing;

/// Top-level configuration loaded from `~/.litigation-compare/config.toml`.
///
/// Every field has a default, so a missing file or a partial file both load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Load config from `~/.litigation-compare/config.toml`, falling back to
    /// defaults when the file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(path)
        } else {
            let cfg = Config::default();
            cfg.validate()?;
            Ok(cfg)
        }
    }

    /// Load from a specific path.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let text = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        let cfg: Config = toml::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    }

    /// Serialize config to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        self.validate()?;
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Semantic validation for settings that are not fully expressible via type checks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.timing.validate()?;
        self.display.validate()?;
        Ok(())
    }

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".litigation-compare")
            .join("config.toml")
    }
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io: {0}")]
    Io(String),
    #[error("parse: {0}")]
    Parse(String),
    #[error("validation: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Section structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit JSON log lines instead of human-readable ones.
    #[serde(default)]
    pub log_json: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "default_metrics_interval_ms")]
    pub metrics_interval_ms: u64,
    #[serde(default = "default_step_interval_ms")]
    pub step_interval_ms: u64,
    /// Redraw period of the interactive terminal.
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            metrics_interval_ms: default_metrics_interval_ms(),
            step_interval_ms: default_step_interval_ms(),
            frame_interval_ms: default_frame_interval_ms(),
        }
    }
}

fn default_metrics_interval_ms() -> u64 {
    100
}
fn default_step_interval_ms() -> u64 {
    2000
}
fn default_frame_interval_ms() -> u64 {
    50
}

impl TimingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("metrics_interval_ms", self.metrics_interval_ms),
            ("step_interval_ms", self.step_interval_ms),
            ("frame_interval_ms", self.frame_interval_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::Validation(format!(
                    "timing.{name} must be greater than zero"
                )));
            }
        }
        Ok(())
    }

    pub fn timing(&self) -> Timing {
        Timing {
            metrics_interval: Duration::from_millis(self.metrics_interval_ms),
            step_interval: Duration::from_millis(self.step_interval_ms),
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Thousands separator for grouped numbers (single character).
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: String,
    /// Render the ROI impact summary below the capabilities row.
    #[serde(default)]
    pub show_roi_summary: bool,
    /// Terminal visual effects (fade-in on mount, burst on completion).
    #[serde(default = "default_true")]
    pub effects: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            thousands_separator: default_thousands_separator(),
            show_roi_summary: false,
            effects: true,
        }
    }
}

fn default_thousands_separator() -> String {
    ",".into()
}
fn default_true() -> bool {
    true
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut chars = self.thousands_separator.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_ascii_digit() => Ok(()),
            _ => Err(ConfigError::Validation(format!(
                "display.thousands_separator must be a single non-digit character, got {:?}",
                self.thousands_separator
            ))),
        }
    }

    /// The configured separator, or `,` when the value is unusable.
    pub fn separator(&self) -> char {
        match self.validate() {
            Ok(()) => self
                .thousands_separator
                .chars()
                .next()
                .unwrap_or(crate::format::DEFAULT_SEPARATOR),
            Err(_) => crate::format::DEFAULT_SEPARATOR,
        }
    }
}
