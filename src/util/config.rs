//! User configuration
//!
//! User-level configuration with defaults for every field.
//!
//! # Configuration hierarchy
//!
//! ```text
//! Priority (high -> low):
//! 1. CLI arguments
//! 2. User-level (~/.config/bigcalc/config.toml)
//! 3. Default values
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::core::AngleMode;

/// User-level configuration for bigcalc
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserConfig {
    /// REPL settings
    #[serde(default)]
    pub repl: ReplSettings,
    /// Calculator settings
    #[serde(default)]
    pub calc: CalcSettings,
}

/// REPL configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplSettings {
    /// Prompt string
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Maximum history entries kept by the editor
    #[serde(default = "default_history_size")]
    pub history_size: usize,
    /// Use VI editing mode
    #[serde(default)]
    pub vi_mode: bool,
    /// History file path; defaults to `history.txt` in the config dir
    #[serde(default)]
    pub history_file: Option<PathBuf>,
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_history_size() -> usize {
    256
}

impl Default for ReplSettings {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            history_size: default_history_size(),
            vi_mode: false,
            history_file: None,
        }
    }
}

/// Calculator configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalcSettings {
    /// Default angle mode: "rad" or "deg"
    #[serde(default = "default_angle_mode")]
    pub angle_mode: String,
}

fn default_angle_mode() -> String {
    "rad".to_string()
}

impl Default for CalcSettings {
    fn default() -> Self {
        Self {
            angle_mode: default_angle_mode(),
        }
    }
}

impl CalcSettings {
    /// Parse the configured angle mode; anything but "deg" means radians.
    pub fn angle_mode(&self) -> AngleMode {
        if self.angle_mode.eq_ignore_ascii_case("deg") {
            AngleMode::Degrees
        } else {
            AngleMode::Radians
        }
    }
}

/// Get the config directory (~/.config/bigcalc)
pub fn get_config_dir() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home).join(".config").join("bigcalc"));
    }

    // On Windows, try %APPDATA%
    if let Ok(appdata) = std::env::var("APPDATA") {
        return Some(PathBuf::from(appdata).join("bigcalc"));
    }

    None
}

/// Get the user config file path (~/.config/bigcalc/config.toml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// Default history file path (~/.config/bigcalc/history.txt)
pub fn get_history_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("history.txt"))
}

/// Load user-level configuration.
/// Returns defaults if no config file exists.
pub fn load_user_config() -> Result<UserConfig, ConfigError> {
    let path = match get_config_path() {
        Some(p) => p,
        None => return Ok(UserConfig::default()),
    };

    if !path.exists() {
        return Ok(UserConfig::default());
    }

    let content = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Save user-level configuration
pub fn save_user_config(config: &UserConfig) -> Result<(), ConfigError> {
    let dir = get_config_dir().ok_or(ConfigError::NoConfigDir)?;
    let path = dir.join("config.toml");

    if !dir.exists() {
        fs::create_dir_all(&dir).map_err(ConfigError::Io)?;
    }

    let content = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;
    fs::write(&path, content).map_err(ConfigError::Io)?;

    Ok(())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(toml::de::Error),

    #[error("Config serialize error: {0}")]
    Serialize(toml::ser::Error),

    #[error("No config directory available")]
    NoConfigDir,
}
