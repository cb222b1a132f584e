//! Configuration data model.
//!
//! Read-only: the game never writes the file back, so only `Deserialize` is derived.
//! Every field has a sensible default so the game runs without a config file.

use serde::Deserialize;
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where words come from and how they are picked.
#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// Plain text word list, one word per line. Relative paths resolve
    /// against the working directory.
    #[serde(default = "default_word_file")]
    pub word_file: PathBuf,
    /// Fixed seed for word selection. Random when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_file: default_word_file(),
            seed: None,
        }
    }
}

/// UI behavior settings.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Capture the mouse so the New Game button can be clicked.
    #[serde(default = "default_true")]
    pub mouse: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            mouse: true,
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_level(),
        }
    }
}

fn default_word_file() -> PathBuf {
    PathBuf::from("words.txt")
}
fn default_true() -> bool {
    true
}
fn default_tick_rate() -> u64 {
    50
}
fn default_log_dir() -> String {
    "~/.local/share/hangman/logs".to_string()
}
fn default_level() -> String {
    "info".to_string()
}
