use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Simulated remote source settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Artificial network delay in milliseconds (default: 2000).
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Items returned per fetch (default: 10).
    #[serde(default = "default_item_count")]
    pub item_count: usize,
    /// Base URL used for image items.
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw / housekeeping interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How long a snackbar stays visible in milliseconds (default: 4000).
    #[serde(default = "default_snackbar_ms")]
    pub snackbar_ms: u64,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. The TUI writes no logs when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_delay_ms() -> u64 {
    2000
}

fn default_item_count() -> usize {
    10
}

fn default_image_base_url() -> String {
    "https://picsum.photos/300/200".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_snackbar_ms() -> u64 {
    4000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            item_count: default_item_count(),
            image_base_url: default_image_base_url(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            snackbar_ms: default_snackbar_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
