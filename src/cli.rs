use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Items screen demo: a unidirectional state-flow list view.
#[derive(Debug, Parser)]
#[command(name = "usf-items", version, about)]
pub struct Cli {
    /// Config file (default: <config dir>/usf-items/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Simulated network delay in milliseconds
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Number of items per fetch
    #[arg(long, value_name = "COUNT")]
    pub items: Option<usize>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter directive (overridden by RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Run without the terminal UI and print states and effects
    #[arg(long)]
    pub headless: bool,

    /// Comma-separated events for headless mode: refresh, generate, click:<index>
    #[arg(long, requires = "headless", value_name = "STEPS")]
    pub script: Option<String>,

    /// Print headless output as JSON lines
    #[arg(long, requires = "headless")]
    pub json: bool,
}

impl Cli {
    /// Applies command-line overrides on top of the file configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(delay_ms) = self.delay_ms {
            config.source.delay_ms = delay_ms;
        }
        if let Some(items) = self.items {
            config.source.item_count = items;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}
