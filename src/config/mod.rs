mod loader;
mod types;

pub use loader::{ConfigError, MAX_ITEM_COUNT};
pub use types::{Config, LoggingConfig, SourceConfig, UiConfig};
