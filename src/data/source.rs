use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::config::SourceConfig;
use crate::data::{FetchError, ImageItem, Item, TextItem};

/// Something that can produce a batch of items.
#[async_trait]
pub trait ItemSource: Send + Sync {
    async fn fetch_items(&self) -> Result<Vec<Item>, FetchError>;
}

/// Tunables for [`SimulatedRemoteSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSettings {
    /// Artificial latency before the batch is returned.
    pub delay: Duration,
    /// Number of items per batch.
    pub item_count: usize,
    /// Base URL for image items; `?random=<n>` is appended.
    pub image_base_url: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        SourceSettings::from(&SourceConfig::default())
    }
}

impl From<&SourceConfig> for SourceSettings {
    fn from(config: &SourceConfig) -> Self {
        Self {
            delay: Duration::from_millis(config.delay_ms),
            item_count: config.item_count,
            image_base_url: config.image_base_url.clone(),
        }
    }
}

/// Stand-in for a remote API: waits, then returns a synthetic batch.
///
/// Even positions yield text items, odd positions yield image items.
/// Every call mints fresh UUIDs, so ids are unique within a batch.
pub struct SimulatedRemoteSource {
    settings: SourceSettings,
}

impl SimulatedRemoteSource {
    pub fn new(settings: SourceSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &SourceSettings {
        &self.settings
    }

    fn build_batch(&self) -> Vec<Item> {
        (0..self.settings.item_count)
            .map(|index| {
                let ordinal = index + 1;
                let id = Uuid::new_v4().to_string();
                if index % 2 == 0 {
                    Item::Text(TextItem {
                        id,
                        name: format!("Text Item {ordinal}"),
                        description: format!(
                            "This is a text-only item with description {ordinal}"
                        ),
                    })
                } else {
                    Item::Image(ImageItem {
                        id,
                        name: format!("Image Item {ordinal}"),
                        description: format!("This item has an image with description {ordinal}"),
                        image_url: format!("{}?random={ordinal}", self.settings.image_base_url),
                    })
                }
            })
            .collect()
    }
}

impl Default for SimulatedRemoteSource {
    fn default() -> Self {
        Self::new(SourceSettings::default())
    }
}

#[async_trait]
impl ItemSource for SimulatedRemoteSource {
    async fn fetch_items(&self) -> Result<Vec<Item>, FetchError> {
        tracing::trace!(delay_ms = self.settings.delay.as_millis() as u64, "Simulating network delay");
        tokio::time::sleep(self.settings.delay).await;
        Ok(self.build_batch())
    }
}
