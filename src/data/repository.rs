use std::sync::Arc;

use crate::data::{FetchError, Item, ItemSource};

/// Single entry point the view model uses to obtain items.
///
/// Forwards to the configured source. A caching or offline-first app would
/// decide here between local and remote data.
#[derive(Clone)]
pub struct ItemRepository {
    source: Arc<dyn ItemSource>,
}

impl ItemRepository {
    pub fn new(source: Arc<dyn ItemSource>) -> Self {
        Self { source }
    }

    pub async fn get_items(&self) -> Result<Vec<Item>, FetchError> {
        tracing::debug!("Fetching items from source");
        match self.source.fetch_items().await {
            Ok(items) => {
                tracing::info!(count = items.len(), "Items fetched");
                Ok(items)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Item fetch failed");
                Err(err)
            }
        }
    }
}
