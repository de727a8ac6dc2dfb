use crate::data::Item;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemsIntent {
    /// A (re)fetch was requested. Moves to Loading and asks for a fetch.
    FetchStarted,
    /// The repository answered with a batch.
    ItemsLoaded { items: Vec<Item> },
    /// The repository failed. An empty message means the cause is unknown.
    LoadFailed { message: String },
    ItemClicked { item: Item },
    /// Freshly drawn random suffix; the reducer adds the display prefix.
    RandomTextGenerated { text: String },
}

impl Intent for ItemsIntent {}
