use serde::Serialize;

use crate::ui::mvi::Effect;

/// One-time UI actions delivered to the screen's observer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum ItemsViewEffect {
    ShowSnackbar { message: String },
    /// Reserved for a detail screen; nothing emits it yet.
    NavigateToDetail { item_id: String },
}

/// Everything a reduction can ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemsEffect {
    /// Start a repository fetch and feed the result back as an intent.
    Fetch,
    /// Forward to the view.
    View(ItemsViewEffect),
}

impl Effect for ItemsEffect {}

impl ItemsEffect {
    pub fn snackbar(message: impl Into<String>) -> Self {
        ItemsEffect::View(ItemsViewEffect::ShowSnackbar {
            message: message.into(),
        })
    }
}
