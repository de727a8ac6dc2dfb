use serde::Serialize;

use crate::data::Item;
use crate::ui::mvi::UiState;

/// Random text shown until the user generates one.
pub const DEFAULT_RANDOM_TEXT: &str = "Press the button for random text";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ItemsViewState {
    #[default]
    Loading,
    Success {
        items: Vec<Item>,
        random_text: String,
    },
    Error {
        message: String,
        random_text: String,
    },
}

impl UiState for ItemsViewState {}

impl ItemsViewState {
    pub fn success(items: Vec<Item>) -> Self {
        Self::Success {
            items,
            random_text: DEFAULT_RANDOM_TEXT.to_string(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            random_text: DEFAULT_RANDOM_TEXT.to_string(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Items on screen; empty unless the state is `Success`.
    pub fn items(&self) -> &[Item] {
        match self {
            Self::Success { items, .. } => items,
            _ => &[],
        }
    }

    pub fn random_text(&self) -> Option<&str> {
        match self {
            Self::Loading => None,
            Self::Success { random_text, .. } | Self::Error { random_text, .. } => {
                Some(random_text)
            }
        }
    }
}
