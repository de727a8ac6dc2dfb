use crate::ui::items::effect::ItemsEffect;
use crate::ui::items::intent::ItemsIntent;
use crate::ui::items::state::{ItemsViewState, DEFAULT_RANDOM_TEXT};
use crate::ui::mvi::Reducer;

/// Message used when a failure carries no text.
pub const UNKNOWN_ERROR: &str = "Unknown error";

pub struct ItemsReducer;

impl Reducer for ItemsReducer {
    type State = ItemsViewState;
    type Intent = ItemsIntent;
    type Effect = ItemsEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Vec<Self::Effect>) {
        match intent {
            ItemsIntent::FetchStarted => (ItemsViewState::Loading, vec![ItemsEffect::Fetch]),
            ItemsIntent::ItemsLoaded { items } => {
                let random_text = carried_random_text(state);
                (
                    ItemsViewState::Success { items, random_text },
                    vec![ItemsEffect::snackbar("Items refreshed!")],
                )
            }
            ItemsIntent::LoadFailed { message } => {
                let message = if message.is_empty() {
                    UNKNOWN_ERROR.to_string()
                } else {
                    message
                };
                let snackbar = ItemsEffect::snackbar(format!("Error: {message}"));
                let random_text = carried_random_text(state);
                (
                    ItemsViewState::Error {
                        message,
                        random_text,
                    },
                    vec![snackbar],
                )
            }
            ItemsIntent::ItemClicked { item } => {
                let snackbar = ItemsEffect::snackbar(format!("Item clicked: {}", item.name()));
                (state, vec![snackbar])
            }
            ItemsIntent::RandomTextGenerated { text } => {
                let random_text = format!("Generated: {text}");
                let next = match state {
                    ItemsViewState::Loading => ItemsViewState::Success {
                        items: Vec::new(),
                        random_text,
                    },
                    ItemsViewState::Success { items, .. } => {
                        ItemsViewState::Success { items, random_text }
                    }
                    ItemsViewState::Error { message, .. } => ItemsViewState::Error {
                        message,
                        random_text,
                    },
                };
                (next, Vec::new())
            }
        }
    }
}

/// Random text survives Success/Error transitions; Loading resets it.
fn carried_random_text(state: ItemsViewState) -> String {
    match state {
        ItemsViewState::Loading => DEFAULT_RANDOM_TEXT.to_string(),
        ItemsViewState::Success { random_text, .. } | ItemsViewState::Error { random_text, .. } => {
            random_text
        }
    }
}
