mod effect;
mod event;
mod intent;
mod reducer;
mod state;
mod view_model;

pub use effect::{ItemsEffect, ItemsViewEffect};
pub use event::ItemsViewEvent;
pub use intent::ItemsIntent;
pub use reducer::{ItemsReducer, UNKNOWN_ERROR};
pub use state::{ItemsViewState, DEFAULT_RANDOM_TEXT};
pub use view_model::{random_text, EffectReceiver, ItemsViewModel};
