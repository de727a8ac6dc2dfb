mod intent;
mod reducer;
mod state;

pub use intent::SnackbarIntent;
pub use reducer::SnackbarReducer;
pub use state::SnackbarState;
