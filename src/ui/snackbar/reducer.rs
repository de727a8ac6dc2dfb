use crate::ui::mvi::Reducer;
use crate::ui::snackbar::intent::SnackbarIntent;
use crate::ui::snackbar::state::SnackbarState;

/// Snackbar host: at most one message on screen, newest wins.
pub struct SnackbarReducer;

impl Reducer for SnackbarReducer {
    type State = SnackbarState;
    type Intent = SnackbarIntent;
    type Effect = std::convert::Infallible;

    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Vec<Self::Effect>) {
        let next = match intent {
            SnackbarIntent::Show {
                message,
                expires_at,
            } => SnackbarState::Showing {
                message,
                expires_at,
            },
            SnackbarIntent::Tick { now } => match state {
                SnackbarState::Showing { expires_at, .. } if now >= expires_at => {
                    SnackbarState::Hidden
                }
                other => other,
            },
            SnackbarIntent::Dismiss => SnackbarState::Hidden,
        };
        (next, Vec::new())
    }
}
