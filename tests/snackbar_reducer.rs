use std::time::{Duration, Instant};

use usf_items::ui::mvi::Reducer;
use usf_items::ui::snackbar::{SnackbarIntent, SnackbarReducer, SnackbarState};

fn show(message: &str, expires_at: Instant) -> SnackbarIntent {
    SnackbarIntent::Show {
        message: message.to_string(),
        expires_at,
    }
}

#[test]
fn show_makes_visible() {
    let now = Instant::now();
    let (state, effects) =
        SnackbarReducer::reduce(SnackbarState::Hidden, show("hello", now + Duration::from_secs(1)));
    assert!(state.is_visible());
    assert_eq!(state.message(), Some("hello"));
    assert!(effects.is_empty());
}

#[test]
fn newer_message_replaces_current() {
    let now = Instant::now();
    let (state, _) =
        SnackbarReducer::reduce(SnackbarState::Hidden, show("first", now + Duration::from_secs(1)));
    let (state, _) = SnackbarReducer::reduce(state, show("second", now + Duration::from_secs(2)));
    assert_eq!(state.message(), Some("second"));
}

#[test]
fn tick_before_expiry_keeps_message() {
    let now = Instant::now();
    let (state, _) =
        SnackbarReducer::reduce(SnackbarState::Hidden, show("hello", now + Duration::from_secs(4)));
    let (state, _) = SnackbarReducer::reduce(
        state,
        SnackbarIntent::Tick {
            now: now + Duration::from_secs(1),
        },
    );
    assert_eq!(state.message(), Some("hello"));
}

#[test]
fn tick_at_expiry_hides() {
    let now = Instant::now();
    let expires_at = now + Duration::from_secs(4);
    let (state, _) = SnackbarReducer::reduce(SnackbarState::Hidden, show("hello", expires_at));
    let (state, _) = SnackbarReducer::reduce(state, SnackbarIntent::Tick { now: expires_at });
    assert_eq!(state, SnackbarState::Hidden);
}

#[test]
fn tick_on_hidden_is_noop() {
    let (state, _) = SnackbarReducer::reduce(
        SnackbarState::Hidden,
        SnackbarIntent::Tick {
            now: Instant::now(),
        },
    );
    assert_eq!(state, SnackbarState::Hidden);
}

#[test]
fn dismiss_hides_immediately() {
    let now = Instant::now();
    let (state, _) =
        SnackbarReducer::reduce(SnackbarState::Hidden, show("hello", now + Duration::from_secs(4)));
    let (state, _) = SnackbarReducer::reduce(state, SnackbarIntent::Dismiss);
    assert!(!state.is_visible());
    assert_eq!(state.message(), None);
}
