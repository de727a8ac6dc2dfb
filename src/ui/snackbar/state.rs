use std::time::Instant;

use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SnackbarState {
    #[default]
    Hidden,
    Showing {
        message: String,
        expires_at: Instant,
    },
}

impl UiState for SnackbarState {}

impl SnackbarState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Hidden => None,
            Self::Showing { message, .. } => Some(message),
        }
    }
}
