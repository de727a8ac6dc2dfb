use std::time::Instant;

use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SnackbarIntent {
    /// Show a message, replacing whatever is on screen.
    Show { message: String, expires_at: Instant },
    /// Clock advanced; hides the snackbar once it has expired.
    Tick { now: Instant },
    Dismiss,
}

impl Intent for SnackbarIntent {}
