use std::time::{Duration, Instant};

use tokio::sync::watch;

use crate::ui::items::{
    EffectReceiver, ItemsViewEffect, ItemsViewEvent, ItemsViewModel, ItemsViewState,
};
use crate::ui::mvi::Reducer;
use crate::ui::snackbar::{SnackbarIntent, SnackbarReducer, SnackbarState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        let (next, _) = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
        $self.$field = next;
    };
}

const SPINNER_FRAMES: usize = 4;

pub struct App {
    should_quit: bool,
    view_model: ItemsViewModel,
    state_rx: watch::Receiver<ItemsViewState>,
    /// Last state pulled from the view model; what gets rendered.
    view_state: ItemsViewState,
    effects: Option<EffectReceiver>,
    /// Snackbar host state (MVI pattern).
    pub snackbar: SnackbarState,
    snackbar_duration: Duration,
    selection: usize,
    spinner_frame: usize,
}

impl App {
    pub fn new(view_model: ItemsViewModel, snackbar_duration: Duration) -> Self {
        let mut state_rx = view_model.subscribe();
        let view_state = state_rx.borrow_and_update().clone();
        let effects = view_model.take_effects();
        Self {
            should_quit: false,
            view_model,
            state_rx,
            view_state,
            effects,
            snackbar: SnackbarState::default(),
            snackbar_duration,
            selection: 0,
            spinner_frame: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn view_state(&self) -> &ItemsViewState {
        &self.view_state
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    /// Pulls the latest state and pending effects after an input event.
    pub fn sync(&mut self, now: Instant) {
        self.sync_state();
        self.drain_effects(now);
    }

    /// Periodic housekeeping: sync, expire the snackbar, advance the spinner.
    pub fn on_tick(&mut self, now: Instant) {
        self.sync(now);
        self.dispatch_snackbar(SnackbarIntent::Tick { now });
        if self.view_state.is_loading() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES;
        }
    }

    pub fn refresh(&mut self) {
        self.view_model.on_event(ItemsViewEvent::RefreshItems);
        self.sync_state();
    }

    pub fn generate_random_text(&mut self) {
        self.view_model.on_event(ItemsViewEvent::GenerateRandomText);
        self.sync_state();
    }

    /// Moves the list cursor, wrapping at both ends.
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.view_state.items().len();
        if len == 0 {
            return;
        }
        let len = len as isize;
        self.selection = (self.selection as isize + delta).rem_euclid(len) as usize;
    }

    pub fn click_selected(&mut self) {
        if let Some(item) = self.view_state.items().get(self.selection).cloned() {
            self.view_model.on_event(ItemsViewEvent::ItemClicked(item));
        }
    }

    pub fn dismiss_snackbar(&mut self) -> bool {
        if !self.snackbar.is_visible() {
            return false;
        }
        self.dispatch_snackbar(SnackbarIntent::Dismiss);
        true
    }

    pub fn dispatch_snackbar(&mut self, intent: SnackbarIntent) {
        dispatch_mvi!(self, snackbar, SnackbarReducer, intent);
    }

    fn sync_state(&mut self) {
        if !self.state_rx.has_changed().unwrap_or(false) {
            return;
        }
        self.view_state = self.state_rx.borrow_and_update().clone();
        // Loading has no items; keep the cursor for the next batch.
        if self.view_state.is_loading() {
            return;
        }
        let len = self.view_state.items().len();
        if self.selection >= len {
            self.selection = len.saturating_sub(1);
        }
    }

    fn drain_effects(&mut self, now: Instant) {
        let Some(effects) = self.effects.as_mut() else {
            return;
        };
        let mut pending = Vec::new();
        while let Ok(effect) = effects.try_recv() {
            pending.push(effect);
        }
        for effect in pending {
            match effect {
                ItemsViewEffect::ShowSnackbar { message } => {
                    self.dispatch_snackbar(SnackbarIntent::Show {
                        message,
                        expires_at: now + self.snackbar_duration,
                    });
                }
                ItemsViewEffect::NavigateToDetail { item_id } => {
                    tracing::info!(%item_id, "Detail navigation requested (no detail screen)");
                }
            }
        }
    }
}
