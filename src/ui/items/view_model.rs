//! Presentation controller for the items screen.
//!
//! Holds the single view-state container, runs the reducer for every
//! intent, executes the effects it returns, and hands one-time view effects
//! to a single observer.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::Rng;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::data::ItemRepository;
use crate::ui::items::effect::{ItemsEffect, ItemsViewEffect};
use crate::ui::items::event::ItemsViewEvent;
use crate::ui::items::intent::ItemsIntent;
use crate::ui::items::reducer::ItemsReducer;
use crate::ui::items::state::ItemsViewState;
use crate::ui::mvi::Reducer;

/// Length of the generated random text suffix.
const RANDOM_TEXT_LEN: usize = 10;

pub type EffectReceiver = mpsc::UnboundedReceiver<ItemsViewEffect>;

pub struct ItemsViewModel {
    core: Arc<Core>,
    effects_rx: Mutex<Option<EffectReceiver>>,
}

struct Core {
    repository: ItemRepository,
    state: watch::Sender<ItemsViewState>,
    effects: mpsc::UnboundedSender<ItemsViewEffect>,
    /// Also serializes dispatch: every reduction runs under this lock.
    fetch: Mutex<FetchSlot>,
}

#[derive(Default)]
struct FetchSlot {
    generation: u64,
    task: Option<JoinHandle<()>>,
}

impl ItemsViewModel {
    /// Creates the view model in `Loading` and starts the initial fetch.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(repository: ItemRepository) -> Self {
        let (state, _) = watch::channel(ItemsViewState::default());
        let (effects, effects_rx) = mpsc::unbounded_channel();
        let core = Arc::new(Core {
            repository,
            state,
            effects,
            fetch: Mutex::new(FetchSlot::default()),
        });
        core.dispatch(ItemsIntent::FetchStarted);
        Self {
            core,
            effects_rx: Mutex::new(Some(effects_rx)),
        }
    }

    pub fn on_event(&self, event: ItemsViewEvent) {
        tracing::debug!(?event, "View event");
        let intent = match event {
            ItemsViewEvent::RefreshItems => ItemsIntent::FetchStarted,
            ItemsViewEvent::ItemClicked(item) => ItemsIntent::ItemClicked { item },
            ItemsViewEvent::GenerateRandomText => ItemsIntent::RandomTextGenerated {
                text: random_text(&mut rand::thread_rng()),
            },
        };
        self.core.dispatch(intent);
    }

    /// Snapshot of the current view state.
    pub fn view_state(&self) -> ItemsViewState {
        self.core.state.borrow().clone()
    }

    /// Observable view state; the receiver sees the current value first.
    pub fn subscribe(&self) -> watch::Receiver<ItemsViewState> {
        self.core.state.subscribe()
    }

    /// Hands out the one-time effect stream.
    ///
    /// Only the first caller gets a receiver. Effects emitted before that
    /// are buffered and delivered in order.
    pub fn take_effects(&self) -> Option<EffectReceiver> {
        self.effects_rx.lock().take()
    }

    /// Whether a fetch task is still running.
    pub fn is_fetching(&self) -> bool {
        self.core
            .fetch
            .lock()
            .task
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }
}

impl Drop for ItemsViewModel {
    fn drop(&mut self) {
        if let Some(task) = self.core.fetch.lock().task.take() {
            tracing::debug!("Cancelling in-flight fetch");
            task.abort();
        }
    }
}

impl Core {
    fn dispatch(self: &Arc<Self>, intent: ItemsIntent) {
        let mut fetch = self.fetch.lock();
        self.apply(&mut fetch, intent);
    }

    /// Reduces one intent. View effects of a transition are enqueued before
    /// its state is published.
    fn apply(self: &Arc<Self>, fetch: &mut FetchSlot, intent: ItemsIntent) {
        let current = self.state.borrow().clone();
        let (next, effects) = ItemsReducer::reduce(current, intent);

        for effect in effects {
            match effect {
                ItemsEffect::Fetch => self.start_fetch(fetch),
                ItemsEffect::View(effect) => {
                    tracing::debug!(?effect, "View effect");
                    if self.effects.send(effect).is_err() {
                        tracing::trace!("View effect dropped (receiver gone)");
                    }
                }
            }
        }

        self.state.send_if_modified(|state| {
            if *state == next {
                return false;
            }
            *state = next;
            true
        });
    }

    /// Spawns a fetch that supersedes any fetch still in flight.
    fn start_fetch(self: &Arc<Self>, fetch: &mut FetchSlot) {
        fetch.generation += 1;
        let generation = fetch.generation;
        if let Some(previous) = fetch.task.take() {
            tracing::debug!(generation, "Superseding in-flight fetch");
            previous.abort();
        }

        let core = Arc::downgrade(self);
        let repository = self.repository.clone();
        fetch.task = Some(tokio::spawn(async move {
            let result = repository.get_items().await;
            let Some(core) = core.upgrade() else {
                return;
            };
            let intent = match result {
                Ok(items) => ItemsIntent::ItemsLoaded { items },
                Err(err) => ItemsIntent::LoadFailed {
                    message: err.to_string(),
                },
            };
            core.complete_fetch(generation, intent);
        }));
    }

    fn complete_fetch(self: &Arc<Self>, generation: u64, intent: ItemsIntent) {
        let mut fetch = self.fetch.lock();
        if fetch.generation != generation {
            tracing::trace!(generation, current = fetch.generation, "Stale fetch result ignored");
            return;
        }
        fetch.task = None;
        self.apply(&mut fetch, intent);
    }
}

/// Draws `RANDOM_TEXT_LEN` lowercase ASCII letters.
pub fn random_text<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..RANDOM_TEXT_LEN)
        .map(|_| rng.gen_range('a'..='z'))
        .collect()
}
