//! Shared test utilities and stub item sources.

#![allow(dead_code, unused_imports)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use usf_items::data::{FetchError, ImageItem, Item, ItemRepository, ItemSource, TextItem};
use usf_items::ui::items::{ItemsViewEffect, ItemsViewModel, ItemsViewState};

pub fn text_item(id: &str, name: &str, description: &str) -> Item {
    Item::Text(TextItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    })
}

pub fn image_item(id: &str, name: &str, description: &str, url: &str) -> Item {
    Item::Image(ImageItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        image_url: url.to_string(),
    })
}

/// One scripted answer of a [`StubSource`].
#[derive(Clone)]
pub struct Response {
    pub delay: Duration,
    pub result: Result<Vec<Item>, FetchError>,
}

impl Response {
    pub fn ok(items: Vec<Item>) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Ok(items),
        }
    }

    pub fn err(message: &str) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Err(FetchError::remote(message)),
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Answers fetches from a script; the last response repeats once the
/// script runs out.
pub struct StubSource {
    responses: Mutex<VecDeque<Response>>,
    last: Mutex<Option<Response>>,
    pub calls: AtomicUsize,
    /// Set once any fetch has slept through its delay.
    pub completed: Arc<AtomicBool>,
}

impl StubSource {
    pub fn new(responses: Vec<Response>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            last: Mutex::new(None),
            calls: AtomicUsize::new(0),
            completed: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn next_response(&self) -> Response {
        let next = self.responses.lock().pop_front();
        match next {
            Some(response) => {
                *self.last.lock() = Some(response.clone());
                response
            }
            None => self
                .last
                .lock()
                .clone()
                .unwrap_or_else(|| Response::ok(Vec::new())),
        }
    }
}

#[async_trait]
impl ItemSource for StubSource {
    async fn fetch_items(&self) -> Result<Vec<Item>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let response = self.next_response();
        if !response.delay.is_zero() {
            tokio::time::sleep(response.delay).await;
        }
        self.completed.store(true, Ordering::SeqCst);
        response.result
    }
}

pub fn repository(source: Arc<StubSource>) -> ItemRepository {
    ItemRepository::new(source)
}

/// Waits until the view model leaves Loading.
pub async fn settled(view_model: &ItemsViewModel) -> ItemsViewState {
    let mut rx = view_model.subscribe();
    let state = rx
        .wait_for(|state| !state.is_loading())
        .await
        .expect("view model dropped");
    state.clone()
}

pub fn snackbar(message: &str) -> ItemsViewEffect {
    ItemsViewEffect::ShowSnackbar {
        message: message.to_string(),
    }
}
