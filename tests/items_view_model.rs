//! Tests for the items view model: state flow, effects, and fetch lifecycle.

mod common;

use common::*;
use std::sync::atomic::Ordering;
use std::time::Duration;
use usf_items::ui::items::{
    ItemsViewEffect, ItemsViewEvent, ItemsViewModel, ItemsViewState, DEFAULT_RANDOM_TEXT,
};

#[tokio::test]
async fn initial_state_is_loading_then_success_with_items() {
    let items = vec![
        text_item("1", "Test Item 1", "Description 1"),
        image_item("2", "Test Item 2", "Description 2", "url2"),
    ];
    let source = StubSource::new(vec![Response::ok(items.clone())]);
    let view_model = ItemsViewModel::new(repository(source.clone()));

    assert_eq!(view_model.view_state(), ItemsViewState::Loading);

    let state = settled(&view_model).await;
    assert_eq!(
        state,
        ItemsViewState::Success {
            items,
            random_text: DEFAULT_RANDOM_TEXT.to_string(),
        }
    );
    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn refresh_goes_through_loading_to_new_items() {
    let initial = vec![text_item("initial", "Initial Item", "Initial Desc")];
    let refreshed = vec![image_item("refreshed", "Refreshed Item", "Refreshed Desc", "url")];
    let source = StubSource::new(vec![
        Response::ok(initial.clone()),
        Response::ok(refreshed.clone()),
    ]);
    let view_model = ItemsViewModel::new(repository(source));
    let mut effects = view_model.take_effects().unwrap();

    assert_eq!(settled(&view_model).await.items(), initial.as_slice());
    assert_eq!(effects.recv().await, Some(snackbar("Items refreshed!")));

    view_model.on_event(ItemsViewEvent::RefreshItems);
    assert_eq!(view_model.view_state(), ItemsViewState::Loading);

    let state = settled(&view_model).await;
    assert_eq!(state.items(), refreshed.as_slice());
    assert_eq!(state.random_text(), Some(DEFAULT_RANDOM_TEXT));
    assert_eq!(effects.recv().await, Some(snackbar("Items refreshed!")));
}

#[tokio::test]
async fn fetch_failure_shows_error_state_and_snackbar() {
    let source = StubSource::new(vec![Response::err("Network Error!")]);
    let view_model = ItemsViewModel::new(repository(source));
    let mut effects = view_model.take_effects().unwrap();

    let state = settled(&view_model).await;
    assert_eq!(
        state,
        ItemsViewState::Error {
            message: "Network Error!".to_string(),
            random_text: DEFAULT_RANDOM_TEXT.to_string(),
        }
    );
    assert_eq!(effects.recv().await, Some(snackbar("Error: Network Error!")));
}

#[tokio::test]
async fn retry_after_error_recovers() {
    let items = vec![text_item("1", "Back", "online")];
    let source = StubSource::new(vec![Response::err("offline"), Response::ok(items.clone())]);
    let view_model = ItemsViewModel::new(repository(source));

    assert!(matches!(settled(&view_model).await, ItemsViewState::Error { .. }));

    view_model.on_event(ItemsViewEvent::RefreshItems);
    assert_eq!(settled(&view_model).await.items(), items.as_slice());
}

#[tokio::test]
async fn item_click_sends_snackbar() {
    let item = text_item("clicked", "Clicked Item", "Clicked Desc");
    let source = StubSource::new(vec![Response::ok(vec![item.clone()])]);
    let view_model = ItemsViewModel::new(repository(source));
    let mut effects = view_model.take_effects().unwrap();
    settled(&view_model).await;

    // Drain the snackbar from the initial fetch
    assert_eq!(effects.recv().await, Some(snackbar("Items refreshed!")));

    let before = view_model.view_state();
    view_model.on_event(ItemsViewEvent::ItemClicked(item));
    assert_eq!(effects.recv().await, Some(snackbar("Item clicked: Clicked Item")));
    assert_eq!(view_model.view_state(), before);
}

#[tokio::test]
async fn generate_random_text_updates_state() {
    let source = StubSource::new(vec![Response::ok(vec![text_item("1", "Test Item", "Desc")])]);
    let view_model = ItemsViewModel::new(repository(source));
    let initial = settled(&view_model).await;
    let initial_text = initial.random_text().unwrap().to_string();

    view_model.on_event(ItemsViewEvent::GenerateRandomText);

    let updated = view_model.view_state();
    let text = updated.random_text().unwrap();
    assert!(text.starts_with("Generated: "));
    assert_ne!(text, initial_text);
    let suffix = text.trim_start_matches("Generated: ");
    assert_eq!(suffix.len(), 10);
    assert!(suffix.chars().all(|c| c.is_ascii_lowercase()));
    assert_eq!(updated.items().len(), 1);
}

#[tokio::test]
async fn generate_while_loading_shows_empty_success() {
    let source = StubSource::new(vec![Response::ok(Vec::new()).after(Duration::from_secs(2))]);
    let view_model = ItemsViewModel::new(repository(source));

    view_model.on_event(ItemsViewEvent::GenerateRandomText);

    match view_model.view_state() {
        ItemsViewState::Success { items, random_text } => {
            assert!(items.is_empty());
            assert!(random_text.starts_with("Generated: "));
        }
        other => panic!("Expected Success, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn newer_fetch_supersedes_in_flight_fetch() {
    let slow = vec![text_item("slow", "Slow", "stale")];
    let fast = vec![text_item("fast", "Fast", "fresh")];
    let source = StubSource::new(vec![
        Response::ok(slow).after(Duration::from_secs(5)),
        Response::ok(fast.clone()).after(Duration::from_secs(1)),
    ]);
    let view_model = ItemsViewModel::new(repository(source.clone()));
    let mut effects = view_model.take_effects().unwrap();

    // Let the initial fetch start sleeping, then refresh over it
    tokio::task::yield_now().await;
    view_model.on_event(ItemsViewEvent::RefreshItems);

    assert_eq!(settled(&view_model).await.items(), fast.as_slice());

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(view_model.view_state().items(), fast.as_slice());
    assert_eq!(source.calls(), 2);

    assert_eq!(effects.try_recv().ok(), Some(snackbar("Items refreshed!")));
    assert!(effects.try_recv().is_err(), "stale fetch must not emit effects");
}

#[tokio::test(start_paused = true)]
async fn dropping_view_model_cancels_fetch() {
    let source = StubSource::new(vec![Response::ok(Vec::new()).after(Duration::from_secs(2))]);
    let view_model = ItemsViewModel::new(repository(source.clone()));
    tokio::task::yield_now().await;
    assert!(view_model.is_fetching());

    drop(view_model);
    tokio::time::sleep(Duration::from_secs(5)).await;

    assert_eq!(source.calls(), 1);
    assert!(!source.completed.load(Ordering::SeqCst));
}

#[tokio::test]
async fn effects_are_handed_out_once() {
    let source = StubSource::new(vec![Response::ok(Vec::new())]);
    let view_model = ItemsViewModel::new(repository(source));
    assert!(view_model.take_effects().is_some());
    assert!(view_model.take_effects().is_none());
}

#[tokio::test]
async fn effects_emitted_before_subscription_are_buffered() {
    let item = text_item("1", "Early", "desc");
    let source = StubSource::new(vec![Response::ok(vec![item.clone()])]);
    let view_model = ItemsViewModel::new(repository(source));
    settled(&view_model).await;
    view_model.on_event(ItemsViewEvent::ItemClicked(item));

    let mut effects = view_model.take_effects().unwrap();
    let mut received = Vec::new();
    while let Ok(effect) = effects.try_recv() {
        received.push(effect);
    }
    assert_eq!(
        received,
        vec![snackbar("Items refreshed!"), snackbar("Item clicked: Early")]
    );
}

#[tokio::test]
async fn settled_state_implies_effect_already_queued() {
    let source = StubSource::new(vec![Response::ok(Vec::new())]);
    let view_model = ItemsViewModel::new(repository(source));
    let mut effects = view_model.take_effects().unwrap();

    settled(&view_model).await;
    assert!(matches!(
        effects.try_recv(),
        Ok(ItemsViewEffect::ShowSnackbar { .. })
    ));
}

#[tokio::test]
async fn fetch_task_is_cleared_after_completion() {
    let source = StubSource::new(vec![Response::ok(Vec::new())]);
    let view_model = ItemsViewModel::new(repository(source));
    settled(&view_model).await;
    assert!(!view_model.is_fetching());
}
