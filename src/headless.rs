//! Terminal-free driver for the items screen.
//!
//! Feeds a scripted sequence of view events into the view model and prints
//! every settled state and every effect, as text or JSON lines.

use std::io::Write;
use std::str::FromStr;

use thiserror::Error;
use tokio::sync::watch;

use crate::data::ItemRepository;
use crate::ui::items::{
    EffectReceiver, ItemsViewEffect, ItemsViewEvent, ItemsViewModel, ItemsViewState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    Refresh,
    Generate,
    /// Click the item at this list position.
    Click(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Error)]
pub enum HeadlessError {
    #[error("Invalid script step '{step}': {reason}")]
    Script { step: String, reason: String },

    #[error("No item at index {index} ({available} items on screen)")]
    NoSuchItem { index: usize, available: usize },

    #[error("View model stopped publishing state")]
    StateClosed,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl FromStr for ScriptStep {
    type Err = HeadlessError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let step = raw.trim();
        let invalid = |reason: &str| HeadlessError::Script {
            step: step.to_string(),
            reason: reason.to_string(),
        };
        match step {
            "refresh" => Ok(ScriptStep::Refresh),
            "generate" => Ok(ScriptStep::Generate),
            _ => {
                let Some(index) = step.strip_prefix("click:") else {
                    return Err(invalid("expected refresh, generate or click:<index>"));
                };
                index
                    .parse()
                    .map(ScriptStep::Click)
                    .map_err(|_| invalid("click index must be a non-negative integer"))
            }
        }
    }
}

/// Parses a comma-separated script. Blank input is an empty script.
pub fn parse_script(raw: &str) -> Result<Vec<ScriptStep>, HeadlessError> {
    raw.split(',')
        .filter(|step| !step.trim().is_empty())
        .map(str::parse::<ScriptStep>)
        .collect()
}

/// Runs the initial load and then each step, waiting for the state to
/// leave Loading after every step.
pub async fn run_headless<W: Write>(
    repository: ItemRepository,
    steps: &[ScriptStep],
    format: OutputFormat,
    out: &mut W,
) -> Result<(), HeadlessError> {
    let view_model = ItemsViewModel::new(repository);
    let mut effects = view_model.take_effects();
    let mut state_rx = view_model.subscribe();

    let initial = state_rx.borrow_and_update().clone();
    report_state(out, format, &initial)?;

    let settled = settle(&mut state_rx).await?;
    report_state(out, format, &settled)?;
    report_effects(out, format, effects.as_mut())?;

    for step in steps {
        tracing::debug!(?step, "Running script step");
        let event = match *step {
            ScriptStep::Refresh => ItemsViewEvent::RefreshItems,
            ScriptStep::Generate => ItemsViewEvent::GenerateRandomText,
            ScriptStep::Click(index) => {
                let state = view_model.view_state();
                let items = state.items();
                let item = items.get(index).cloned().ok_or(HeadlessError::NoSuchItem {
                    index,
                    available: items.len(),
                })?;
                ItemsViewEvent::ItemClicked(item)
            }
        };
        view_model.on_event(event);

        let settled = settle(&mut state_rx).await?;
        report_state(out, format, &settled)?;
        report_effects(out, format, effects.as_mut())?;
    }

    Ok(())
}

async fn settle(
    state_rx: &mut watch::Receiver<ItemsViewState>,
) -> Result<ItemsViewState, HeadlessError> {
    let state = state_rx
        .wait_for(|state| !state.is_loading())
        .await
        .map_err(|_| HeadlessError::StateClosed)?;
    Ok(state.clone())
}

fn report_state<W: Write>(
    out: &mut W,
    format: OutputFormat,
    state: &ItemsViewState,
) -> Result<(), HeadlessError> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(state)?)?,
        OutputFormat::Text => write!(out, "{}", describe_state(state))?,
    }
    Ok(())
}

fn report_effects<W: Write>(
    out: &mut W,
    format: OutputFormat,
    effects: Option<&mut EffectReceiver>,
) -> Result<(), HeadlessError> {
    let Some(effects) = effects else {
        return Ok(());
    };
    while let Ok(effect) = effects.try_recv() {
        match format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&effect)?)?,
            OutputFormat::Text => writeln!(out, "{}", describe_effect(&effect))?,
        }
    }
    Ok(())
}

/// Human-readable rendering of a state, one line per fact.
pub fn describe_state(state: &ItemsViewState) -> String {
    match state {
        ItemsViewState::Loading => "[loading] Loading items...\n".to_string(),
        ItemsViewState::Success { items, random_text } => {
            let mut text = format!("[success] {} items | {}\n", items.len(), random_text);
            if items.is_empty() {
                text.push_str("  No items found. Tap refresh to fetch some.\n");
            }
            for (index, item) in items.iter().enumerate() {
                text.push_str(&format!("  {index}. {} - {}", item.name(), item.description()));
                if let Some(url) = item.image_url() {
                    text.push_str(&format!(" <{url}>"));
                }
                text.push('\n');
            }
            text
        }
        ItemsViewState::Error {
            message,
            random_text,
        } => format!("[error] Error: {message} | {random_text}\n"),
    }
}

fn describe_effect(effect: &ItemsViewEffect) -> String {
    match effect {
        ItemsViewEffect::ShowSnackbar { message } => format!("(snackbar) {message}"),
        ItemsViewEffect::NavigateToDetail { item_id } => format!("(navigate) {item_id}"),
    }
}
