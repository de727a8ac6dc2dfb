//! Items screen built on a unidirectional state-flow architecture.
//!
//! A view model owns a single view state (Loading / Success / Error),
//! reduces discrete view events into it, fetches items from a simulated
//! remote source, and emits one-time effects (snackbar messages) on a
//! separate channel.

pub mod cli;
pub mod config;
pub mod data;
pub mod headless;
pub mod logging;
pub mod ui;
