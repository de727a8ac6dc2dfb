use crate::config::Config;
use crate::data::ItemRepository;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::items::ItemsViewModel;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};

/// Runs the items screen until the user quits.
///
/// Must be called with a tokio runtime entered: the view model spawns its
/// fetches onto it.
pub fn run(config: &Config, repository: ItemRepository) -> io::Result<()> {
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let snackbar = Duration::from_millis(config.ui.snackbar_ms);

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(ItemsViewModel::new(repository), snackbar);
    let events = EventHandler::new(tick_rate);
    tracing::info!("Items screen started");

    app.on_tick(Instant::now());
    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                handle_key(&mut app, key);
                app.sync(Instant::now());
            }
            Ok(AppEvent::Resize(cols, rows)) => {
                // Redraw picks up the new size.
                tracing::trace!(cols, rows, "Terminal resized");
            }
            Ok(AppEvent::Tick) | Err(RecvTimeoutError::Timeout) => app.on_tick(Instant::now()),
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("Items screen closed");
    Ok(())
}
