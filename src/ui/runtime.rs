use std::sync::mpsc::{RecvTimeoutError, Sender};

use tokio::runtime::Handle;

use crate::api::LayerClient;
use crate::config::Config;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::fetcher::{fetch_channel, run_fetcher};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Runs the UI loop on the calling thread. Fetches run on `runtime`.
pub fn run(config: Config, runtime: &Handle) -> anyhow::Result<()> {
    let client = LayerClient::new(&config.api.base_url)?;
    let tick_rate = config.ui.tick_rate();
    let shutdown = ShutdownHandle::new();

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate, shutdown.clone());

    let (fetch_tx, fetch_rx) = fetch_channel();
    runtime.spawn(run_fetcher(
        client,
        fetch_rx,
        events.sender(),
        shutdown.clone(),
    ));
    runtime.spawn(forward_signals(events.sender(), shutdown.clone()));

    let mut app = App::new(config.api.base_url.clone(), fetch_tx);
    app.mount();
    tracing::info!(base_url = %config.api.base_url, "Layer view mounted");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize) => {}
            Ok(AppEvent::LayerIds { token, result }) => app.on_layer_ids(&token, result),
            Ok(AppEvent::Layer { id, token, result }) => app.on_layer(&id, &token, result),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    app.unmount();
    shutdown.signal();
    drop(guard);
    Ok(())
}

async fn forward_signals(events: Sender<AppEvent>, shutdown: ShutdownHandle) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(err) = result {
                tracing::warn!(error = %err, "Failed to listen for ctrl-c");
                return;
            }
            shutdown.signal();
            let _ = events.send(AppEvent::Shutdown);
        }
        _ = shutdown.wait() => {}
    }
}
