//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use layerview::api::{ApiError, Layer, LayerId};
use layerview::ui::app::App;
use layerview::ui::events::AppEvent;
use layerview::ui::fetcher::{fetch_channel, FetchCommand, FetchReceiver};
use layerview::ui::lifecycle::LivenessToken;
use ratatui::buffer::Buffer;
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer as TracingLayer, SubscriberExt};

pub const BASE_URL: &str = "http://127.0.0.1:8080";

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

// -- Fixtures -----------------------------------------------------------------

pub fn ids(raw: &[&str]) -> Vec<LayerId> {
    raw.iter().map(|id| LayerId::from(*id)).collect()
}

pub fn sample_layer(id: &str) -> Layer {
    Layer {
        id: LayerId::from(id),
        index: 0,
        command: "ADD a".to_string(),
        size: 10,
        tree_id: "t1".to_string(),
        names: Some(vec!["a".to_string()]),
        digest: "sha256:e3b0c442".to_string(),
    }
}

pub fn sample_layer_json(id: &str) -> String {
    serde_json::to_string(&sample_layer(id)).unwrap()
}

pub fn decode_error(endpoint: &str) -> ApiError {
    ApiError::Decode {
        endpoint: endpoint.to_string(),
        source: serde_json::from_str::<serde_json::Value>("<html>").unwrap_err(),
    }
}

// -- App helpers --------------------------------------------------------------

pub fn make_app() -> (App, FetchReceiver) {
    let (tx, rx) = fetch_channel();
    (App::new(BASE_URL, tx), rx)
}

/// Drain queued fetch commands without running them.
pub fn drain_commands(rx: &mut FetchReceiver) -> Vec<FetchCommand> {
    let mut commands = Vec::new();
    while let Ok(command) = rx.try_recv() {
        commands.push(command);
    }
    commands
}

pub fn take_list_token(rx: &mut FetchReceiver) -> LivenessToken {
    let mut tokens: Vec<_> = drain_commands(rx)
        .into_iter()
        .filter_map(|command| match command {
            FetchCommand::LayerIds { token } => Some(token),
            FetchCommand::Layer { .. } => None,
        })
        .collect();
    assert_eq!(tokens.len(), 1, "expected exactly one layer list request");
    tokens.remove(0)
}

pub fn take_item_tokens(rx: &mut FetchReceiver) -> Vec<(LayerId, LivenessToken)> {
    drain_commands(rx)
        .into_iter()
        .filter_map(|command| match command {
            FetchCommand::Layer { id, token } => Some((id, token)),
            FetchCommand::LayerIds { .. } => None,
        })
        .collect()
}

/// Mount `app` and resolve its list with `layer_ids`.
/// Returns the item requests the list issued.
pub fn mount_with_ids(
    app: &mut App,
    rx: &mut FetchReceiver,
    layer_ids: &[&str],
) -> Vec<(LayerId, LivenessToken)> {
    app.mount();
    let token = take_list_token(rx);
    app.on_layer_ids(&token, Ok(ids(layer_ids)));
    take_item_tokens(rx)
}

pub fn body_text(app: &App) -> Vec<String> {
    app.body_lines().iter().map(|line| line.to_string()).collect()
}

// -- Event helpers ------------------------------------------------------------

/// Poll a UI event channel from async code without blocking the runtime.
pub async fn next_event(rx: &Receiver<AppEvent>, timeout: Duration) -> Option<AppEvent> {
    let start = Instant::now();
    while start.elapsed() < timeout {
        if let Ok(event) = rx.try_recv() {
            return Some(event);
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    None
}

// -- Rendering ----------------------------------------------------------------

pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

// -- Log capture --------------------------------------------------------------

/// Counts events at `ERROR` level.
#[derive(Clone, Default)]
pub struct ErrorCounter(Arc<AtomicUsize>);

impl ErrorCounter {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> TracingLayer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Run `f` with a thread-local subscriber and return how many errors it logged.
pub fn count_errors<F: FnOnce()>(f: F) -> usize {
    let counter = ErrorCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    tracing::subscriber::with_default(subscriber, f);
    counter.count()
}
