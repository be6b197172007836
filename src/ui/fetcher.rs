//! Fetch worker.
//!
//! Views never await. They push a [`FetchCommand`] and return; the worker
//! runs each command as its own task and posts the result back to the UI
//! loop as an [`AppEvent`]. Results for dead tokens are dropped here, before
//! they reach the loop.

use std::sync::mpsc::Sender;

use tokio::sync::mpsc;

use crate::api::{LayerClient, LayerId};
use crate::shutdown::ShutdownHandle;
use crate::ui::events::AppEvent;
use crate::ui::lifecycle::LivenessToken;

#[derive(Debug)]
pub enum FetchCommand {
    /// `GET /api/layer` on behalf of the list view.
    LayerIds { token: LivenessToken },
    /// `GET /api/layer/{id}` on behalf of one item view.
    Layer { id: LayerId, token: LivenessToken },
}

pub type FetchSender = mpsc::UnboundedSender<FetchCommand>;
pub type FetchReceiver = mpsc::UnboundedReceiver<FetchCommand>;

pub fn fetch_channel() -> (FetchSender, FetchReceiver) {
    mpsc::unbounded_channel()
}

/// Queue a command. Initiation never blocks the caller.
pub fn request(sender: &FetchSender, command: FetchCommand) {
    if let Err(err) = sender.send(command) {
        tracing::warn!(command = ?err.0, "Fetch worker is gone, request dropped");
    }
}

/// Runs until shutdown or until every `FetchSender` is dropped.
pub async fn run_fetcher(
    client: LayerClient,
    mut commands: FetchReceiver,
    events: Sender<AppEvent>,
    shutdown: ShutdownHandle,
) {
    loop {
        let command = tokio::select! {
            _ = shutdown.wait() => break,
            command = commands.recv() => match command {
                Some(command) => command,
                None => break,
            },
        };

        let client = client.clone();
        let events = events.clone();
        tokio::spawn(async move {
            execute(&client, command, &events).await;
        });
    }
    tracing::debug!("Fetch worker stopped");
}

async fn execute(client: &LayerClient, command: FetchCommand, events: &Sender<AppEvent>) {
    let event = match command {
        FetchCommand::LayerIds { token } => {
            let result = client.layer_ids().await;
            if !token.is_live() {
                tracing::trace!("Layer list unmounted before its response arrived");
                return;
            }
            AppEvent::LayerIds { token, result }
        }
        FetchCommand::Layer { id, token } => {
            let result = client.layer(&id).await;
            if !token.is_live() {
                tracing::trace!(layer = %id, "Layer view unmounted before its response arrived");
                return;
            }
            AppEvent::Layer { id, token, result }
        }
    };

    if events.send(event).is_err() {
        tracing::trace!("UI loop is gone, fetch result dropped");
    }
}
