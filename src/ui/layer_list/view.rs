use crate::api::{ApiError, LayerId};
use crate::ui::fetcher::{request, FetchCommand, FetchSender};
use crate::ui::lifecycle::{Liveness, LivenessToken};
use crate::ui::mvi::dispatch_mvi;

use super::intent::LayerListIntent;
use super::reducer::LayerListReducer;
use super::state::LayerListState;

#[derive(Debug, Default)]
pub struct ListView {
    state: LayerListState,
    mount: Option<Liveness>,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LayerListState {
        &self.state
    }

    /// Starts a fresh mount: one collection request, tagged with a new token.
    /// A previous mount is torn down first, so its response is dropped.
    pub fn mount(&mut self, fetches: &FetchSender) {
        let liveness = Liveness::new();
        let token = liveness.token();
        self.mount = Some(liveness);
        dispatch_mvi!(self, state, LayerListReducer, LayerListIntent::Mount);
        request(fetches, FetchCommand::LayerIds { token });
    }

    pub fn unmount(&mut self) {
        self.mount = None;
    }

    /// Applies a collection response. Returns true when the state changed.
    ///
    /// A decode failure is logged once and stored as an absent list. Any
    /// other failure is left unhandled: it is reported and the view stays
    /// loading.
    pub fn apply(&mut self, token: &LivenessToken, result: Result<Vec<LayerId>, ApiError>) -> bool {
        let owned = self
            .mount
            .as_ref()
            .is_some_and(|mount| mount.owns(token) && token.is_live());
        if !owned {
            tracing::trace!("Dropping layer list response for a stale mount");
            return false;
        }

        let ids = match result {
            Ok(ids) => {
                tracing::debug!(count = ids.len(), ?ids, "Layer list received");
                Some(ids)
            }
            Err(err) if err.is_decode() => {
                tracing::error!(error = %err, "Failed to decode layer list");
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, "Unhandled layer list failure");
                return false;
            }
        };

        dispatch_mvi!(self, state, LayerListReducer, LayerListIntent::Resolved { ids });
        true
    }
}
