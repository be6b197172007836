use crate::api::{ApiError, Layer, LayerId};
use crate::ui::fetcher::{request, FetchCommand, FetchSender};
use crate::ui::lifecycle::{Liveness, LivenessToken};
use crate::ui::mvi::dispatch_mvi;

use super::intent::LayerItemIntent;
use super::reducer::LayerItemReducer;
use super::state::LayerItemState;

/// A mounted item view. Dropping it unmounts it.
#[derive(Debug)]
pub struct ItemView {
    id: LayerId,
    state: LayerItemState,
    mount: Liveness,
}

impl ItemView {
    /// Mounts a view for `id` and issues its request.
    pub fn mount(id: LayerId, fetches: &FetchSender) -> Self {
        let mount = Liveness::new();
        request(
            fetches,
            FetchCommand::Layer {
                id: id.clone(),
                token: mount.token(),
            },
        );
        let mut view = Self {
            id,
            state: LayerItemState::default(),
            mount,
        };
        dispatch_mvi!(view, state, LayerItemReducer, LayerItemIntent::Mount);
        view
    }

    pub fn id(&self) -> &LayerId {
        &self.id
    }

    pub fn state(&self) -> &LayerItemState {
        &self.state
    }

    pub fn layer(&self) -> Option<&Layer> {
        self.state.layer()
    }

    pub fn owns(&self, token: &LivenessToken) -> bool {
        self.mount.owns(token)
    }

    /// Changes the identifier input. The previous request's token dies with
    /// the old mount, so a late response for the old id is never applied.
    pub fn set_id(&mut self, id: LayerId, fetches: &FetchSender) {
        if id == self.id {
            return;
        }
        self.mount = Liveness::new();
        self.id = id;
        dispatch_mvi!(self, state, LayerItemReducer, LayerItemIntent::IdChanged);
        request(
            fetches,
            FetchCommand::Layer {
                id: self.id.clone(),
                token: self.mount.token(),
            },
        );
    }

    /// Applies a response. Returns true when the state changed.
    ///
    /// Failures are not handled by the view: they are reported and the view
    /// keeps rendering whatever it rendered before.
    pub fn apply(&mut self, token: &LivenessToken, result: Result<Layer, ApiError>) -> bool {
        if !self.mount.owns(token) || !token.is_live() {
            tracing::trace!(layer = %self.id, "Dropping layer response for a stale mount");
            return false;
        }

        match result {
            Ok(layer) => {
                dispatch_mvi!(self, state, LayerItemReducer, LayerItemIntent::Resolved { layer });
                true
            }
            Err(err) => {
                tracing::warn!(layer = %self.id, error = %err, "Unhandled layer failure");
                false
            }
        }
    }
}
