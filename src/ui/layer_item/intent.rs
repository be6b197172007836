use crate::api::Layer;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LayerItemIntent {
    /// The view was mounted and its request is in flight.
    Mount,
    /// The identifier input changed and a new request is in flight.
    IdChanged,
    /// A response for the current identifier arrived.
    Resolved { layer: Layer },
}

impl Intent for LayerItemIntent {}
