use crate::api::LayerId;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LayerListIntent {
    /// The view was mounted and its collection request is in flight.
    Mount,
    /// The collection request resolved. `None` means the body did not decode.
    Resolved { ids: Option<Vec<LayerId>> },
}

impl Intent for LayerListIntent {}
