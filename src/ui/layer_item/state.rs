use crate::api::Layer;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LayerItemState {
    #[default]
    Uninitialized,
    Loading,
    Loaded { layer: Layer },
}

impl UiState for LayerItemState {}

impl LayerItemState {
    pub fn layer(&self) -> Option<&Layer> {
        match self {
            Self::Loaded { layer } => Some(layer),
            _ => None,
        }
    }
}
