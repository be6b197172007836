use crate::api::LayerId;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LayerListState {
    #[default]
    Uninitialized,
    Loading,
    /// `ids` is `None` when the response could not be decoded; the view then
    /// renders nothing at all.
    Loaded { ids: Option<Vec<LayerId>> },
}

impl UiState for LayerListState {}

impl LayerListState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Identifiers to render, empty until a list has been decoded.
    pub fn ids(&self) -> &[LayerId] {
        match self {
            Self::Loaded { ids: Some(ids) } => ids,
            _ => &[],
        }
    }
}
