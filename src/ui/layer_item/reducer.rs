use crate::ui::mvi::Reducer;

use super::intent::LayerItemIntent;
use super::state::LayerItemState;

pub struct LayerItemReducer;

impl Reducer for LayerItemReducer {
    type State = LayerItemState;
    type Intent = LayerItemIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LayerItemIntent::Mount => match state {
                LayerItemState::Uninitialized => LayerItemState::Loading,
                other => other,
            },
            // The previous record stays on screen until its replacement arrives.
            LayerItemIntent::IdChanged => match state {
                loaded @ LayerItemState::Loaded { .. } => loaded,
                _ => LayerItemState::Loading,
            },
            LayerItemIntent::Resolved { layer } => match state {
                LayerItemState::Uninitialized => LayerItemState::Uninitialized,
                _ => LayerItemState::Loaded { layer },
            },
        }
    }
}
