use crate::ui::mvi::Reducer;

use super::intent::LayerListIntent;
use super::state::LayerListState;

pub struct LayerListReducer;

impl Reducer for LayerListReducer {
    type State = LayerListState;
    type Intent = LayerListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LayerListIntent::Mount => LayerListState::Loading,
            LayerListIntent::Resolved { ids } => match state {
                LayerListState::Loading => LayerListState::Loaded { ids },
                // Nothing was requested from this state
                other => other,
            },
        }
    }
}
