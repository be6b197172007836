//! Model-View-Intent (MVI) primitives.
//!
//! Every view keeps its data in a `UiState` and only changes it by running
//! a `Reducer` over an `Intent`:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Resources (mount tokens, channels) live next to the state, never inside it.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

/// Takes the current state out of `$self.$field`, runs the reducer, stores the result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer as $crate::ui::mvi::Reducer>::reduce(
            std::mem::take(&mut $self.$field),
            $intent,
        );
    };
}

pub(crate) use dispatch_mvi;
