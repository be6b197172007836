//! List view: the root of the page.
//!
//! Fetches the identifier collection once per mount and owns one item view
//! per identifier, keyed by the identifier value.
//!
//! - `state.rs` - Uninitialized → Loading → Loaded
//! - `intent.rs` - Mount, Resolved
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `view.rs` - Mount token and fetch initiation around the reducer

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::LayerListIntent;
pub use reducer::LayerListReducer;
pub use state::LayerListState;
pub use view::ListView;
