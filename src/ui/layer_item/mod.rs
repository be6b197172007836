//! Item view: one layer record addressed by its identifier.
//!
//! - `state.rs` - Uninitialized → Loading → Loaded
//! - `intent.rs` - Mount, IdChanged, Resolved
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `view.rs` - Mount token and fetch initiation around the reducer
//! - `card.rs` - Terminal lines for a loaded record

mod card;
mod intent;
mod reducer;
mod state;
mod view;

pub use card::layer_lines;
pub use intent::LayerItemIntent;
pub use reducer::LayerItemReducer;
pub use state::LayerItemState;
pub use view::ItemView;
