//! Client side of the layer API.
//!
//! Two read-only endpoints are consumed:
//!
//! ```text
//! GET /api/layer        -> ["<id>", ...]
//! GET /api/layer/{id}   -> { "id": ..., "index": ..., ... }
//! ```

mod client;
mod error;
mod types;

pub use client::LayerClient;
pub use error::ApiError;
pub use types::{Layer, LayerId};
