//! Terminal browser for the image layers served by a local layer API.
//!
//! The page is a list view that fetches the layer identifiers and one item
//! view per identifier that fetches and shows its record.

pub mod api;
pub mod config;
pub mod logging;
pub mod shutdown;
pub mod ui;
