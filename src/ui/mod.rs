pub mod app;
pub mod events;
pub mod fetcher;
pub mod footer;
pub mod header;
pub mod input;
pub mod layer_item;
pub mod layer_list;
pub mod layout;
pub mod lifecycle;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
