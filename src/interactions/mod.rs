//! Component interaction handlers, routed from `handler.rs` by the first
//! `_`-separated segment of the custom id.

pub mod collection_handler;
pub mod drop_handler;
pub mod util;
