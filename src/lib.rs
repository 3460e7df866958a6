// Library entry so integration tests and external tools can reference internal
// modules. The binary (`main.rs`) uses the same set.
pub mod browser;
pub mod commands;
pub mod constants;
pub mod drops;
pub mod economy;
pub mod handler;
pub mod interactions;
pub mod keepalive;
pub mod model;
pub mod store;
pub mod ui;

pub use model::AppState;
