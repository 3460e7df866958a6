//! One module per user-facing command. Each exposes `register()` for slash
//! registration plus `run_slash` / `run_prefix` entry points that share a core
//! embed-producing function.

pub mod coins;
pub mod daily;
pub mod help;
pub mod mycards;
pub mod ping;
pub mod setdropchannel;
pub mod start;
pub mod work;
