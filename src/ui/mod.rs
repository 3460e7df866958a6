//! Embed and button construction shared across the command surface.

pub mod buttons;
pub mod embeds;

pub use buttons::{Btn, browser_nav_row, drop_claim_row};
