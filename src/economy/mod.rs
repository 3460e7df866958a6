//! The reward-and-cooldown core: everything that changes a player's coins or
//! collection flows through here.

pub mod cooldown;
pub mod draw;
pub mod rewards;

pub use cooldown::Gate;
pub use draw::DrawnCard;
pub use rewards::{CoinCall, GameError};
