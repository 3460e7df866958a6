// Central constants for the economy, cooldowns, and UI.

/// Embed accent color shared by every rendered embed (purple, 147/112/219).
pub const EMBED_COLOR: u32 = 0x9370DB;

/// Coins granted once by `start`.
pub const STARTER_COINS: i64 = 1000;
/// Uniform payout range for `work`.
pub const WORK_MIN_PAYOUT: i64 = 50;
pub const WORK_MAX_PAYOUT: i64 = 300;
/// Fixed payout for `daily`.
pub const DAILY_REWARD: i64 = 500;

/// Cooldown windows, in seconds.
pub const WORK_COOLDOWN_SECS: i64 = 1800;
pub const DAILY_COOLDOWN_SECS: i64 = 86_400;

/// Card browser sessions go inert after this much idle time.
pub const BROWSE_TIMEOUT_SECS: u64 = 120;

/// Passive drop cadence and claim window.
pub const DROP_INTERVAL_SECS: u64 = 900;
pub const DROP_CLAIM_TIMEOUT_SECS: u64 = 120;

/// Backoff between gateway reconnect attempts.
pub const RECONNECT_BACKOFF_SECS: u64 = 30;

/// Keepalive defaults.
pub const DEFAULT_KEEPALIVE_PORT: u16 = 8080;
pub const KEEPALIVE_BODY: &str = "Photocard bot is alive 💜";

/// Backing file for the persisted document when DATA_FILE is unset.
pub const DEFAULT_DATA_FILE: &str = "cards.json";
