//! Serde types for the persisted JSON document.
//!
//! The document is the whole ledger: the static card catalog, one record per
//! player, and the per-guild drop channel configuration. Every mutation
//! rewrites the document in full; `BTreeMap` keys keep the serialized output
//! stable across round trips.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One printable card: display name plus image URL, keyed in the catalog by
/// (member, rarity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDef {
    pub name: String,
    pub image: String,
}

/// Catalog shape: member -> rarity tier -> card.
pub type Catalog = BTreeMap<String, BTreeMap<String, CardDef>>;

/// Per-user economic and collection state. Created on first `start`, never
/// deleted. Cooldown timestamps are durable here so they survive restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub coins: i64,
    #[serde(default)]
    pub cards: Vec<String>,
    #[serde(default)]
    pub last_work: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_daily: Option<DateTime<Utc>>,
}

impl PlayerRecord {
    pub fn new(coins: i64) -> Self {
        Self {
            coins,
            cards: Vec::new(),
            last_work: None,
            last_daily: None,
        }
    }
}

/// The full persisted document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub cards: Catalog,
    #[serde(default)]
    pub players: BTreeMap<String, PlayerRecord>,
    /// guild id -> channel id for passive drops.
    #[serde(default)]
    pub drop_channels: BTreeMap<String, String>,
}

impl Document {
    pub fn player(&self, user_id: &str) -> Option<&PlayerRecord> {
        self.players.get(user_id)
    }

    pub fn player_mut(&mut self, user_id: &str) -> Option<&mut PlayerRecord> {
        self.players.get_mut(user_id)
    }
}
