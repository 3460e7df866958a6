//! Passive card drops.
//!
//! A background task periodically picks one configured drop channel, draws a
//! card, and posts it with a claim button. The first started player to press
//! the button gets the card; unclaimed drops expire after two minutes and the
//! button is removed.

use crate::constants::{DROP_CLAIM_TIMEOUT_SECS, DROP_INTERVAL_SECS, EMBED_COLOR};
use crate::economy::{DrawnCard, draw::draw_card};
use crate::store::CardStore;
use crate::ui;
use serenity::builder::{CreateEmbed, CreateMessage, EditMessage};
use serenity::http::Http;
use serenity::model::id::{ChannelId, MessageId};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// One posted, not-yet-claimed drop.
pub struct PendingDrop {
    pub card: DrawnCard,
    pub posted: Instant,
}

/// Unclaimed drops keyed by the posted message.
#[derive(Default)]
pub struct DropManager {
    pending: HashMap<MessageId, PendingDrop>,
}

impl DropManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(&mut self, message_id: MessageId, card: DrawnCard, now: Instant) {
        self.pending.insert(message_id, PendingDrop { card, posted: now });
    }

    /// Takes the drop if it is still live. The caller must `restore` it if the
    /// claimant turns out not to qualify.
    pub fn claim(&mut self, message_id: MessageId, now: Instant) -> Option<PendingDrop> {
        let drop = self.pending.get(&message_id)?;
        if now.duration_since(drop.posted) > Duration::from_secs(DROP_CLAIM_TIMEOUT_SECS) {
            self.pending.remove(&message_id);
            return None;
        }
        self.pending.remove(&message_id)
    }

    /// Puts a claimed-but-rejected drop back, claim window intact, so someone
    /// else can take it.
    pub fn restore(&mut self, message_id: MessageId, drop: PendingDrop) {
        self.pending.insert(message_id, drop);
    }

    /// Removes an expired drop, returning true if it was still pending.
    pub fn expire(&mut self, message_id: MessageId) -> bool {
        self.pending.remove(&message_id).is_some()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

fn drop_embed(card: &DrawnCard) -> CreateEmbed {
    CreateEmbed::new()
        .title("✨ A card appeared!")
        .description(format!(
            "**{}** — first to claim gets it!",
            card.display()
        ))
        .image(card.image.clone())
        .color(EMBED_COLOR)
}

/// Posts one drop to `channel` and schedules its expiry.
async fn post_drop(
    http: &Arc<Http>,
    drops: &Arc<RwLock<DropManager>>,
    channel: ChannelId,
    card: DrawnCard,
) {
    let builder = CreateMessage::new()
        .embed(drop_embed(&card))
        .components(vec![ui::drop_claim_row()]);
    let mut message = match channel.send_message(http, builder).await {
        Ok(m) => m,
        Err(e) => {
            warn!(target: "drops", channel = %channel, error = %e, "failed to post drop");
            return;
        }
    };
    info!(target: "drops", channel = %channel, card = %card.display(), "drop posted");
    drops
        .write()
        .await
        .post(message.id, card, Instant::now());

    // Remove the button once the claim window closes, if nobody took it.
    let http = http.clone();
    let drops = drops.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(DROP_CLAIM_TIMEOUT_SECS)).await;
        if drops.write().await.expire(message.id) {
            let edit = EditMessage::new().components(vec![]);
            if let Err(e) = message.edit(&http, edit).await {
                debug!(target: "drops", error = %e, "failed to retire expired drop");
            }
        }
    });
}

/// The drop loop: every interval, pick a random configured channel and post a
/// drop there. Runs for the life of the process.
pub async fn run(http: Arc<Http>, store: Arc<CardStore>, drops: Arc<RwLock<DropManager>>) {
    let mut interval = tokio::time::interval(Duration::from_secs(DROP_INTERVAL_SECS));
    interval.tick().await; // immediate first tick; drops start one interval in
    loop {
        interval.tick().await;
        let pick = store
            .read(|doc| {
                if doc.drop_channels.is_empty() {
                    return None;
                }
                let mut rng = rand::rng();
                let idx = rand::Rng::random_range(&mut rng, 0..doc.drop_channels.len());
                let channel = doc.drop_channels.values().nth(idx)?.clone();
                let card = draw_card(&doc.cards, &mut rng)?;
                Some((channel, card))
            })
            .await;
        let Some((channel_str, card)) = pick else {
            debug!(target: "drops", "no drop channels configured or catalog empty");
            continue;
        };
        let Ok(channel_id) = channel_str.parse::<u64>() else {
            warn!(target: "drops", channel = %channel_str, "unparseable drop channel id");
            continue;
        };
        post_drop(&http, &drops, ChannelId::new(channel_id), card).await;
    }
}
