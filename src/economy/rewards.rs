//! The reward engine: starter, work, and daily grants plus drop claims.
//!
//! Every grant is a plain function over `&mut Document`, run by callers inside
//! `CardStore::update` so the read-modify-write is serialized and persisted as
//! one step. Time and randomness are injected; nothing here touches the wall
//! clock or a global RNG.

use super::cooldown::{self, Gate};
use super::draw::{DrawnCard, draw_card};
use crate::constants::{
    DAILY_COOLDOWN_SECS, DAILY_REWARD, STARTER_COINS, WORK_COOLDOWN_SECS, WORK_MAX_PAYOUT,
    WORK_MIN_PAYOUT,
};
use crate::store::{Document, PlayerRecord};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("player has not started yet")]
    NotStarted,
    #[error("player already started")]
    AlreadyStarted,
    #[error("on cooldown for {remaining}")]
    OnCooldown { remaining: Duration },
    #[error("no cards configured")]
    EmptyCatalog,
}

/// A player's side bet on the work coin flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinCall {
    Heads,
    Tails,
}

impl CoinCall {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "heads" | "h" => Some(Self::Heads),
            "tails" | "t" => Some(Self::Tails),
            _ => None,
        }
    }
}

/// Outcome of the optional coin-flip modifier on a work grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipOutcome {
    pub call: CoinCall,
    pub landed: CoinCall,
    pub won: bool,
}

#[derive(Debug, Clone)]
pub struct StarterReward {
    pub coins: i64,
    pub card: DrawnCard,
}

#[derive(Debug, Clone)]
pub struct WorkReward {
    pub coins_earned: i64,
    pub flip: Option<FlipOutcome>,
    pub card: DrawnCard,
}

#[derive(Debug, Clone)]
pub struct DailyReward {
    pub coins: i64,
    pub card: DrawnCard,
}

/// Creates the player record with starter coins and one drawn card. Re-invoking
/// for a started player mutates nothing; an empty catalog creates no record.
pub fn grant_starter<R: Rng + ?Sized>(
    doc: &mut Document,
    user_id: &str,
    rng: &mut R,
) -> Result<StarterReward, GameError> {
    if doc.players.contains_key(user_id) {
        return Err(GameError::AlreadyStarted);
    }
    let card = draw_card(&doc.cards, rng).ok_or(GameError::EmptyCatalog)?;
    let mut record = PlayerRecord::new(STARTER_COINS);
    record.cards.push(card.display());
    doc.players.insert(user_id.to_string(), record);
    Ok(StarterReward {
        coins: STARTER_COINS,
        card,
    })
}

/// Work grant: cooldown-gated uniform payout in 50..=300, optionally doubled
/// or halved by the coin flip, plus one drawn card. The cooldown timestamp is
/// stamped only on success.
pub fn grant_work<R: Rng + ?Sized>(
    doc: &mut Document,
    user_id: &str,
    now: DateTime<Utc>,
    call: Option<CoinCall>,
    rng: &mut R,
) -> Result<WorkReward, GameError> {
    let last_work = doc.player(user_id).ok_or(GameError::NotStarted)?.last_work;
    if let Gate::OnCooldown { remaining } =
        cooldown::check(last_work, Duration::seconds(WORK_COOLDOWN_SECS), now)
    {
        return Err(GameError::OnCooldown { remaining });
    }
    let card = draw_card(&doc.cards, rng).ok_or(GameError::EmptyCatalog)?;

    let mut coins_earned = rng.random_range(WORK_MIN_PAYOUT..=WORK_MAX_PAYOUT);
    let flip = call.map(|call| {
        let landed = if rng.random_bool(0.5) {
            CoinCall::Heads
        } else {
            CoinCall::Tails
        };
        let won = landed == call;
        if won {
            coins_earned *= 2;
        } else {
            coins_earned /= 2;
        }
        FlipOutcome { call, landed, won }
    });

    let player = doc.player_mut(user_id).ok_or(GameError::NotStarted)?;
    player.coins += coins_earned;
    player.cards.push(card.display());
    player.last_work = Some(now);
    Ok(WorkReward {
        coins_earned,
        flip,
        card,
    })
}

/// Daily grant: fixed 500 coins plus one drawn card, once per 24h window.
pub fn grant_daily<R: Rng + ?Sized>(
    doc: &mut Document,
    user_id: &str,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<DailyReward, GameError> {
    let last_daily = doc
        .player(user_id)
        .ok_or(GameError::NotStarted)?
        .last_daily;
    if let Gate::OnCooldown { remaining } =
        cooldown::check(last_daily, Duration::seconds(DAILY_COOLDOWN_SECS), now)
    {
        return Err(GameError::OnCooldown { remaining });
    }
    let card = draw_card(&doc.cards, rng).ok_or(GameError::EmptyCatalog)?;

    let player = doc.player_mut(user_id).ok_or(GameError::NotStarted)?;
    player.coins += DAILY_REWARD;
    player.cards.push(card.display());
    player.last_daily = Some(now);
    Ok(DailyReward {
        coins: DAILY_REWARD,
        card,
    })
}

/// Appends an already-drawn card (a claimed passive drop) to a started player.
/// No coins, no cooldown.
pub fn grant_drop_claim(
    doc: &mut Document,
    user_id: &str,
    card: &DrawnCard,
) -> Result<(), GameError> {
    let player = doc.player_mut(user_id).ok_or(GameError::NotStarted)?;
    player.cards.push(card.display());
    Ok(())
}
