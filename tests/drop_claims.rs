//! Tests for passive drop claiming: first press wins, expiry, and handing a
//! drop back when the claimant hasn't started.

use photocard_bot::drops::DropManager;
use photocard_bot::economy::DrawnCard;
use serenity::model::id::MessageId;
use std::time::{Duration, Instant};

fn drawn() -> DrawnCard {
    DrawnCard {
        member: "Seonghwa".to_string(),
        rarity: "1".to_string(),
        name: "Seonghwa Dream".to_string(),
        image: "https://cards.example/hwa-1.png".to_string(),
    }
}

#[test]
fn first_claim_takes_the_drop() {
    let mut mgr = DropManager::new();
    let t0 = Instant::now();
    mgr.post(MessageId::new(1), drawn(), t0);

    let claimed = mgr.claim(MessageId::new(1), t0 + Duration::from_secs(5));
    assert_eq!(claimed.map(|d| d.card), Some(drawn()));
    // Nothing left for the second presser.
    assert!(mgr.claim(MessageId::new(1), t0 + Duration::from_secs(6)).is_none());
    assert_eq!(mgr.pending_count(), 0);
}

#[test]
fn expired_drops_cannot_be_claimed() {
    let mut mgr = DropManager::new();
    let t0 = Instant::now();
    mgr.post(MessageId::new(1), drawn(), t0);

    assert!(mgr.claim(MessageId::new(1), t0 + Duration::from_secs(121)).is_none());
    assert_eq!(mgr.pending_count(), 0);
}

#[test]
fn rejected_claim_is_restored_with_window_intact() {
    let mut mgr = DropManager::new();
    let t0 = Instant::now();
    mgr.post(MessageId::new(1), drawn(), t0);

    let pending = mgr.claim(MessageId::new(1), t0 + Duration::from_secs(10)).unwrap();
    mgr.restore(MessageId::new(1), pending);

    // The original claim window still applies after the restore.
    assert!(mgr.claim(MessageId::new(1), t0 + Duration::from_secs(121)).is_none());
}

#[test]
fn expire_reports_whether_the_drop_was_pending() {
    let mut mgr = DropManager::new();
    let t0 = Instant::now();
    mgr.post(MessageId::new(1), drawn(), t0);
    assert!(mgr.expire(MessageId::new(1)));
    assert!(!mgr.expire(MessageId::new(1)));
}
