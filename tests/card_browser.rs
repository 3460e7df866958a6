//! Tests for the card browser: circular paging, ownership, and the idle
//! timeout against injected instants.

use photocard_bot::browser::{BrowserManager, NavOutcome, NavSignal, Pager};
use photocard_bot::commands::mycards::{View, classify};
use serenity::model::id::{MessageId, UserId};
use std::time::{Duration, Instant};

#[test]
fn pager_wraps_circularly() {
    let mut pager = Pager::new(5);
    assert_eq!(pager.index(), 0);
    // N nexts return to the original index.
    for _ in 0..5 {
        pager.next();
    }
    assert_eq!(pager.index(), 0);
    // Prev from page 0 wraps to the last page.
    assert_eq!(pager.prev(), 4);
    assert_eq!(pager.next(), 0);
}

fn cards() -> Vec<String> {
    vec!["a".to_string(), "b".to_string(), "c".to_string()]
}

const MSG: u64 = 9001;
const OWNER: u64 = 100;

#[test]
fn navigation_advances_and_wraps() {
    let mut mgr = BrowserManager::new();
    let t0 = Instant::now();
    mgr.open(MessageId::new(MSG), UserId::new(OWNER), cards(), t0);

    let next = mgr.navigate(MessageId::new(MSG), UserId::new(OWNER), NavSignal::Next, t0);
    assert_eq!(
        next,
        NavOutcome::Page {
            index: 1,
            total: 3,
            card: "b".to_string()
        }
    );
    // Two prevs from index 1 wrap to the last card.
    mgr.navigate(MessageId::new(MSG), UserId::new(OWNER), NavSignal::Prev, t0);
    let wrapped = mgr.navigate(MessageId::new(MSG), UserId::new(OWNER), NavSignal::Prev, t0);
    assert_eq!(
        wrapped,
        NavOutcome::Page {
            index: 2,
            total: 3,
            card: "c".to_string()
        }
    );
}

#[test]
fn foreign_user_signals_are_ignored() {
    let mut mgr = BrowserManager::new();
    let t0 = Instant::now();
    mgr.open(MessageId::new(MSG), UserId::new(OWNER), cards(), t0);

    let outcome = mgr.navigate(MessageId::new(MSG), UserId::new(999), NavSignal::Next, t0);
    assert_eq!(outcome, NavOutcome::NotYours);
    // The owner's position is unchanged.
    let next = mgr.navigate(MessageId::new(MSG), UserId::new(OWNER), NavSignal::Next, t0);
    assert!(matches!(next, NavOutcome::Page { index: 1, .. }));
}

#[test]
fn session_expires_after_idle_timeout() {
    let mut mgr = BrowserManager::new();
    let t0 = Instant::now();
    mgr.open(MessageId::new(MSG), UserId::new(OWNER), cards(), t0);

    // Activity within the window keeps the session alive and resets idleness.
    let t1 = t0 + Duration::from_secs(100);
    assert!(matches!(
        mgr.navigate(MessageId::new(MSG), UserId::new(OWNER), NavSignal::Next, t1),
        NavOutcome::Page { .. }
    ));
    let t2 = t1 + Duration::from_secs(100);
    assert!(matches!(
        mgr.navigate(MessageId::new(MSG), UserId::new(OWNER), NavSignal::Next, t2),
        NavOutcome::Page { .. }
    ));

    // Past 120s idle the session is gone, and stays gone.
    let t3 = t2 + Duration::from_secs(121);
    assert_eq!(
        mgr.navigate(MessageId::new(MSG), UserId::new(OWNER), NavSignal::Next, t3),
        NavOutcome::Expired
    );
    assert_eq!(
        mgr.navigate(MessageId::new(MSG), UserId::new(OWNER), NavSignal::Next, t3),
        NavOutcome::Expired
    );
    assert_eq!(mgr.session_count(), 0);
}

#[test]
fn sweep_drops_only_idle_sessions() {
    let mut mgr = BrowserManager::new();
    let t0 = Instant::now();
    mgr.open(MessageId::new(1), UserId::new(OWNER), cards(), t0);
    mgr.open(
        MessageId::new(2),
        UserId::new(OWNER),
        cards(),
        t0 + Duration::from_secs(60),
    );
    assert_eq!(mgr.session_count(), 2);

    mgr.sweep(t0 + Duration::from_secs(130));
    assert_eq!(mgr.session_count(), 1);
    mgr.sweep(t0 + Duration::from_secs(300));
    assert_eq!(mgr.session_count(), 0);
}

#[test]
fn unknown_message_is_expired() {
    let mut mgr = BrowserManager::new();
    let outcome = mgr.navigate(
        MessageId::new(12345),
        UserId::new(OWNER),
        NavSignal::Next,
        Instant::now(),
    );
    assert_eq!(outcome, NavOutcome::Expired);
}

#[test]
fn single_card_collections_render_without_navigation() {
    assert_eq!(classify(None), View::NotStarted);
    assert_eq!(classify(Some(vec![])), View::Empty);
    assert_eq!(
        classify(Some(vec!["only".to_string()])),
        View::Single("only".to_string())
    );
    assert_eq!(
        classify(Some(vec!["a".to_string(), "b".to_string()])),
        View::Browse(vec!["a".to_string(), "b".to_string()])
    );
}

#[test]
fn nav_signals_parse_from_custom_ids() {
    assert_eq!(
        NavSignal::from_custom_id("collection_prev"),
        Some(NavSignal::Prev)
    );
    assert_eq!(
        NavSignal::from_custom_id("collection_next"),
        Some(NavSignal::Next)
    );
    assert_eq!(NavSignal::from_custom_id("drop_claim"), None);
}
