//! The card browser: a paginated, per-message view over one player's
//! collection.
//!
//! Split in two so the navigation and timeout logic is testable without a
//! gateway connection: [`Pager`] is the pure circular page counter, and
//! [`BrowserManager`] owns the live sessions keyed by message id, expiring
//! them after 120 seconds of inactivity against an injected `Instant`.

use crate::constants::BROWSE_TIMEOUT_SECS;
use serenity::model::id::{MessageId, UserId};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Circular page index over a fixed-length list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    index: usize,
    len: usize,
}

impl Pager {
    /// `len` must be at least 1; single-item lists never get a pager attached,
    /// but the math tolerates them.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    pub fn prev(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSignal {
    Prev,
    Next,
}

impl NavSignal {
    pub fn from_custom_id(id: &str) -> Option<Self> {
        match id {
            "collection_prev" => Some(Self::Prev),
            "collection_next" => Some(Self::Next),
            _ => None,
        }
    }
}

/// What a navigation signal produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    /// Advance accepted: re-render this page.
    Page {
        index: usize,
        total: usize,
        card: String,
    },
    /// Signal came from someone other than the session owner; ignored.
    NotYours,
    /// Session idled past the timeout (or never existed); the rendered message
    /// stays as-is with inert buttons.
    Expired,
}

struct BrowserSession {
    owner: UserId,
    /// Read-only snapshot of the collection at open time.
    cards: Vec<String>,
    pager: Pager,
    last_nav: Instant,
}

/// Live browser sessions, one per rendered message.
#[derive(Default)]
pub struct BrowserManager {
    sessions: HashMap<MessageId, BrowserSession>,
}

impl BrowserManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a session for a freshly rendered message. Callers only open
    /// sessions for collections with more than one card.
    pub fn open(&mut self, message_id: MessageId, owner: UserId, cards: Vec<String>, now: Instant) {
        let pager = Pager::new(cards.len());
        self.sessions.insert(
            message_id,
            BrowserSession {
                owner,
                cards,
                pager,
                last_nav: now,
            },
        );
    }

    /// Applies one navigation signal. Expired sessions are removed; a signal
    /// from a non-owner leaves the session untouched.
    pub fn navigate(
        &mut self,
        message_id: MessageId,
        user: UserId,
        signal: NavSignal,
        now: Instant,
    ) -> NavOutcome {
        let Some(session) = self.sessions.get_mut(&message_id) else {
            return NavOutcome::Expired;
        };
        if now.duration_since(session.last_nav) > Duration::from_secs(BROWSE_TIMEOUT_SECS) {
            self.sessions.remove(&message_id);
            return NavOutcome::Expired;
        }
        if session.owner != user {
            return NavOutcome::NotYours;
        }
        let index = match signal {
            NavSignal::Next => session.pager.next(),
            NavSignal::Prev => session.pager.prev(),
        };
        session.last_nav = now;
        NavOutcome::Page {
            index,
            total: session.pager.len(),
            card: session.cards[index].clone(),
        }
    }

    /// Drops every session idle past the timeout. Run periodically so the map
    /// does not grow with abandoned messages.
    pub fn sweep(&mut self, now: Instant) {
        self.sessions.retain(|_, s| {
            now.duration_since(s.last_nav) <= Duration::from_secs(BROWSE_TIMEOUT_SECS)
        });
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
