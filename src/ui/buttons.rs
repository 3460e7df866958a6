//! Central button construction helpers so custom ids and styles stay
//! consistent across commands and interaction handlers.

use serenity::builder::{CreateActionRow, CreateButton};
use serenity::model::application::ButtonStyle;

// Component custom ids, grouped by family (the first `_`-separated segment
// routes the interaction in the handler).
pub const COLLECTION_PREV: &str = "collection_prev";
pub const COLLECTION_NEXT: &str = "collection_next";
pub const DROP_CLAIM: &str = "drop_claim";

pub struct Btn;

impl Btn {
    pub fn secondary(id: &str, label: &str) -> CreateButton {
        CreateButton::new(id)
            .label(label)
            .style(ButtonStyle::Secondary)
    }

    pub fn success(id: &str, label: &str) -> CreateButton {
        CreateButton::new(id)
            .label(label)
            .style(ButtonStyle::Success)
    }
}

/// Previous/next row for the card browser.
pub fn browser_nav_row() -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        Btn::secondary(COLLECTION_PREV, "◀ Prev"),
        Btn::secondary(COLLECTION_NEXT, "Next ▶"),
    ])
}

/// Single claim button attached to a passive drop.
pub fn drop_claim_row() -> CreateActionRow {
    CreateActionRow::Buttons(vec![Btn::success(DROP_CLAIM, "Claim 🃏")])
}
