//! Random card selection.
//!
//! The draw is two-stage uniform: pick a member uniformly, then pick one of
//! that member's rarity tiers uniformly. Members with fewer tiers are
//! therefore over-represented per tier relative to a flat draw over all
//! (member, rarity) pairs; that is the intended distribution, not a bug.

use crate::store::Catalog;
use rand::Rng;

/// A resolved draw, carrying everything a handler needs to render the card
/// and append it to a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawnCard {
    pub member: String,
    pub rarity: String,
    pub name: String,
    pub image: String,
}

impl DrawnCard {
    /// The denormalized string stored in a player's collection.
    pub fn display(&self) -> String {
        format!("{} ({}★)", self.name, self.rarity)
    }
}

/// Draws one card, or `None` when the catalog is empty.
pub fn draw_card<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Option<DrawnCard> {
    let members: Vec<_> = catalog
        .iter()
        .filter(|(_, tiers)| !tiers.is_empty())
        .collect();
    if members.is_empty() {
        return None;
    }
    let (member, tiers) = members[rng.random_range(0..members.len())];
    let tier_idx = rng.random_range(0..tiers.len());
    let (rarity, card) = tiers.iter().nth(tier_idx)?;
    Some(DrawnCard {
        member: member.clone(),
        rarity: rarity.clone(),
        name: card.name.clone(),
        image: card.image.clone(),
    })
}
