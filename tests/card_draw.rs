//! Tests for the two-stage uniform card draw and display formatting.

use photocard_bot::economy::draw::draw_card;
use photocard_bot::store::{CardDef, Catalog};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeMap;

fn card(name: &str) -> CardDef {
    CardDef {
        name: name.to_string(),
        image: format!("https://cards.example/{}.png", name.replace(' ', "-")),
    }
}

#[test]
fn empty_catalog_draws_nothing() {
    let catalog = Catalog::new();
    let mut rng = StdRng::seed_from_u64(1);
    assert!(draw_card(&catalog, &mut rng).is_none());
}

#[test]
fn member_with_no_tiers_is_skipped() {
    let mut catalog = Catalog::new();
    catalog.insert("Ghost".to_string(), BTreeMap::new());
    let mut tiers = BTreeMap::new();
    tiers.insert("1".to_string(), card("Only Card"));
    catalog.insert("Solo".to_string(), tiers);

    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..20 {
        let drawn = draw_card(&catalog, &mut rng).unwrap();
        assert_eq!(drawn.member, "Solo");
    }
}

#[test]
fn display_matches_collection_format() {
    let mut catalog = Catalog::new();
    let mut tiers = BTreeMap::new();
    tiers.insert("3".to_string(), card("Seonghwa Stage"));
    catalog.insert("Seonghwa".to_string(), tiers);

    let mut rng = StdRng::seed_from_u64(1);
    let drawn = draw_card(&catalog, &mut rng).unwrap();
    assert_eq!(drawn.display(), "Seonghwa Stage (3★)");
}

#[test]
fn draw_is_uniform_per_member_not_per_card() {
    // "Solo" has one tier, "Duo" has two. The member pick is uniform, so Solo
    // lands about half the draws even though it owns a third of the cards.
    // That over-representation is intentional.
    let mut catalog = Catalog::new();
    let mut solo = BTreeMap::new();
    solo.insert("1".to_string(), card("Solo One"));
    catalog.insert("Solo".to_string(), solo);
    let mut duo = BTreeMap::new();
    duo.insert("1".to_string(), card("Duo One"));
    duo.insert("2".to_string(), card("Duo Two"));
    catalog.insert("Duo".to_string(), duo);

    let mut rng = StdRng::seed_from_u64(42);
    let mut solo_hits = 0;
    for _ in 0..1000 {
        if draw_card(&catalog, &mut rng).unwrap().member == "Solo" {
            solo_hits += 1;
        }
    }
    assert!(
        (400..=600).contains(&solo_hits),
        "expected ~500 solo draws, got {solo_hits}"
    );
}
