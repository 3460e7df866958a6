//! Tests for the persistent store: fail-soft loading, round-trip equivalence,
//! and write-through on update.

use photocard_bot::store::{CardDef, CardStore, Document, PlayerRecord};
use std::collections::BTreeMap;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "photocard-store-{}-{}.json",
        std::process::id(),
        name
    ));
    std::fs::remove_file(&path).ok();
    path
}

fn fixture() -> Document {
    let mut doc = Document::default();
    let mut tiers = BTreeMap::new();
    tiers.insert(
        "1".to_string(),
        CardDef {
            name: "Seonghwa Dream".to_string(),
            image: "https://cards.example/hwa-1.png".to_string(),
        },
    );
    doc.cards.insert("Seonghwa".to_string(), tiers);
    let mut player = PlayerRecord::new(1000);
    player.cards.push("Seonghwa Dream (1★)".to_string());
    doc.players.insert("100".to_string(), player);
    doc.drop_channels
        .insert("42".to_string(), "4242".to_string());
    doc
}

#[tokio::test]
async fn missing_file_loads_empty_default() {
    let store = CardStore::load(temp_path("missing"));
    let players = store.read(|doc| doc.players.len()).await;
    assert_eq!(players, 0);
    let cards = store.read(|doc| doc.cards.len()).await;
    assert_eq!(cards, 0);
}

#[tokio::test]
async fn corrupt_file_loads_empty_default() {
    let path = temp_path("corrupt");
    std::fs::write(&path, "{ this is not json").unwrap();
    let store = CardStore::load(&path);
    assert_eq!(store.read(|doc| doc.players.len()).await, 0);
    std::fs::remove_file(&path).ok();
}

#[tokio::test]
async fn save_load_round_trip_is_equivalent() {
    let path = temp_path("roundtrip");
    let original = fixture();
    let store = CardStore::from_document(&path, original.clone());
    store.flush().await.unwrap();

    let reloaded = CardStore::load(&path);
    let doc = reloaded.read(|doc| doc.clone()).await;
    assert_eq!(doc, original);

    // A second save of the untouched document produces identical bytes.
    let first_bytes = std::fs::read_to_string(&path).unwrap();
    reloaded.flush().await.unwrap();
    let second_bytes = std::fs::read_to_string(&path).unwrap();
    assert_eq!(first_bytes, second_bytes);
    std::fs::remove_file(&path).ok();
}

#[tokio::test]
async fn update_writes_through_on_success() {
    let path = temp_path("writethrough");
    let store = CardStore::from_document(&path, fixture());
    store
        .update(|doc| {
            doc.players.insert("200".to_string(), PlayerRecord::new(500));
            Ok::<_, ()>(())
        })
        .await
        .unwrap();

    let reloaded = CardStore::load(&path);
    let coins = reloaded
        .read(|doc| doc.player("200").map(|p| p.coins))
        .await;
    assert_eq!(coins, Some(500));
    std::fs::remove_file(&path).ok();
}

#[tokio::test]
async fn failed_update_does_not_persist() {
    let path = temp_path("failed-update");
    let store = CardStore::from_document(&path, fixture());
    store.flush().await.unwrap();

    let result: Result<(), &str> = store
        .update(|doc| {
            doc.players.insert("300".to_string(), PlayerRecord::new(1));
            Err("rejected")
        })
        .await;
    assert!(result.is_err());

    // The mutation above leaked into memory only through the closure; the
    // on-disk copy must not contain it.
    let reloaded = CardStore::load(&path);
    assert!(reloaded.read(|doc| doc.player("300").is_none()).await);
    std::fs::remove_file(&path).ok();
}
