//! Collection stores backed by files.

mod common;

use pretty_assertions::assert_eq;

use common::TestContext;
use shobdo_core::{CollectionKind, Word, WordCollections};
use shobdo_library::{JsonFileStore, SqliteStore};

fn words() -> Vec<Word> {
    vec![
        Word::new("ABATE", "কমে যাওয়া"),
        Word::new("RESILIENT", "সহনশীল"),
        Word::new("ZEAL", "উদ্দীপনা"),
    ]
}

#[test]
fn test_sqlite_store_persists() {
    let ctx = TestContext::new();
    let path = ctx.path("collections.db");
    let words = words();

    {
        let mut collections = WordCollections::new(SqliteStore::open(&path).unwrap());
        collections.add(CollectionKind::Flashcards, &words[2]).unwrap();
        collections.add(CollectionKind::Flashcards, &words[0]).unwrap();
        collections.add(CollectionKind::Memorized, &words[1]).unwrap();
    }

    let collections = WordCollections::new(SqliteStore::open(&path).unwrap());
    assert_eq!(
        collections.list(CollectionKind::Flashcards).unwrap(),
        vec!["zeal", "abate"]
    );
    assert!(collections.get(CollectionKind::Memorized, &words[1]).unwrap());

    let entries = collections.store().entries(CollectionKind::Flashcards).unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries[0].added_at <= entries[1].added_at);
}

#[test]
fn test_json_store_persists() {
    let ctx = TestContext::new();
    let path = ctx.path("collections.json");
    let words = words();

    {
        let mut collections = WordCollections::new(JsonFileStore::open(&path).unwrap());
        assert!(collections.toggle(CollectionKind::Memorized, &words[0]).unwrap());
        assert!(collections.toggle(CollectionKind::Memorized, &words[1]).unwrap());
        assert!(!collections.toggle(CollectionKind::Memorized, &words[0]).unwrap());
    }

    let collections = WordCollections::new(JsonFileStore::open(&path).unwrap());
    let resolved: Vec<&str> = collections
        .resolve(CollectionKind::Memorized, &words)
        .unwrap()
        .iter()
        .map(|w| w.word.as_str())
        .collect();
    assert_eq!(resolved, vec!["RESILIENT"]);
}

#[test]
fn test_stores_agree() {
    let ctx = TestContext::new();
    let words = words();
    let mut sqlite = WordCollections::new(SqliteStore::open_in_memory().unwrap());
    let mut json = WordCollections::new(JsonFileStore::open(ctx.path("c.json")).unwrap());

    for word in &words {
        sqlite.add(CollectionKind::Flashcards, word).unwrap();
        json.add(CollectionKind::Flashcards, word).unwrap();
    }
    sqlite.remove(CollectionKind::Flashcards, &words[1]).unwrap();
    json.remove(CollectionKind::Flashcards, &words[1]).unwrap();

    assert_eq!(
        sqlite.list(CollectionKind::Flashcards).unwrap(),
        json.list(CollectionKind::Flashcards).unwrap()
    );
}
