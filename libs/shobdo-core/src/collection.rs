//! Flashcard and memorized-word collections.
//!
//! Membership logic lives in [`WordCollections`]; where the ids are kept is
//! decided by the injected [`CollectionStore`]. [`MemoryStore`] is the
//! in-process backend, the host crate provides persistent ones.

use std::collections::BTreeMap;
use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use crate::types::Word;

/// A named set of word ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    Flashcards,
    Memorized,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 2] = [Self::Flashcards, Self::Memorized];

    /// Stable storage key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flashcards => "flashcards",
            Self::Memorized => "memorized",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "flashcards" => Some(Self::Flashcards),
            "memorized" => Some(Self::Memorized),
            _ => None,
        }
    }
}

/// Storage backend for collections.
///
/// `members` returns ids in insertion order. `insert` and `remove` report
/// whether membership changed.
pub trait CollectionStore {
    type Error: std::error::Error;

    fn members(&self, kind: CollectionKind) -> Result<Vec<String>, Self::Error>;
    fn contains(&self, kind: CollectionKind, word_id: &str) -> Result<bool, Self::Error>;
    fn insert(&mut self, kind: CollectionKind, word_id: &str) -> Result<bool, Self::Error>;
    fn remove(&mut self, kind: CollectionKind, word_id: &str) -> Result<bool, Self::Error>;
}

/// Collections held in memory for the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStore {
    entries: BTreeMap<CollectionKind, Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CollectionStore for MemoryStore {
    type Error = Infallible;

    fn members(&self, kind: CollectionKind) -> Result<Vec<String>, Self::Error> {
        Ok(self.entries.get(&kind).cloned().unwrap_or_default())
    }

    fn contains(&self, kind: CollectionKind, word_id: &str) -> Result<bool, Self::Error> {
        Ok(self
            .entries
            .get(&kind)
            .map_or(false, |ids| ids.iter().any(|id| id == word_id)))
    }

    fn insert(&mut self, kind: CollectionKind, word_id: &str) -> Result<bool, Self::Error> {
        let ids = self.entries.entry(kind).or_default();
        if ids.iter().any(|id| id == word_id) {
            return Ok(false);
        }
        ids.push(word_id.to_string());
        Ok(true)
    }

    fn remove(&mut self, kind: CollectionKind, word_id: &str) -> Result<bool, Self::Error> {
        let Some(ids) = self.entries.get_mut(&kind) else {
            return Ok(false);
        };
        let before = ids.len();
        ids.retain(|id| id != word_id);
        Ok(ids.len() != before)
    }
}

/// Membership operations over an injected store.
#[derive(Debug)]
pub struct WordCollections<S> {
    store: S,
}

impl<S: CollectionStore> WordCollections<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Whether the word is in the collection.
    pub fn get(&self, kind: CollectionKind, word: &Word) -> Result<bool, S::Error> {
        self.store.contains(kind, &word.id)
    }

    /// Add a word. Returns `false` if it was already there.
    pub fn add(&mut self, kind: CollectionKind, word: &Word) -> Result<bool, S::Error> {
        let added = self.store.insert(kind, &word.id)?;
        if added {
            tracing::debug!("added {} to {}", word.id, kind.as_str());
        }
        Ok(added)
    }

    /// Remove a word. Returns `false` if it was not there.
    pub fn remove(&mut self, kind: CollectionKind, word: &Word) -> Result<bool, S::Error> {
        let removed = self.store.remove(kind, &word.id)?;
        if removed {
            tracing::debug!("removed {} from {}", word.id, kind.as_str());
        }
        Ok(removed)
    }

    /// Flip membership and return the new state.
    pub fn toggle(&mut self, kind: CollectionKind, word: &Word) -> Result<bool, S::Error> {
        if self.get(kind, word)? {
            self.remove(kind, word)?;
            Ok(false)
        } else {
            self.add(kind, word)?;
            Ok(true)
        }
    }

    /// Word ids in insertion order.
    pub fn list(&self, kind: CollectionKind) -> Result<Vec<String>, S::Error> {
        self.store.members(kind)
    }

    /// Resolve the collection against loaded words, skipping ids that no
    /// longer exist in the content.
    pub fn resolve<'a>(
        &self,
        kind: CollectionKind,
        words: &'a [Word],
    ) -> Result<Vec<&'a Word>, S::Error> {
        Ok(self
            .list(kind)?
            .iter()
            .filter_map(|id| words.iter().find(|w| &w.id == id))
            .collect())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn word(term: &str) -> Word {
        Word::new(term, "অর্থ")
    }

    #[test]
    fn add_list_remove() {
        let mut collections = WordCollections::new(MemoryStore::new());
        let apple = word("APPLE");
        let brave = word("BRAVE");

        assert!(collections.add(CollectionKind::Flashcards, &brave).unwrap());
        assert!(collections.add(CollectionKind::Flashcards, &apple).unwrap());
        assert!(!collections.add(CollectionKind::Flashcards, &apple).unwrap());
        assert_eq!(collections.list(CollectionKind::Flashcards).unwrap(), vec!["brave", "apple"]);
        assert!(collections.list(CollectionKind::Memorized).unwrap().is_empty());

        assert!(collections.remove(CollectionKind::Flashcards, &brave).unwrap());
        assert!(!collections.remove(CollectionKind::Flashcards, &brave).unwrap());
        assert_eq!(collections.list(CollectionKind::Flashcards).unwrap(), vec!["apple"]);
    }

    #[test]
    fn toggle_flips_membership() {
        let mut collections = WordCollections::new(MemoryStore::new());
        let apple = word("APPLE");

        assert!(collections.toggle(CollectionKind::Memorized, &apple).unwrap());
        assert!(collections.get(CollectionKind::Memorized, &apple).unwrap());
        assert!(!collections.toggle(CollectionKind::Memorized, &apple).unwrap());
        assert!(!collections.get(CollectionKind::Memorized, &apple).unwrap());
    }

    #[test]
    fn collections_are_independent() {
        let mut collections = WordCollections::new(MemoryStore::new());
        let apple = word("APPLE");
        collections.add(CollectionKind::Flashcards, &apple).unwrap();
        assert!(!collections.get(CollectionKind::Memorized, &apple).unwrap());
    }

    #[test]
    fn resolve_skips_unknown_ids() {
        let words = vec![word("APPLE"), word("BRAVE")];
        let mut collections = WordCollections::new(MemoryStore::new());
        collections.add(CollectionKind::Flashcards, &word("GONE")).unwrap();
        collections.add(CollectionKind::Flashcards, &words[1]).unwrap();

        let resolved = collections.resolve(CollectionKind::Flashcards, &words).unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].word, "BRAVE");
    }

    #[test]
    fn kind_keys_round_trip() {
        for kind in CollectionKind::ALL {
            assert_eq!(CollectionKind::from_str(kind.as_str()), Some(kind));
        }
    }
}
