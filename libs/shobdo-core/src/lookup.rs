//! Lookup index from passage vocabulary tokens to parsed words.

use std::collections::HashMap;

use crate::text::normalize_token;
use crate::types::Word;

/// Maps each resolvable passage token to its word, under the token's
/// uppercase, lowercase and normalized forms.
///
/// A token with no matching word is simply absent; callers treat that as
/// ordinary text, never as an error.
#[derive(Debug, Clone, Default)]
pub struct WordLookupIndex<'a> {
    entries: HashMap<String, &'a Word>,
}

impl<'a> WordLookupIndex<'a> {
    /// Build the index for one passage's vocabulary list.
    ///
    /// The first word in `words` whose id equals the normalized token, or whose
    /// display form equals the token ignoring case, wins.
    pub fn build<S: AsRef<str>>(passage_words: &[S], words: &'a [Word]) -> Self {
        let mut entries = HashMap::with_capacity(passage_words.len() * 3);

        for token in passage_words {
            let token = token.as_ref().trim();
            if token.is_empty() {
                continue;
            }

            let normalized = normalize_token(token);
            let lower = token.to_lowercase();
            let found = words.iter().find(|w| {
                (!normalized.is_empty() && w.id == normalized) || w.word.to_lowercase() == lower
            });

            match found {
                Some(word) => {
                    entries.insert(token.to_uppercase(), word);
                    entries.insert(lower, word);
                    entries.insert(normalized, word);
                }
                None => tracing::debug!("no word found for passage token {:?}", token),
            }
        }

        Self { entries }
    }

    /// Resolve a token by its uppercase, lowercase, then normalized form.
    pub fn get(&self, token: &str) -> Option<&'a Word> {
        let token = token.trim();
        self.entries
            .get(&token.to_uppercase())
            .or_else(|| self.entries.get(&token.to_lowercase()))
            .or_else(|| self.entries.get(&normalize_token(token)))
            .copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.get(token).is_some()
    }

    /// Number of keys, not of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
