//! Highlighted passage views.

use serde::Serialize;
use shobdo_core::{segment, Language, Passage, Segment, Word, WordLookupIndex};

/// A passage split into highlighted runs, ready for display.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassageView<'a> {
    pub passage: &'a Passage,
    pub bangla: Vec<Segment<'a>>,
    pub english: Vec<Segment<'a>>,
    #[serde(skip)]
    index: WordLookupIndex<'a>,
}

impl<'a> PassageView<'a> {
    pub fn build(passage: &'a Passage, words: &'a [Word]) -> Self {
        let index = WordLookupIndex::build(&passage.words, words);
        let bangla = segment(&passage.bangla_text, &passage.words, &index, Language::Bangla);
        let english = segment(&passage.english_text, &passage.words, &index, Language::English);

        Self {
            passage,
            bangla,
            english,
            index,
        }
    }

    /// Resolve one vocabulary token.
    pub fn lookup(&self, token: &str) -> Option<&'a Word> {
        self.index.get(token)
    }

    /// Resolved vocabulary words in passage order, each once.
    pub fn vocabulary(&self) -> Vec<&'a Word> {
        let mut resolved: Vec<&'a Word> = Vec::new();
        for token in &self.passage.words {
            if let Some(word) = self.index.get(token) {
                if !resolved.iter().any(|w| w.id == word.id) {
                    resolved.push(word);
                }
            }
        }
        resolved
    }

    /// Vocabulary tokens with no matching word.
    pub fn unresolved(&self) -> Vec<&'a str> {
        self.passage
            .words
            .iter()
            .filter(|token| !self.index.contains(token))
            .map(String::as_str)
            .collect()
    }

    /// Number of highlighted runs across both languages.
    pub fn highlight_count(&self) -> usize {
        self.bangla
            .iter()
            .chain(&self.english)
            .filter(|s| s.word().is_some())
            .count()
    }
}
