//! In-memory word library: grouping, filtering and search.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::parser::words::RichWord;
use crate::types::{Difficulty, Word};

/// Read-only collection of parsed words, in source order.
#[derive(Debug, Clone, Default)]
pub struct WordLibrary {
    words: Vec<Word>,
}

impl WordLibrary {
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// First word with the given id.
    pub fn get(&self, id: &str) -> Option<&Word> {
        self.words.iter().find(|w| w.id == id)
    }

    /// Words grouped under their first letter, letters in ascending order.
    pub fn by_first_letter(&self) -> BTreeMap<char, Vec<&Word>> {
        let mut groups: BTreeMap<char, Vec<&Word>> = BTreeMap::new();
        for word in &self.words {
            groups.entry(word.first_letter).or_default().push(word);
        }
        groups
    }

    pub fn by_difficulty(&self, difficulty: Difficulty) -> Vec<&Word> {
        self.words
            .iter()
            .filter(|w| w.difficulty == difficulty)
            .collect()
    }

    /// Case-insensitive substring search over the display form and the
    /// Bangla meaning. A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&Word> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.words
            .iter()
            .filter(|w| w.word.to_lowercase().contains(&query) || w.bangla_meaning.contains(&query))
            .collect()
    }

    /// Merge the rich dataset into the pipe-parsed words.
    ///
    /// For a word id present in both, every non-empty rich field replaces the
    /// parsed one, and an explicit rich difficulty replaces the length-derived
    /// one. Rich-only words are appended in dataset order.
    pub fn enrich(&mut self, rich: Vec<RichWord>) {
        let mut by_id: HashMap<String, RichWord> = HashMap::with_capacity(rich.len());
        let mut order = Vec::with_capacity(rich.len());
        for entry in rich {
            if !by_id.contains_key(&entry.word.id) {
                order.push(entry.word.id.clone());
            }
            by_id.entry(entry.word.id.clone()).or_insert(entry);
        }

        let mut merged = 0;
        for word in &mut self.words {
            if let Some(entry) = by_id.get(&word.id) {
                apply(word, entry);
                merged += 1;
            }
        }

        let known: HashSet<String> = self.words.iter().map(|w| w.id.clone()).collect();
        let mut appended = 0;
        for id in order {
            if known.contains(&id) {
                continue;
            }
            if let Some(entry) = by_id.remove(&id) {
                self.words.push(entry.word);
                appended += 1;
            }
        }

        tracing::debug!("enriched {} words, appended {} rich-only words", merged, appended);
    }
}

fn apply(word: &mut Word, entry: &RichWord) {
    let rich = &entry.word;
    let replace = |target: &mut String, value: &str| {
        if !value.is_empty() {
            *target = value.to_string();
        }
    };
    let replace_list = |target: &mut Vec<String>, value: &[String]| {
        if !value.is_empty() {
            *target = value.to_vec();
        }
    };

    replace(&mut word.pronunciation, &rich.pronunciation);
    replace(&mut word.smart_meaning, &rich.smart_meaning);
    replace(&mut word.bangla_meaning, &rich.bangla_meaning);
    replace(&mut word.detailed_bangla_meaning, &rich.detailed_bangla_meaning);
    replace_list(&mut word.synonyms, &rich.synonyms);
    replace_list(&mut word.antonyms, &rich.antonyms);
    replace_list(&mut word.examples, &rich.examples);

    if entry.explicit_part_of_speech {
        word.part_of_speech = rich.part_of_speech;
    }
    if entry.explicit_difficulty {
        word.difficulty = rich.difficulty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::words::{parse, parse_rich_json};
    use crate::types::PartOfSpeech;
    use pretty_assertions::assert_eq;

    fn library() -> WordLibrary {
        WordLibrary::new(parse(
            "APPLE | আপেল\nABANDON | ত্যাগ করা\nBRAVE | সাহসী\nRESILIENT | সহনশীল",
        ))
    }

    #[test]
    fn groups_by_first_letter() {
        let library = library();
        let groups = library.by_first_letter();
        let letters: Vec<char> = groups.keys().copied().collect();
        assert_eq!(letters, vec!['A', 'B', 'R']);
        assert_eq!(groups[&'A'].len(), 2);
    }

    #[test]
    fn filters_by_difficulty() {
        let library = library();
        let hard: Vec<&str> = library
            .by_difficulty(Difficulty::Hard)
            .iter()
            .map(|w| w.word.as_str())
            .collect();
        assert_eq!(hard, vec!["RESILIENT"]);
    }

    #[test]
    fn search_matches_term_and_meaning() {
        let library = library();
        assert_eq!(library.search("ban")[0].word, "ABANDON");
        assert_eq!(library.search("সাহসী")[0].word, "BRAVE");
        assert!(library.search("   ").is_empty());
    }

    #[test]
    fn rich_data_takes_precedence() {
        let mut library = library();
        let rich = parse_rich_json(
            r#"[
                {"word": "apple", "difficulty": "hard", "partOfSpeech": "noun", "synonyms": ["fruit"]},
                {"word": "Brave", "banglaMeaning": "নির্ভীক"},
                {"word": "Zeal", "banglaMeaning": "উদ্দীপনা"}
            ]"#,
        )
        .unwrap();
        library.enrich(rich);

        let apple = library.get("apple").unwrap();
        assert_eq!(apple.difficulty, Difficulty::Hard);
        assert_eq!(apple.part_of_speech, PartOfSpeech::Noun);
        assert_eq!(apple.synonyms, vec!["fruit"]);
        assert_eq!(apple.bangla_meaning, "আপেল");
        assert_eq!(apple.word, "APPLE");

        let brave = library.get("brave").unwrap();
        assert_eq!(brave.bangla_meaning, "নির্ভীক");
        assert_eq!(brave.difficulty, Difficulty::Easy);

        assert_eq!(library.len(), 5);
        assert_eq!(library.words()[4].word, "Zeal");
    }
}
