//! Core types for vocabulary and grammar content.

use serde::{Deserialize, Serialize};

use crate::text::normalize_token;

/// Word difficulty bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Length heuristic: up to 5 characters is easy, 6 to 8 medium, longer hard.
    pub fn from_length(word: &str) -> Self {
        match word.trim().chars().count() {
            0..=5 => Self::Easy,
            6..=8 => Self::Medium,
            _ => Self::Hard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

/// Part of speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Noun,
    Pronoun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Interjection,
    Phrase,
    Other,
}

impl Default for PartOfSpeech {
    fn default() -> Self {
        Self::Other
    }
}

impl PartOfSpeech {
    /// Parse a free-form label such as `n.`, `Adj`, or `verb`.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim().trim_end_matches('.').to_lowercase();
        match label.as_str() {
            "n" | "noun" => Self::Noun,
            "pron" | "pronoun" => Self::Pronoun,
            "v" | "vb" | "verb" => Self::Verb,
            "adj" | "adjective" => Self::Adjective,
            "adv" | "adverb" => Self::Adverb,
            "prep" | "preposition" => Self::Preposition,
            "conj" | "conjunction" => Self::Conjunction,
            "interj" | "interjection" => Self::Interjection,
            "phr" | "phrase" | "idiom" => Self::Phrase,
            _ => Self::Other,
        }
    }
}

/// A vocabulary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    /// Lowercase, letters-only key derived from `word`.
    pub id: String,
    pub word: String,
    pub pronunciation: String,
    pub part_of_speech: PartOfSpeech,
    pub smart_meaning: String,
    pub bangla_meaning: String,
    pub detailed_bangla_meaning: String,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    pub examples: Vec<String>,
    pub difficulty: Difficulty,
    pub first_letter: char,
}

impl Word {
    /// Build a word from a term and its Bangla meaning, deriving the id,
    /// difficulty and first letter from the term.
    pub fn new(term: &str, bangla_meaning: &str) -> Self {
        let term = term.trim();
        let meaning = bangla_meaning.trim();

        Self {
            id: normalize_token(term),
            word: term.to_string(),
            pronunciation: String::new(),
            part_of_speech: PartOfSpeech::default(),
            smart_meaning: meaning.to_string(),
            bangla_meaning: meaning.to_string(),
            detailed_bangla_meaning: meaning.to_string(),
            synonyms: Vec::new(),
            antonyms: Vec::new(),
            examples: Vec::new(),
            difficulty: Difficulty::from_length(term),
            first_letter: first_letter(term),
        }
    }
}

/// Uppercased first character, or `#` for an empty term.
pub(crate) fn first_letter(term: &str) -> char {
    term.chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or('#')
}

/// A bilingual reading passage with its target vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passage {
    pub id: u32,
    pub title: String,
    /// Uppercase vocabulary tokens in source order.
    pub words: Vec<String>,
    pub bangla_text: String,
    pub english_text: String,
}

/// Kind of a grammar chapter section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Rule,
    Example,
    Shortcut,
    Note,
    Practice,
    Content,
}

/// One section of a grammar chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SectionKind,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english_content: Option<String>,
    #[serde(default)]
    pub examples: Vec<String>,
}

impl Section {
    pub fn new(
        id: impl Into<String>,
        kind: SectionKind,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            content: content.into(),
            english_content: None,
            examples: Vec::new(),
        }
    }
}

/// Chapter body, one variant per chapter archetype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChapterContent {
    /// Sections taken from `Rule-` and `Shortcut Tip-` markers.
    Rules { sections: Vec<Section> },
    /// Sections taken from a numbered list.
    Outline { sections: Vec<Section> },
    /// A single catch-all section holding the raw text.
    Text { section: Section },
    /// Sections supplied by the pre-structured JSON form.
    Curated { sections: Vec<Section> },
}

impl ChapterContent {
    pub fn sections(&self) -> &[Section] {
        match self {
            Self::Rules { sections } | Self::Outline { sections } | Self::Curated { sections } => {
                sections
            }
            Self::Text { section } => std::slice::from_ref(section),
        }
    }
}

/// A grammar chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: u32,
    pub title: String,
    pub title_bengali: String,
    pub description: String,
    pub content: ChapterContent,
}

impl Chapter {
    pub fn sections(&self) -> &[Section] {
        self.content.sections()
    }
}
