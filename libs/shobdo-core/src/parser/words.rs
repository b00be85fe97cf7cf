//! Word-list parser.
//!
//! # Format
//! ```text
//! RESILIENT | প্রতিকূল পরিস্থিতিতে মানিয়ে নেওয়ার ক্ষমতা
//! ABANDON | ত্যাগ করা
//! ```
//!
//! A richer JSON dataset may accompany the list; see [`parse_rich_json`].

use serde::Deserialize;

use crate::error::{ContentError, Result};
use crate::text::normalize_token;
use crate::types::{first_letter, Difficulty, PartOfSpeech, Word};

/// A line the parser skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number.
    pub line: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingSeparator,
    EmptyTerm,
    EmptyMeaning,
}

impl SkipReason {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingSeparator => "missing `|` separator",
            Self::EmptyTerm => "empty term",
            Self::EmptyMeaning => "empty meaning",
        }
    }
}

/// Words plus the lines that could not be turned into words.
#[derive(Debug, Clone, Default)]
pub struct WordParseReport {
    pub words: Vec<Word>,
    pub skipped: Vec<SkippedLine>,
}

/// Parse a pipe-delimited word list. Malformed lines are logged and skipped.
pub fn parse(content: &str) -> Vec<Word> {
    parse_with_report(content).words
}

/// Like [`parse`], also returning the skipped lines.
pub fn parse_with_report(content: &str) -> WordParseReport {
    let mut report = WordParseReport::default();

    for (idx, line) in content.lines().enumerate() {
        let line_num = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line) {
            Ok(word) => report.words.push(word),
            Err(reason) => {
                tracing::warn!("skipping word list line {}: {}", line_num, reason.as_str());
                report.skipped.push(SkippedLine {
                    line: line_num,
                    reason,
                });
            }
        }
    }

    tracing::debug!(
        "parsed {} words, skipped {} lines",
        report.words.len(),
        report.skipped.len()
    );
    report
}

fn parse_line(line: &str) -> std::result::Result<Word, SkipReason> {
    let mut fields = line.split('|');
    let term = fields.next().unwrap_or_default().trim();
    let meaning = fields.next().ok_or(SkipReason::MissingSeparator)?.trim();

    if term.is_empty() {
        return Err(SkipReason::EmptyTerm);
    }
    if meaning.is_empty() {
        return Err(SkipReason::EmptyMeaning);
    }

    Ok(Word::new(term, meaning))
}

/// Entry of the rich JSON word dataset. Only `word` is required.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RichRecord {
    word: String,
    #[serde(default)]
    pronunciation: String,
    #[serde(default)]
    part_of_speech: Option<String>,
    #[serde(default)]
    smart_meaning: String,
    #[serde(default)]
    bangla_meaning: String,
    #[serde(default)]
    detailed_bangla_meaning: String,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    antonyms: Vec<String>,
    #[serde(default)]
    examples: Vec<String>,
    #[serde(default)]
    difficulty: Option<Difficulty>,
}

/// A word from the rich dataset, remembering which fields the source set
/// explicitly so enrichment only overrides those.
#[derive(Debug, Clone, PartialEq)]
pub struct RichWord {
    pub word: Word,
    pub explicit_difficulty: bool,
    pub explicit_part_of_speech: bool,
}

impl From<RichRecord> for RichWord {
    fn from(record: RichRecord) -> Self {
        let term = record.word.trim().to_string();
        let explicit_difficulty = record.difficulty.is_some();
        let explicit_part_of_speech = record.part_of_speech.is_some();

        let word = Word {
            id: normalize_token(&term),
            pronunciation: record.pronunciation.trim().to_string(),
            part_of_speech: record
                .part_of_speech
                .as_deref()
                .map(PartOfSpeech::from_label)
                .unwrap_or_default(),
            smart_meaning: record.smart_meaning.trim().to_string(),
            bangla_meaning: record.bangla_meaning.trim().to_string(),
            detailed_bangla_meaning: record.detailed_bangla_meaning.trim().to_string(),
            synonyms: record.synonyms,
            antonyms: record.antonyms,
            examples: record.examples,
            difficulty: record
                .difficulty
                .unwrap_or_else(|| Difficulty::from_length(&term)),
            first_letter: first_letter(&term),
            word: term,
        };

        Self {
            word,
            explicit_difficulty,
            explicit_part_of_speech,
        }
    }
}

/// Parse the rich JSON word dataset (an array of records).
///
/// Records with a blank `word` are skipped with a warning.
pub fn parse_rich_json(content: &str) -> Result<Vec<RichWord>> {
    if content.trim().is_empty() {
        return Err(ContentError::EmptyContent { asset: "word dataset" });
    }
    let records: Vec<RichRecord> = serde_json::from_str(content)?;

    Ok(records
        .into_iter()
        .enumerate()
        .filter_map(|(idx, record)| {
            if record.word.trim().is_empty() {
                tracing::warn!("skipping rich word record {}: empty word", idx);
                return None;
            }
            Some(RichWord::from(record))
        })
        .collect())
}
