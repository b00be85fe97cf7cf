//! Answer matching for typed quiz answers.

use serde::{Deserialize, Serialize};

use crate::text::normalize_token;
use crate::types::Word;

/// How strictly a typed answer is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchingMode {
    Exact,
    CaseInsensitive,
    Fuzzy,
}

impl Default for MatchingMode {
    fn default() -> Self {
        Self::CaseInsensitive
    }
}

/// Result of comparing a typed answer to the correct answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// Similarity score between 0.0 and 1.0.
    pub similarity: f64,
    pub matching_mode: MatchingMode,
    /// Normalized typed answer (for display).
    pub typed_normalized: String,
    /// Normalized correct answer (for display).
    pub correct_normalized: String,
}

/// Compare a typed answer to the correct answer.
pub fn compare_answers(
    typed: &str,
    correct: &str,
    mode: MatchingMode,
    fuzzy_threshold: f64,
) -> MatchResult {
    let typed_normalized = normalize_whitespace(typed);
    let correct_normalized = normalize_whitespace(correct);

    let (is_correct, similarity) = match mode {
        MatchingMode::Exact => {
            let is_correct = typed_normalized == correct_normalized;
            (is_correct, if is_correct { 1.0 } else { 0.0 })
        }
        MatchingMode::CaseInsensitive => {
            let is_correct = typed_normalized.to_lowercase() == correct_normalized.to_lowercase();
            (is_correct, if is_correct { 1.0 } else { 0.0 })
        }
        MatchingMode::Fuzzy => {
            let similarity = normalized_similarity(
                &typed_normalized.to_lowercase(),
                &correct_normalized.to_lowercase(),
            );
            (similarity >= fuzzy_threshold, similarity)
        }
    };

    MatchResult {
        is_correct,
        similarity,
        matching_mode: mode,
        typed_normalized,
        correct_normalized,
    }
}

/// Grade a spelling answer against a word's display form.
///
/// An answer that normalizes to the word's id (same letters, ignoring case,
/// hyphens and spaces) is always correct.
pub fn grade_spelling(
    typed: &str,
    word: &Word,
    mode: MatchingMode,
    fuzzy_threshold: f64,
) -> MatchResult {
    let mut result = compare_answers(typed, &word.word, mode, fuzzy_threshold);
    if !result.is_correct && mode != MatchingMode::Exact && normalize_token(typed) == word.id {
        result.is_correct = true;
        result.similarity = 1.0;
    }
    result
}

/// Trim and collapse runs of whitespace.
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Levenshtein distance between two strings, counted in characters.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rows instead of the full matrix
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Normalized similarity (0.0 to 1.0) based on Levenshtein distance.
pub fn normalized_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(a, b);
    1.0 - (distance as f64 / max_len as f64)
}
