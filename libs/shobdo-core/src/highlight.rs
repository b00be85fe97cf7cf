//! Splitting passage text into plain runs and vocabulary matches.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::lookup::WordLookupIndex;
use crate::types::Word;

static BENGALI_GLOSS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[ \t]*\([^()]*\p{Bengali}[^()]*\)").expect("valid gloss regex")
});

/// Language of the text being segmented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Bangla,
    English,
}

/// A contiguous run of rendered text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment<'a> {
    Text { text: String },
    Word { text: String, word: &'a Word },
}

impl<'a> Segment<'a> {
    /// The run's text exactly as it appears in the input.
    pub fn as_str(&self) -> &str {
        match self {
            Segment::Text { text } | Segment::Word { text, .. } => text,
        }
    }

    pub fn word(&self) -> Option<&'a Word> {
        match self {
            Segment::Word { word, .. } => Some(*word),
            Segment::Text { .. } => None,
        }
    }
}

/// Remove parenthetical asides that contain Bengali script, along with the
/// whitespace before them. These are translator glosses in English text.
pub fn strip_bengali_glosses(text: &str) -> String {
    BENGALI_GLOSS.replace_all(text, "").into_owned()
}

/// Compile a case-insensitive whole-word regex over the vocabulary, or
/// `None` when there is nothing to match.
///
/// Word boundaries are ASCII only: Latin letters, digits and `_` next to a
/// token block the match, Bengali case endings such as `ের` do not.
fn vocabulary_regex<S: AsRef<str>>(vocabulary: &[S]) -> Option<Regex> {
    let mut tokens: Vec<&str> = vocabulary
        .iter()
        .map(|t| t.as_ref().trim())
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.is_empty() {
        return None;
    }

    // Longest first so multi-word tokens win over their prefixes.
    tokens.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
    tokens.dedup();

    let alternation = tokens
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");

    match RegexBuilder::new(&format!(r"(?-u:\b)(?:{})(?-u:\b)", alternation))
        .case_insensitive(true)
        .build()
    {
        Ok(regex) => Some(regex),
        Err(e) => {
            tracing::warn!("could not compile vocabulary pattern: {}", e);
            None
        }
    }
}

/// Split `text` into plain runs and vocabulary matches.
///
/// Concatenating the returned runs gives back `text` (after gloss removal for
/// English). Matches the index cannot resolve stay plain text.
pub fn segment<'a, S: AsRef<str>>(
    text: &str,
    vocabulary: &[S],
    index: &WordLookupIndex<'a>,
    language: Language,
) -> Vec<Segment<'a>> {
    let text = match language {
        Language::English => strip_bengali_glosses(text),
        Language::Bangla => text.to_string(),
    };

    let mut segments = Vec::new();
    let Some(regex) = vocabulary_regex(vocabulary) else {
        push_text(&mut segments, &text);
        return segments;
    };

    let mut last = 0;
    for m in regex.find_iter(&text) {
        push_text(&mut segments, &text[last..m.start()]);
        match index.get(m.as_str()) {
            Some(word) => segments.push(Segment::Word {
                text: m.as_str().to_string(),
                word,
            }),
            None => push_text(&mut segments, m.as_str()),
        }
        last = m.end();
    }
    push_text(&mut segments, &text[last..]);

    segments
}

/// Append plain text, merging with a preceding plain run.
fn push_text(segments: &mut Vec<Segment<'_>>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Segment::Text { text: previous }) = segments.last_mut() {
        previous.push_str(text);
        return;
    }
    segments.push(Segment::Text {
        text: text.to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn words() -> Vec<Word> {
        vec![
            Word::new("APPLE", "আপেল"),
            Word::new("APPLE PIE", "আপেল পিঠা"),
            Word::new("RESILIENT", "সহনশীল"),
        ]
    }

    fn joined(segments: &[Segment<'_>]) -> String {
        segments.iter().map(Segment::as_str).collect()
    }

    #[test]
    fn bengali_suffix_does_not_block_match() {
        let words = vec![Word::new("ZEAL", "উদ্দীপনা")];
        let vocab = ["ZEAL"];
        let index = WordLookupIndex::build(&vocab, &words);

        let texts = [
            "সে ZEALের সাথে কাজ করল।",
            "সে ZEAL-এর সাথে কাজ করল।",
            "সে ZEAL নিয়ে কাজ করল।",
        ];
        for text in texts {
            let segments = segment(text, &vocab, &index, Language::Bangla);
            let matched: Vec<&str> = segments
                .iter()
                .filter(|s| s.word().is_some())
                .map(Segment::as_str)
                .collect();
            assert_eq!(matched, vec!["ZEAL"], "text: {}", text);
            assert_eq!(joined(&segments), text);
        }
    }

    #[test]
    fn latin_letters_still_block_match() {
        let words = vec![Word::new("ZEAL", "উদ্দীপনা")];
        let vocab = ["ZEAL"];
        let index = WordLookupIndex::build(&vocab, &words);

        let segments = segment("zealous zeals ZEAL_1", &vocab, &index, Language::Bangla);
        assert!(segments.iter().all(|s| s.word().is_none()));
    }

    #[test]
    fn segments_whole_words_case_insensitively() {
        let words = words();
        let vocab = ["APPLE", "RESILIENT"];
        let index = WordLookupIndex::build(&vocab, &words);
        let text = "An apple a day keeps pineapples away, Resilient!";

        let segments = segment(text, &vocab, &index, Language::Bangla);
        let matched: Vec<&str> = segments
            .iter()
            .filter(|s| s.word().is_some())
            .map(Segment::as_str)
            .collect();
        assert_eq!(matched, vec!["apple", "Resilient"]);
        assert_eq!(joined(&segments), text);
    }

    #[test]
    fn longer_tokens_win() {
        let words = words();
        let vocab = ["APPLE", "APPLE PIE"];
        let index = WordLookupIndex::build(&vocab, &words);

        let segments = segment("I baked apple pie.", &vocab, &index, Language::Bangla);
        assert_eq!(segments[1].as_str(), "apple pie");
        assert_eq!(segments[1].word().unwrap().word, "APPLE PIE");
    }

    #[test]
    fn english_glosses_are_removed() {
        let words = words();
        let vocab = ["RESILIENT"];
        let index = WordLookupIndex::build(&vocab, &words);

        let segments = segment(
            "She was resilient (সহনশীল) and calm (quiet).",
            &vocab,
            &index,
            Language::English,
        );
        assert_eq!(joined(&segments), "She was resilient and calm (quiet).");
    }

    #[test]
    fn unresolved_match_degrades_to_text() {
        let words = words();
        let vocab = ["BANANA"];
        let index = WordLookupIndex::build(&vocab, &words);

        let segments = segment("A banana split.", &vocab, &index, Language::Bangla);
        assert_eq!(
            segments,
            vec![Segment::Text {
                text: "A banana split.".to_string()
            }]
        );
    }

    #[test]
    fn empty_vocabulary_yields_single_run() {
        let words = words();
        let vocab: [&str; 0] = [];
        let index = WordLookupIndex::build(&vocab, &words);

        assert_eq!(segment("plain", &vocab, &index, Language::Bangla).len(), 1);
        assert!(segment("", &vocab, &index, Language::Bangla).is_empty());
    }

    #[test]
    fn regex_metacharacters_are_escaped() {
        let words = vec![Word::new("a.b", "উদাহরণ")];
        let vocab = ["a.b", "(x"];
        let index = WordLookupIndex::build(&vocab, &words);

        let segments = segment("axb and a.b code", &vocab, &index, Language::Bangla);
        assert_eq!(joined(&segments), "axb and a.b code");
        let matched: Vec<&str> = segments
            .iter()
            .filter(|s| s.word().is_some())
            .map(Segment::as_str)
            .collect();
        assert_eq!(matched, vec!["a.b"]);
    }

    #[test]
    fn segmenting_is_idempotent() {
        let words = words();
        let vocab = ["APPLE", "RESILIENT"];
        let index = WordLookupIndex::build(&vocab, &words);
        let text = "Resilient apple farmers (কৃষক) grow APPLE trees.";

        let first = segment(text, &vocab, &index, Language::English);
        let second = segment(text, &vocab, &index, Language::English);
        assert_eq!(first, second);
    }
}
