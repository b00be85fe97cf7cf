//! Best-effort text helpers for rendering grammar content.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([.!?।])\s+([A-Z\p{Bengali}])").expect("valid sentence break regex")
});

static BILINGUAL_PAIR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(\p{Bengali}[\p{Bengali}\s,;।]*)[\s:=(\-–—]*([A-Za-z][A-Za-z0-9 ,;'’"\-]*[.!?]?)"#)
        .expect("valid bilingual pair regex")
});

/// Insert a paragraph break after sentence-ending punctuation that is
/// followed by an uppercase Latin or a Bengali letter.
pub fn reflow(text: &str) -> String {
    SENTENCE_BREAK.replace_all(text, "${1}\n\n${2}").into_owned()
}

/// A Bengali clause immediately followed by its English counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BilingualPair {
    pub bengali: String,
    pub english: String,
}

/// Find Bengali clauses directly followed by a Latin-script clause.
pub fn bilingual_pairs(text: &str) -> Vec<BilingualPair> {
    BILINGUAL_PAIR
        .captures_iter(text)
        .filter_map(|caps| {
            let bengali = caps[1].trim();
            let english = caps[2].trim();
            if bengali.is_empty() || english.is_empty() {
                return None;
            }
            Some(BilingualPair {
                bengali: bengali.to_string(),
                english: english.to_string(),
            })
        })
        .collect()
}
