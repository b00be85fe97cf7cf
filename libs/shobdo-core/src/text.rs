//! Small text helpers shared by the parsers, the lookup index and the
//! highlighter.

const ZERO_WIDTH: [char; 5] = ['\u{200B}', '\u{200C}', '\u{200D}', '\u{2060}', '\u{FEFF}'];

/// Lowercase and drop every non-letter character.
///
/// This is the key used for word ids and for token lookups, so `Well-being`,
/// `WELL BEING` and `wellbeing` all normalize to `wellbeing`.
pub fn normalize_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Remove zero-width marks left behind by copy-pasted source text.
pub fn strip_zero_width(text: &str) -> String {
    text.chars().filter(|c| !ZERO_WIDTH.contains(c)).collect()
}

/// Bengali block, U+0980..=U+09FF.
pub fn is_bengali(c: char) -> bool {
    ('\u{0980}'..='\u{09FF}').contains(&c)
}

pub fn contains_bengali(text: &str) -> bool {
    text.chars().any(is_bengali)
}

/// Truncate to at most `max` characters without splitting a character.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
