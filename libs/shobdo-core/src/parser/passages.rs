//! Reading passage parser.
//!
//! # Format
//! ```text
//! Passage 1: The Brave Farmer
//! (Words: RESILIENT, ABANDON)
//! Bengali Contextual Version
//! কৃষক কখনো হাল ছাড়েননি।
//! English Translation
//! The farmer never gave up.
//! ```
//!
//! Blocks are cut at every `Passage <n>:` header. Ids are kept exactly as
//! written; see [`crate::validate::passage_ids`] for duplicate and gap checks.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::text::strip_zero_width;
use crate::types::Passage;

static HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Passage[ \t]+(\d+)[ \t]*:").expect("valid passage header regex"));

static WORDS_LIST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\(\s*Words\s*:\s*([^)]*)\)").expect("valid words list regex")
});

static BENGALI_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)bengali\s+contextual\s+version").expect("valid bengali marker regex")
});

static ENGLISH_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)english\s+translation").expect("valid english marker regex")
});

/// Parse every passage block in file order.
///
/// A block yielding neither Bangla nor English text is dropped.
pub fn parse(content: &str) -> Vec<Passage> {
    let content = strip_zero_width(content);
    let starts: Vec<usize> = HEADER.find_iter(&content).map(|m| m.start()).collect();

    let mut passages = Vec::with_capacity(starts.len());
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(content.len());
        if let Some(passage) = parse_block(&content[start..end]) {
            passages.push(passage);
        }
    }

    tracing::debug!(
        "parsed {} passages from {} headers",
        passages.len(),
        starts.len()
    );
    passages
}

fn parse_block(block: &str) -> Option<Passage> {
    let caps = HEADER.captures(block)?;
    let header = caps.get(0)?;
    let id = match caps[1].parse::<u32>() {
        Ok(id) => id,
        Err(_) => {
            tracing::warn!("skipping passage with unreadable id {:?}", &caps[1]);
            return None;
        }
    };

    let (header_rest, body) = match block[header.end()..].split_once('\n') {
        Some((rest, body)) => (rest, body),
        None => (&block[header.end()..], ""),
    };
    let title = WORDS_LIST.replace_all(header_rest, "").trim().to_string();
    let words = vocabulary(block);
    let (bangla_text, english_text) = extract_texts(body);

    if bangla_text.is_empty() && english_text.is_empty() {
        tracing::warn!("discarding passage {}: no Bengali or English text found", id);
        return None;
    }

    Some(Passage {
        id,
        title,
        words,
        bangla_text,
        english_text,
    })
}

/// Uppercased, trimmed tokens from the first `(Words: ...)` list.
fn vocabulary(block: &str) -> Vec<String> {
    WORDS_LIST
        .captures(block)
        .map(|caps| {
            caps[1]
                .split(',')
                .map(|w| w.trim().to_uppercase())
                .filter(|w| !w.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Zone {
    Outside,
    Bangla,
    English,
}

fn extract_texts(body: &str) -> (String, String) {
    let mut bangla: Vec<&str> = Vec::new();
    let mut english: Vec<&str> = Vec::new();
    let mut zone = Zone::Outside;
    let mut bangla_opened = false;
    let mut english_closed = false;

    for line in body.lines() {
        let trimmed = line.trim();
        if WORDS_LIST.is_match(trimmed) {
            continue;
        }

        if let Some(rest) = after_marker(&BENGALI_MARKER, trimmed) {
            if zone == Zone::English {
                english_closed = true;
            }
            // Bangla text is a single span; later markers start ignored text
            if bangla_opened {
                zone = Zone::Outside;
                continue;
            }
            bangla_opened = true;
            zone = Zone::Bangla;
            if !rest.is_empty() {
                bangla.push(rest);
            }
            continue;
        }

        if let Some(rest) = after_marker(&ENGLISH_MARKER, trimmed) {
            if english_closed {
                zone = Zone::Outside;
                continue;
            }
            zone = Zone::English;
            if !rest.is_empty() {
                english.push(rest);
            }
            continue;
        }

        match zone {
            Zone::Outside => {}
            Zone::Bangla => {
                if !trimmed.is_empty() {
                    bangla.push(trimmed);
                }
            }
            Zone::English => {
                if !trimmed.is_empty() {
                    english.push(trimmed);
                } else if !english.is_empty() {
                    english_closed = true;
                    zone = Zone::Outside;
                }
            }
        }
    }

    (bangla.join("\n"), english.join("\n"))
}

/// Text following a section marker on the same line, if the line holds one.
fn after_marker<'a>(marker: &Regex, line: &'a str) -> Option<&'a str> {
    let m = marker.find(line)?;
    Some(
        line[m.end()..]
            .trim_start_matches(|c: char| {
                c.is_whitespace() || matches!(c, ':' | '-' | '–' | '—' | '*' | ')')
            })
            .trim_end(),
    )
}
