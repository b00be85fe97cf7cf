//! Section extraction layers for a chapter body.
//!
//! Grammar source text is loosely structured prose, so extraction is an
//! ordered chain of pure layers with decreasing specificity. The first layer
//! returning `Some` decides the chapter archetype; [`raw`] always succeeds.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::text::truncate_chars;
use crate::types::{ChapterContent, Section, SectionKind};

/// Bodies at or below this many characters skip the numbered-item layer.
pub const MIN_NUMBERED_LEN: usize = 100;

/// Upper bound on numbered items taken from one chapter.
pub const MAX_NUMBERED_ITEMS: usize = 50;

/// Upper bound on the catch-all section, in characters.
pub const MAX_RAW_LEN: usize = 5000;

/// A layer maps a chapter body to sections, or declines with `None`.
pub type Layer = fn(&str) -> Option<ChapterContent>;

/// Layers in the order they are tried.
pub const CHAIN: [(&str, Layer); 3] = [("markers", markers), ("numbered", numbered), ("raw", raw)];

static MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(rule|shortcut\s+tips?)\s*-\s*(\d+(?:\.\d+)*[a-z]?)\b")
        .expect("valid section marker regex")
});

static EXAMPLES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bexamples?\s*:").expect("valid examples regex"));

static NUMBERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*(\d{1,3})[.)][ \t]+").expect("valid numbered item regex"));

/// Run the chain and return the first archetype produced.
pub fn extract(body: &str) -> ChapterContent {
    for (name, layer) in CHAIN {
        if let Some(content) = layer(body) {
            tracing::trace!("chapter body handled by {} layer", name);
            return content;
        }
    }
    text_content(body)
}

/// `Rule-<id>` and `Shortcut Tip(s)-<id>` markers.
///
/// Each section runs to the next marker. Text before the first marker
/// becomes an introduction note.
pub fn markers(body: &str) -> Option<ChapterContent> {
    let found: Vec<_> = MARKER.captures_iter(body).collect();
    if found.is_empty() {
        return None;
    }

    let mut sections = Vec::with_capacity(found.len() + 1);
    if let Some(intro) = introduction(&body[..found[0].get(0)?.start()]) {
        sections.push(intro);
    }

    for (i, caps) in found.iter().enumerate() {
        let whole = caps.get(0)?;
        let end = found
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(body.len(), |m| m.start());
        let text = clean_section_text(&body[whole.end()..end]);
        let number = &caps[2];

        let section = if caps[1].to_lowercase().starts_with("rule") {
            rule_section(number, text)
        } else {
            Section::new(
                format!("shortcut-{}", number),
                SectionKind::Shortcut,
                format!("Shortcut Tip {}", number),
                text,
            )
        };
        sections.push(section);
    }

    Some(ChapterContent::Rules { sections })
}

fn rule_section(number: &str, text: &str) -> Section {
    let mut section = Section::new(
        format!("rule-{}", number),
        SectionKind::Rule,
        format!("Rule {}", number),
        text,
    );

    if let Some(m) = EXAMPLES.find(text) {
        let english = text[m.end()..].trim();
        let before = text[..m.start()].trim();
        if !before.is_empty() {
            section.content = before.to_string();
        }
        section.examples = english
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        if !english.is_empty() {
            section.english_content = Some(english.to_string());
        }
    }

    section
}

/// Line-leading `1.` / `1)` items, for bodies longer than
/// [`MIN_NUMBERED_LEN`]. Needs at least two items.
pub fn numbered(body: &str) -> Option<ChapterContent> {
    if body.trim().chars().count() <= MIN_NUMBERED_LEN {
        return None;
    }

    let found: Vec<_> = NUMBERED_ITEM
        .captures_iter(body)
        .take(MAX_NUMBERED_ITEMS + 1)
        .collect();
    let items = found.len().min(MAX_NUMBERED_ITEMS);
    if items < 2 {
        return None;
    }

    let mut sections = Vec::with_capacity(items + 1);
    if let Some(intro) = introduction(&body[..found[0].get(0)?.start()]) {
        sections.push(intro);
    }

    for i in 0..items {
        let caps = &found[i];
        let start = caps.get(0)?.end();
        let end = found
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(body.len(), |m| m.start());
        let number = &caps[1];
        sections.push(Section::new(
            format!("point-{}", number),
            SectionKind::Content,
            format!("Point {}", number),
            body[start..end].trim(),
        ));
    }

    Some(ChapterContent::Outline { sections })
}

/// Catch-all: the whole body as one section, truncated to [`MAX_RAW_LEN`].
pub fn raw(body: &str) -> Option<ChapterContent> {
    Some(text_content(body))
}

fn text_content(body: &str) -> ChapterContent {
    let trimmed = body.trim();
    if trimmed.chars().count() > MAX_RAW_LEN {
        tracing::debug!("truncating raw chapter content to {} characters", MAX_RAW_LEN);
    }
    ChapterContent::Text {
        section: Section::new(
            "content",
            SectionKind::Content,
            "Content",
            truncate_chars(trimmed, MAX_RAW_LEN),
        ),
    }
}

fn introduction(text: &str) -> Option<Section> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(Section::new("intro", SectionKind::Note, "Introduction", text))
}

fn clean_section_text(text: &str) -> &str {
    text.trim_start_matches(|c: char| c.is_whitespace() || matches!(c, ':' | '.' | ')' | '-'))
        .trim_end()
}
