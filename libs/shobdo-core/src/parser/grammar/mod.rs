//! Grammar chapter parser.
//!
//! # Format
//! ```text
//! Chapter-3
//! Rule- 1 Use "who" for people.
//! Example: The man who came yesterday is my uncle.
//! Shortcut Tip- 1 Remember WWWH.
//! ```
//!
//! Chapters are cut at every `Chapter-<n>` header and returned in ascending
//! chapter order. Section extraction lives in [`layers`]. A pre-structured
//! JSON form is accepted by [`parse_json`].

pub mod catalog;
pub mod format;
pub mod layers;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::error::{ContentError, Result};
use crate::types::{Chapter, ChapterContent, Section};

pub use format::{bilingual_pairs, reflow, BilingualPair};

static HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Chapter\s*-\s*(\d+)").expect("valid chapter header regex"));

/// Parse every chapter block, sorted ascending by chapter id.
///
/// Chapters sharing an id keep their source order.
pub fn parse(content: &str) -> Vec<Chapter> {
    let headers: Vec<_> = HEADER.captures_iter(content).collect();
    let mut chapters = Vec::with_capacity(headers.len());

    for (i, caps) in headers.iter().enumerate() {
        let Some(header) = caps.get(0) else {
            continue;
        };
        let end = headers
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(content.len(), |m| m.start());

        let id = match caps[1].parse::<u32>() {
            Ok(id) => id,
            Err(_) => {
                tracing::warn!("skipping chapter with unreadable number {:?}", &caps[1]);
                continue;
            }
        };

        chapters.push(build_chapter(id, &content[header.end()..end]));
    }

    chapters.sort_by_key(|chapter| chapter.id);
    tracing::debug!("parsed {} grammar chapters", chapters.len());
    chapters
}

fn build_chapter(id: u32, body: &str) -> Chapter {
    let (title, title_bengali, description) = catalog::describe(id);
    Chapter {
        id,
        title,
        title_bengali,
        description,
        content: layers::extract(body),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChapterRecord {
    id: u32,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    title_bengali: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    sections: Vec<Section>,
}

impl From<ChapterRecord> for Chapter {
    fn from(record: ChapterRecord) -> Self {
        let (title, title_bengali, description) = catalog::describe(record.id);
        let pick = |value: Option<String>, fallback: String| {
            value.filter(|v| !v.trim().is_empty()).unwrap_or(fallback)
        };

        Chapter {
            id: record.id,
            title: pick(record.title, title),
            title_bengali: pick(record.title_bengali, title_bengali),
            description: pick(record.description, description),
            content: ChapterContent::Curated {
                sections: record.sections,
            },
        }
    }
}

/// Accept the pre-structured JSON form directly (an array of chapters).
///
/// Missing titles and descriptions are filled in from the catalog.
pub fn parse_json(content: &str) -> Result<Vec<Chapter>> {
    if content.trim().is_empty() {
        return Err(ContentError::EmptyContent { asset: "grammar" });
    }
    let records: Vec<ChapterRecord> = serde_json::from_str(content)?;
    let mut chapters: Vec<Chapter> = records.into_iter().map(Chapter::from).collect();
    chapters.sort_by_key(|chapter| chapter.id);
    Ok(chapters)
}
