//! Loading and caching of the content assets.
//!
//! [`ContentLibrary`] owns the parsed words, passages and chapters. A failed
//! load records [`ContentLibrary::last_error`] and keeps whatever was loaded
//! before; new data is only published once parsing has finished.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use sha2::{Digest, Sha256};
use shobdo_core::parser::{grammar, passages, words};
use shobdo_core::{validate, Chapter, IdIssue, Passage, WordLibrary};

use crate::config::{Asset, AssetFiles, LibraryConfig};
use crate::error::{LibraryError, Result};
use crate::reader::PassageView;

/// Where asset text comes from.
pub trait ContentSource {
    fn fetch(&self, asset: Asset) -> Result<String>;
}

/// Reads assets from files in one directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    files: AssetFiles,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>, files: AssetFiles) -> Self {
        Self {
            root: root.into(),
            files,
        }
    }

    pub fn from_config(config: &LibraryConfig) -> Self {
        Self::new(config.content_dir.clone(), config.files.clone())
    }

    pub fn path(&self, asset: Asset) -> PathBuf {
        self.root.join(self.files.file_name(asset))
    }
}

impl ContentSource for DirectorySource {
    fn fetch(&self, asset: Asset) -> Result<String> {
        let path = self.path(asset);
        fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LibraryError::MissingAsset {
                asset: asset.as_str(),
                path: path.display().to_string(),
            },
            _ => LibraryError::Io(e),
        })
    }
}

/// Outcome of loading one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// New data was parsed and published.
    Loaded { count: usize },
    /// The asset hash matched the last load.
    Unchanged,
}

/// Parsed content and its load state.
#[derive(Debug, Default)]
pub struct ContentLibrary {
    words: WordLibrary,
    passages: Vec<Passage>,
    chapters: Vec<Chapter>,
    passage_issues: Vec<IdIssue>,
    chapter_issues: Vec<IdIssue>,
    last_error: Option<String>,
    hashes: HashMap<Asset, String>,
}

impl ContentLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn words(&self) -> &WordLibrary {
        &self.words
    }

    pub fn passages(&self) -> &[Passage] {
        &self.passages
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// First passage with the given id.
    pub fn passage(&self, id: u32) -> Option<&Passage> {
        self.passages.iter().find(|p| p.id == id)
    }

    /// First chapter with the given id.
    pub fn chapter(&self, id: u32) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == id)
    }

    /// Highlighted view of a passage against the loaded words.
    pub fn passage_view(&self, id: u32) -> Option<PassageView<'_>> {
        self.passage(id)
            .map(|passage| PassageView::build(passage, self.words.words()))
    }

    pub fn passage_issues(&self) -> &[IdIssue] {
        &self.passage_issues
    }

    pub fn chapter_issues(&self) -> &[IdIssue] {
        &self.chapter_issues
    }

    /// Message of the most recent failed load, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Load every asset. Returns `true` if all loads succeeded.
    pub fn load_all(&mut self, source: &impl ContentSource) -> bool {
        self.clear_error();
        let words = self.load_words(source).is_ok();
        let passages = self.load_passages(source).is_ok();
        let grammar = self.load_grammar(source).is_ok();
        let ok = words && passages && grammar;
        tracing::info!(
            "content loaded: {} words, {} passages, {} chapters{}",
            self.words.len(),
            self.passages.len(),
            self.chapters.len(),
            if ok { "" } else { " (with errors)" }
        );
        ok
    }

    /// Load the word list, enriched by the word dataset when present.
    pub fn load_words(&mut self, source: &impl ContentSource) -> Result<LoadOutcome> {
        let result = self.try_load_words(source);
        self.record(Asset::Words, result)
    }

    /// Load the reading passages.
    pub fn load_passages(&mut self, source: &impl ContentSource) -> Result<LoadOutcome> {
        let result = self.try_load_passages(source);
        self.record(Asset::Passages, result)
    }

    /// Load grammar chapters, preferring the JSON asset.
    pub fn load_grammar(&mut self, source: &impl ContentSource) -> Result<LoadOutcome> {
        let result = self.try_load_grammar(source);
        self.record(Asset::Grammar, result)
    }

    fn try_load_words(&mut self, source: &impl ContentSource) -> Result<LoadOutcome> {
        let text = source.fetch(Asset::Words)?;
        let dataset = fetch_optional(source, Asset::WordDataset)?;

        let text_hash = hash_content(&text);
        let dataset_hash = dataset.as_deref().map(hash_content);
        if self.is_unchanged(Asset::Words, Some(&text_hash))
            && self.is_unchanged(Asset::WordDataset, dataset_hash.as_deref())
        {
            return Ok(LoadOutcome::Unchanged);
        }

        let report = words::parse_with_report(&text);
        if !report.skipped.is_empty() {
            tracing::debug!("{} word list lines skipped", report.skipped.len());
        }
        let mut library = WordLibrary::new(report.words);
        if let Some(dataset) = &dataset {
            library.enrich(words::parse_rich_json(dataset)?);
        }

        let count = library.len();
        self.words = library;
        self.remember(Asset::Words, Some(text_hash));
        self.remember(Asset::WordDataset, dataset_hash);
        Ok(LoadOutcome::Loaded { count })
    }

    fn try_load_passages(&mut self, source: &impl ContentSource) -> Result<LoadOutcome> {
        let text = source.fetch(Asset::Passages)?;
        let hash = hash_content(&text);
        if self.is_unchanged(Asset::Passages, Some(&hash)) {
            return Ok(LoadOutcome::Unchanged);
        }

        let parsed = passages::parse(&text);
        let issues = validate::passage_ids(&parsed);

        let count = parsed.len();
        self.passages = parsed;
        self.passage_issues = issues;
        self.remember(Asset::Passages, Some(hash));
        Ok(LoadOutcome::Loaded { count })
    }

    fn try_load_grammar(&mut self, source: &impl ContentSource) -> Result<LoadOutcome> {
        let json = fetch_optional(source, Asset::GrammarJson).unwrap_or_else(|e| {
            tracing::warn!("grammar json unavailable, using text: {}", e);
            None
        });

        if let Some(json) = json {
            let hash = hash_content(&json);
            if self.is_unchanged(Asset::GrammarJson, Some(&hash)) {
                return Ok(LoadOutcome::Unchanged);
            }
            match grammar::parse_json(&json) {
                Ok(parsed) => {
                    return Ok(self.publish_chapters(Asset::GrammarJson, hash, parsed));
                }
                Err(e) => tracing::warn!("grammar json is malformed, using text: {}", e),
            }
        }

        let text = source.fetch(Asset::Grammar)?;
        let hash = hash_content(&text);
        if self.is_unchanged(Asset::Grammar, Some(&hash)) {
            return Ok(LoadOutcome::Unchanged);
        }
        let parsed = grammar::parse(&text);
        Ok(self.publish_chapters(Asset::Grammar, hash, parsed))
    }

    fn publish_chapters(
        &mut self,
        asset: Asset,
        hash: String,
        parsed: Vec<Chapter>,
    ) -> LoadOutcome {
        let issues = validate::chapter_ids(&parsed);
        let count = parsed.len();
        self.chapters = parsed;
        self.chapter_issues = issues;
        // Only one grammar source is current at a time
        self.hashes.remove(&Asset::Grammar);
        self.hashes.remove(&Asset::GrammarJson);
        self.remember(asset, Some(hash));
        LoadOutcome::Loaded { count }
    }

    fn record(&mut self, asset: Asset, result: Result<LoadOutcome>) -> Result<LoadOutcome> {
        match &result {
            Ok(LoadOutcome::Loaded { count }) => {
                tracing::debug!("parsed {} {} entries", count, asset.as_str());
            }
            Ok(LoadOutcome::Unchanged) => {
                tracing::debug!("{} unchanged, skipping parse", asset.as_str());
            }
            Err(e) => {
                tracing::warn!("failed to load {}: {}", asset.as_str(), e);
                self.last_error = Some(format!("failed to load {}: {}", asset.as_str(), e));
            }
        }
        result
    }

    fn is_unchanged(&self, asset: Asset, hash: Option<&str>) -> bool {
        self.hashes.get(&asset).map(String::as_str) == hash
    }

    fn remember(&mut self, asset: Asset, hash: Option<String>) {
        match hash {
            Some(hash) => {
                self.hashes.insert(asset, hash);
            }
            None => {
                self.hashes.remove(&asset);
            }
        }
    }
}

/// Fetch an asset that may legitimately be absent.
fn fetch_optional(source: &impl ContentSource, asset: Asset) -> Result<Option<String>> {
    match source.fetch(asset) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.is_missing_asset() => Ok(None),
        Err(e) => Err(e),
    }
}

/// SHA-256 of the asset text, hex encoded.
pub fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// In-memory source with editable assets.
    #[derive(Default)]
    struct MapSource {
        assets: RefCell<HashMap<Asset, String>>,
    }

    impl MapSource {
        fn with(assets: &[(Asset, &str)]) -> Self {
            let source = Self::default();
            for (asset, text) in assets {
                source.set(*asset, text);
            }
            source
        }

        fn set(&self, asset: Asset, text: &str) {
            self.assets.borrow_mut().insert(asset, text.to_string());
        }

        fn unset(&self, asset: Asset) {
            self.assets.borrow_mut().remove(&asset);
        }
    }

    impl ContentSource for MapSource {
        fn fetch(&self, asset: Asset) -> Result<String> {
            self.assets
                .borrow()
                .get(&asset)
                .cloned()
                .ok_or(LibraryError::MissingAsset {
                    asset: asset.as_str(),
                    path: "memory".to_string(),
                })
        }
    }

    const PASSAGES: &str = "Passage 1: Morning\n(Words: ABATE)\nBengali Contextual Version\nবৃষ্টি abate হলো।\nEnglish Translation\nThe rain began to abate.\n";

    #[test]
    fn test_hash_content() {
        assert_eq!(
            hash_content(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_ne!(hash_content("a"), hash_content("b"));
    }

    #[test]
    fn loads_words_and_skips_unchanged() {
        let source = MapSource::with(&[(Asset::Words, "ABATE | কমা\nBRAVE | সাহসী\n")]);
        let mut library = ContentLibrary::new();

        assert_eq!(
            library.load_words(&source).unwrap(),
            LoadOutcome::Loaded { count: 2 }
        );
        assert_eq!(library.load_words(&source).unwrap(), LoadOutcome::Unchanged);

        source.set(Asset::Words, "ABATE | কমা\n");
        assert_eq!(
            library.load_words(&source).unwrap(),
            LoadOutcome::Loaded { count: 1 }
        );
    }

    #[test]
    fn dataset_change_triggers_reload() {
        let source = MapSource::with(&[(Asset::Words, "ABATE | কমা\n")]);
        let mut library = ContentLibrary::new();
        library.load_words(&source).unwrap();

        source.set(
            Asset::WordDataset,
            r#"[{"word": "ABATE", "smartMeaning": "প্রশমিত হওয়া"}]"#,
        );
        assert!(matches!(
            library.load_words(&source).unwrap(),
            LoadOutcome::Loaded { .. }
        ));
        assert_eq!(
            library.words().get("abate").unwrap().smart_meaning,
            "প্রশমিত হওয়া"
        );

        source.unset(Asset::WordDataset);
        assert!(matches!(
            library.load_words(&source).unwrap(),
            LoadOutcome::Loaded { .. }
        ));
        assert_eq!(library.words().get("abate").unwrap().smart_meaning, "কমা");
    }

    #[test]
    fn failed_load_keeps_previous_state() {
        let source = MapSource::with(&[(Asset::Passages, PASSAGES)]);
        let mut library = ContentLibrary::new();
        library.load_passages(&source).unwrap();
        assert_eq!(library.passages().len(), 1);
        assert!(library.last_error().is_none());

        source.unset(Asset::Passages);
        assert!(library.load_passages(&source).is_err());
        assert_eq!(library.passages().len(), 1);
        assert!(library.last_error().unwrap().contains("passages"));
    }

    #[test]
    fn bad_dataset_keeps_previous_words() {
        let source = MapSource::with(&[(Asset::Words, "ABATE | কমা\n")]);
        let mut library = ContentLibrary::new();
        library.load_words(&source).unwrap();

        source.set(Asset::Words, "ABATE | কমা\nBRAVE | সাহসী\n");
        source.set(Asset::WordDataset, "{ broken");
        assert!(matches!(
            library.load_words(&source),
            Err(LibraryError::Content(_))
        ));
        assert_eq!(library.words().len(), 1);
    }

    #[test]
    fn grammar_prefers_json() {
        let source = MapSource::with(&[
            (Asset::Grammar, "Chapter-1\nRule-1: Text rule body.\n"),
            (
                Asset::GrammarJson,
                r#"[{"id": 2, "title": "From JSON", "sections": []}]"#,
            ),
        ]);
        let mut library = ContentLibrary::new();
        library.load_grammar(&source).unwrap();
        assert_eq!(library.chapters().len(), 1);
        assert_eq!(library.chapters()[0].title, "From JSON");

        source.unset(Asset::GrammarJson);
        library.load_grammar(&source).unwrap();
        assert_eq!(library.chapters()[0].id, 1);
    }

    #[test]
    fn malformed_grammar_json_falls_back_to_text() {
        let source = MapSource::with(&[
            (Asset::Grammar, "Chapter-4\nRule-1: Text rule body.\n"),
            (Asset::GrammarJson, "[{ broken"),
        ]);
        let mut library = ContentLibrary::new();
        assert_eq!(
            library.load_grammar(&source).unwrap(),
            LoadOutcome::Loaded { count: 1 }
        );
        assert_eq!(library.chapters()[0].id, 4);
        assert!(library.last_error().is_none());
    }

    #[test]
    fn load_all_reports_partial_failure() {
        let source = MapSource::with(&[
            (Asset::Words, "ABATE | কমা\n"),
            (Asset::Passages, PASSAGES),
        ]);
        let mut library = ContentLibrary::new();
        assert!(!library.load_all(&source));
        assert!(library.last_error().unwrap().contains("grammar"));
        assert_eq!(library.words().len(), 1);
        assert_eq!(library.passages().len(), 1);

        source.set(Asset::Grammar, "Chapter-1\nRule-1: Body.\n");
        assert!(library.load_all(&source));
        assert!(library.last_error().is_none());
    }

    #[test]
    fn passage_view_uses_loaded_words() {
        let source = MapSource::with(&[
            (Asset::Words, "ABATE | কমা\n"),
            (Asset::Passages, PASSAGES),
        ]);
        let mut library = ContentLibrary::new();
        library.load_words(&source).unwrap();
        library.load_passages(&source).unwrap();

        let view = library.passage_view(1).unwrap();
        assert_eq!(view.vocabulary().len(), 1);
        assert!(library.passage_view(9).is_none());
    }
}
