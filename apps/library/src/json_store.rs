//! Collections kept in a single JSON document on disk.
//!
//! Every change rewrites the document through a temp file in the same
//! directory, so a crash leaves either the old or the new file.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shobdo_core::{CollectionKind, CollectionStore};
use tempfile::NamedTempFile;

use crate::error::{LibraryError, Result};

const DOCUMENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonEntry {
    word_id: String,
    added_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct StoreDocument {
    version: u32,
    #[serde(default)]
    collections: BTreeMap<CollectionKind, Vec<JsonEntry>>,
}

impl Default for StoreDocument {
    fn default() -> Self {
        Self {
            version: DOCUMENT_VERSION,
            collections: BTreeMap::new(),
        }
    }
}

/// File-backed collection store.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    document: StoreDocument,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let document = if path.exists() {
            let reader = BufReader::new(File::open(&path)?);
            let document: StoreDocument = serde_json::from_reader(reader)?;
            if document.version > DOCUMENT_VERSION {
                tracing::warn!(
                    "collection file {} has newer version {}",
                    path.display(),
                    document.version
                );
            }
            document
        } else {
            StoreDocument::default()
        };

        Ok(Self { path, document })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Members of a collection with the time they were added.
    pub fn entries(&self, kind: CollectionKind) -> Vec<(String, DateTime<Utc>)> {
        self.document
            .collections
            .get(&kind)
            .map(|entries| {
                entries
                    .iter()
                    .map(|e| (e.word_id.clone(), e.added_at))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn save(&self) -> Result<()> {
        let parent_dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent_dir)?;

        let temp_file = NamedTempFile::new_in(parent_dir)?;
        {
            let mut writer = BufWriter::new(&temp_file);
            serde_json::to_writer_pretty(&mut writer, &self.document)?;
            writer.flush()?;
        }
        temp_file.persist(&self.path).map_err(|e| LibraryError::Io(e.error))?;
        Ok(())
    }
}

impl CollectionStore for JsonFileStore {
    type Error = LibraryError;

    fn members(&self, kind: CollectionKind) -> Result<Vec<String>> {
        Ok(self.entries(kind).into_iter().map(|(id, _)| id).collect())
    }

    fn contains(&self, kind: CollectionKind, word_id: &str) -> Result<bool> {
        Ok(self
            .document
            .collections
            .get(&kind)
            .map_or(false, |entries| entries.iter().any(|e| e.word_id == word_id)))
    }

    fn insert(&mut self, kind: CollectionKind, word_id: &str) -> Result<bool> {
        if self.contains(kind, word_id)? {
            return Ok(false);
        }
        self.document.collections.entry(kind).or_default().push(JsonEntry {
            word_id: word_id.to_string(),
            added_at: Utc::now(),
        });
        if let Err(e) = self.save() {
            // Keep memory consistent with the file
            if let Some(entries) = self.document.collections.get_mut(&kind) {
                entries.retain(|entry| entry.word_id != word_id);
            }
            return Err(e);
        }
        Ok(true)
    }

    fn remove(&mut self, kind: CollectionKind, word_id: &str) -> Result<bool> {
        let Some(entries) = self.document.collections.get_mut(&kind) else {
            return Ok(false);
        };
        let Some(position) = entries.iter().position(|e| e.word_id == word_id) else {
            return Ok(false);
        };
        let removed = entries.remove(position);
        if let Err(e) = self.save() {
            if let Some(entries) = self.document.collections.get_mut(&kind) {
                entries.insert(position, removed);
            }
            return Err(e);
        }
        Ok(true)
    }
}
