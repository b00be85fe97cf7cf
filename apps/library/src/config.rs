//! Library configuration from environment variables.
//!
//! Recognized variables:
//! - `SHOBDO_CONTENT_DIR`: directory holding the content files (default `./content`)
//! - `SHOBDO_DB_PATH`: SQLite file for collections (default: local data dir)
//! - `SHOBDO_WORDS_FILE`, `SHOBDO_WORD_DATASET_FILE`, `SHOBDO_PASSAGES_FILE`,
//!   `SHOBDO_GRAMMAR_FILE`, `SHOBDO_GRAMMAR_JSON_FILE`: asset file names

use std::path::{Path, PathBuf};

use crate::error::{LibraryError, Result};

/// One content file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    Words,
    WordDataset,
    Passages,
    Grammar,
    GrammarJson,
}

impl Asset {
    pub const ALL: [Asset; 5] = [
        Self::Words,
        Self::WordDataset,
        Self::Passages,
        Self::Grammar,
        Self::GrammarJson,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Words => "words",
            Self::WordDataset => "word dataset",
            Self::Passages => "passages",
            Self::Grammar => "grammar",
            Self::GrammarJson => "grammar json",
        }
    }

    fn env_var(&self) -> &'static str {
        match self {
            Self::Words => "SHOBDO_WORDS_FILE",
            Self::WordDataset => "SHOBDO_WORD_DATASET_FILE",
            Self::Passages => "SHOBDO_PASSAGES_FILE",
            Self::Grammar => "SHOBDO_GRAMMAR_FILE",
            Self::GrammarJson => "SHOBDO_GRAMMAR_JSON_FILE",
        }
    }

    fn default_file(&self) -> &'static str {
        match self {
            Self::Words => "words.txt",
            Self::WordDataset => "words.json",
            Self::Passages => "passages.txt",
            Self::Grammar => "grammar.txt",
            Self::GrammarJson => "grammar.json",
        }
    }
}

/// File names of each asset inside the content directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFiles {
    pub words: String,
    pub word_dataset: String,
    pub passages: String,
    pub grammar: String,
    pub grammar_json: String,
}

impl Default for AssetFiles {
    fn default() -> Self {
        Self {
            words: Asset::Words.default_file().to_string(),
            word_dataset: Asset::WordDataset.default_file().to_string(),
            passages: Asset::Passages.default_file().to_string(),
            grammar: Asset::Grammar.default_file().to_string(),
            grammar_json: Asset::GrammarJson.default_file().to_string(),
        }
    }
}

impl AssetFiles {
    pub fn file_name(&self, asset: Asset) -> &str {
        match asset {
            Asset::Words => &self.words,
            Asset::WordDataset => &self.word_dataset,
            Asset::Passages => &self.passages,
            Asset::Grammar => &self.grammar,
            Asset::GrammarJson => &self.grammar_json,
        }
    }

    fn file_name_mut(&mut self, asset: Asset) -> &mut String {
        match asset {
            Asset::Words => &mut self.words,
            Asset::WordDataset => &mut self.word_dataset,
            Asset::Passages => &mut self.passages,
            Asset::Grammar => &mut self.grammar,
            Asset::GrammarJson => &mut self.grammar_json,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryConfig {
    pub content_dir: PathBuf,
    pub db_path: PathBuf,
    pub files: AssetFiles,
}

impl LibraryConfig {
    /// Defaults for a given content directory.
    pub fn with_content_dir(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
            db_path: default_db_path(),
            files: AssetFiles::default(),
        }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| -> Result<Option<String>> {
            match lookup(name) {
                Some(value) if value.trim().is_empty() => {
                    Err(LibraryError::Config(format!("{} is set but empty", name)))
                }
                Some(value) => Ok(Some(value.trim().to_string())),
                None => Ok(None),
            }
        };

        let mut config = Self::with_content_dir(
            read("SHOBDO_CONTENT_DIR")?.unwrap_or_else(|| "./content".to_string()),
        );
        if let Some(db_path) = read("SHOBDO_DB_PATH")? {
            config.db_path = PathBuf::from(db_path);
        }
        for asset in Asset::ALL {
            if let Some(file) = read(asset.env_var())? {
                *config.files.file_name_mut(asset) = file;
            }
        }

        Ok(config)
    }

    pub fn asset_path(&self, asset: Asset) -> PathBuf {
        self.content_dir.join(self.files.file_name(asset))
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }
}

fn default_db_path() -> PathBuf {
    // App data directory when available, else the current dir
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shobdohub")
        .join("shobdohub.db")
}
