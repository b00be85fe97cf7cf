//! Common test utilities for integration tests.
//!
//! `TestContext` owns a temporary content directory and database path so each
//! test works on its own files.

pub mod fixtures;

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use shobdo_library::{Asset, DirectorySource, LibraryConfig};

pub struct TestContext {
    dir: TempDir,
    pub config: LibraryConfig,
}

impl TestContext {
    /// Create an empty content directory and a database path beside it.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let content_dir = dir.path().join("content");
        fs::create_dir_all(&content_dir).expect("Failed to create content dir");

        let mut config = LibraryConfig::with_content_dir(content_dir);
        config.db_path = dir.path().join("data").join("shobdohub.db");

        Self { dir, config }
    }

    /// Create a context with the standard fixture assets written out.
    pub fn with_fixtures() -> Self {
        let ctx = Self::new();
        ctx.write(Asset::Words, fixtures::WORDS);
        ctx.write(Asset::Passages, fixtures::PASSAGES);
        ctx.write(Asset::Grammar, fixtures::GRAMMAR);
        ctx
    }

    pub fn write(&self, asset: Asset, content: &str) {
        fs::write(self.config.asset_path(asset), content).expect("Failed to write asset");
    }

    pub fn remove(&self, asset: Asset) {
        fs::remove_file(self.config.asset_path(asset)).expect("Failed to remove asset");
    }

    pub fn source(&self) -> DirectorySource {
        DirectorySource::from_config(&self.config)
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
