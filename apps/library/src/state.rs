//! Application state.

use std::fs;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use shobdo_core::WordCollections;

use crate::config::LibraryConfig;
use crate::content::{ContentLibrary, DirectorySource};
use crate::db::SqliteStore;
use crate::error::Result;

/// Loaded content plus the persistent collections.
pub struct AppState {
    pub content: Arc<Mutex<ContentLibrary>>,
    pub collections: Arc<Mutex<WordCollections<SqliteStore>>>,
    source: DirectorySource,
}

impl AppState {
    pub fn new(source: DirectorySource, store: SqliteStore) -> Self {
        Self {
            content: Arc::new(Mutex::new(ContentLibrary::new())),
            collections: Arc::new(Mutex::new(WordCollections::new(store))),
            source,
        }
    }

    /// Open the database named by `config` and load all content.
    ///
    /// Content failures are recorded on the library, not returned.
    pub fn open(config: &LibraryConfig) -> Result<Self> {
        if let Some(parent) = config.db_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let store = SqliteStore::open(&config.db_path)?;
        let state = Self::new(DirectorySource::from_config(config), store);
        state.reload();
        Ok(state)
    }

    /// Re-read every asset. Unchanged assets are not re-parsed.
    pub fn reload(&self) -> bool {
        self.content().load_all(&self.source)
    }

    pub fn content(&self) -> MutexGuard<'_, ContentLibrary> {
        self.content.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn collections(&self) -> MutexGuard<'_, WordCollections<SqliteStore>> {
        self.collections.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn source(&self) -> &DirectorySource {
        &self.source
    }
}
