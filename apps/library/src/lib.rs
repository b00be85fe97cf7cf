//! ShobdoHub content library.
//!
//! Loads the word list, passages and grammar chapters from a content
//! directory and keeps flashcard/memorized collections in SQLite.

pub mod config;
pub mod content;
pub mod db;
pub mod error;
pub mod json_store;
pub mod reader;
pub mod state;

pub use config::{Asset, AssetFiles, LibraryConfig};
pub use content::{ContentLibrary, ContentSource, DirectorySource, LoadOutcome};
pub use db::{CollectionEntry, DbError, SqliteStore};
pub use error::{LibraryError, Result};
pub use json_store::JsonFileStore;
pub use reader::PassageView;
pub use state::AppState;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber. Later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Read `.env` and the environment, set up logging, open the database and
/// load all content.
pub fn bootstrap() -> anyhow::Result<AppState> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = LibraryConfig::from_env()?;
    tracing::info!(
        "opening content at {} (db: {})",
        config.content_dir.display(),
        config.db_path.display()
    );

    let state = AppState::open(&config)?;
    if let Some(error) = state.content().last_error() {
        tracing::warn!("content loaded with errors: {}", error);
    }
    Ok(state)
}
