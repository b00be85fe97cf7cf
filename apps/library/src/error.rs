//! Error types for the content library.

use shobdo_core::ContentError;
use thiserror::Error;

use crate::db::DbError;

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("content error: {0}")]
    Content(#[from] ContentError),

    #[error("database error: {0}")]
    Db(#[from] DbError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("missing {asset} asset at {path}")]
    MissingAsset { asset: &'static str, path: String },
}

impl LibraryError {
    pub fn is_missing_asset(&self) -> bool {
        matches!(self, Self::MissingAsset { .. })
    }
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, LibraryError>;
