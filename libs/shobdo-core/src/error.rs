//! Error types for shobdo-core.

use thiserror::Error;

/// Result type alias using ContentError.
pub type Result<T> = std::result::Result<T, ContentError>;

/// Errors from the machine-generated JSON assets.
///
/// The hand-authored text formats never fail: malformed lines and blocks are
/// skipped with a warning instead.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid JSON content: {0}")]
    Json(#[from] serde_json::Error),

    #[error("empty {asset} content")]
    EmptyContent { asset: &'static str },
}
