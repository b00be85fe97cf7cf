//! Local SQLite storage for word collections.

pub mod error;
pub mod schema;
pub mod store;

pub use error::DbError;
pub use store::{CollectionEntry, SqliteStore};
