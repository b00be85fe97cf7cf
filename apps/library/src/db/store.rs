//! SQLite-backed collection store.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use serde::Serialize;
use shobdo_core::{CollectionKind, CollectionStore};

use crate::db::error::DbError;

type Result<T> = std::result::Result<T, DbError>;

/// A collection member with the time it was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionEntry {
    pub word_id: String,
    pub added_at: DateTime<Utc>,
}

/// Collections persisted in a SQLite database.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open database at path, creating if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(super::schema::SCHEMA)?;
        self.conn.execute_batch(super::schema::INIT_SCHEMA_VERSION)?;
        Ok(())
    }

    pub fn schema_version(&self) -> Result<i32> {
        let version = self
            .conn
            .query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;
        Ok(version)
    }

    /// Members of a collection with their timestamps, oldest first.
    pub fn entries(&self, kind: CollectionKind) -> Result<Vec<CollectionEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT word_id, added_at FROM collection_entries WHERE collection = ?1 ORDER BY id",
        )?;
        let rows = stmt
            .query_map(params![kind.as_str()], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(word_id, added_at)| {
                let added_at = DateTime::parse_from_rfc3339(&added_at)
                    .map_err(|e| DbError::InvalidData(format!("added_at for {}: {}", word_id, e)))?
                    .with_timezone(&Utc);
                Ok(CollectionEntry { word_id, added_at })
            })
            .collect()
    }

    /// Member counts per collection name, including names this build does not know.
    pub fn counts(&self) -> Result<Vec<(String, usize)>> {
        let mut stmt = self.conn.prepare(
            "SELECT collection, COUNT(*) FROM collection_entries GROUP BY collection ORDER BY collection",
        )?;
        let counts = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)? as usize))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(counts)
    }

    /// Parse a stored collection name.
    pub fn parse_kind(name: &str) -> Result<CollectionKind> {
        CollectionKind::from_str(name).ok_or_else(|| DbError::UnknownCollection(name.to_string()))
    }

    /// Empty a collection. Returns the number of removed members.
    pub fn clear(&mut self, kind: CollectionKind) -> Result<usize> {
        let count = self.conn.execute(
            "DELETE FROM collection_entries WHERE collection = ?1",
            params![kind.as_str()],
        )?;
        Ok(count)
    }
}

impl CollectionStore for SqliteStore {
    type Error = DbError;

    fn members(&self, kind: CollectionKind) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT word_id FROM collection_entries WHERE collection = ?1 ORDER BY id")?;
        let ids = stmt
            .query_map(params![kind.as_str()], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        Ok(ids)
    }

    fn contains(&self, kind: CollectionKind, word_id: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM collection_entries WHERE collection = ?1 AND word_id = ?2",
            params![kind.as_str(), word_id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    fn insert(&mut self, kind: CollectionKind, word_id: &str) -> Result<bool> {
        let now = Utc::now().to_rfc3339();
        let changed = self.conn.execute(
            "INSERT OR IGNORE INTO collection_entries (collection, word_id, added_at) VALUES (?1, ?2, ?3)",
            params![kind.as_str(), word_id, now],
        )?;
        Ok(changed > 0)
    }

    fn remove(&mut self, kind: CollectionKind, word_id: &str) -> Result<bool> {
        let changed = self.conn.execute(
            "DELETE FROM collection_entries WHERE collection = ?1 AND word_id = ?2",
            params![kind.as_str(), word_id],
        )?;
        Ok(changed > 0)
    }
}
