//! Snapshot repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist and load `{postits, arrows}` documents by board name and
//!   rotating slot.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `(name, slot)` is unique; saving to an occupied slot overwrites it.
//! - Stored documents are validated on read; corrupt rows surface as
//!   `InvalidData` instead of being masked.

use std::error::Error;
use std::fmt::{Display, Formatter};

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::db::DbError;
use crate::document::Document;

pub type RepoResult<T> = Result<T, RepoError>;

/// Snapshot persistence and query errors.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(String),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(name) => write!(f, "no snapshot found for board: {name}"),
            Self::InvalidData(message) => write!(f, "invalid persisted snapshot: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Metadata row describing one stored snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotMeta {
    /// Rotating slot the snapshot occupies.
    pub slot: u32,
    /// Save timestamp in epoch milliseconds.
    pub saved_at: i64,
}

/// Repository interface for board snapshot storage.
pub trait SnapshotRepository {
    /// Writes the document to `(name, slot)`, overwriting any previous save.
    fn save_snapshot(&self, name: &str, slot: u32, document: &Document) -> RepoResult<()>;
    /// Loads the newest snapshot saved under the name.
    fn load_latest(&self, name: &str) -> RepoResult<Document>;
    /// Loads the snapshot at a specific slot, if present.
    fn load_slot(&self, name: &str, slot: u32) -> RepoResult<Option<Document>>;
    /// Lists stored snapshots for the name, newest first.
    fn list_snapshots(&self, name: &str) -> RepoResult<Vec<SnapshotMeta>>;
}

/// SQLite-backed snapshot repository.
pub struct SqliteSnapshotRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSnapshotRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SnapshotRepository for SqliteSnapshotRepository<'_> {
    fn save_snapshot(&self, name: &str, slot: u32, document: &Document) -> RepoResult<()> {
        let payload = document
            .to_json()
            .map_err(|err| RepoError::InvalidData(err.to_string()))?;

        self.conn.execute(
            "INSERT INTO snapshots (name, slot, document, saved_at)
             VALUES (?1, ?2, ?3, strftime('%s', 'now') * 1000)
             ON CONFLICT (name, slot) DO UPDATE SET
                document = excluded.document,
                saved_at = excluded.saved_at;",
            params![name, slot, payload],
        )?;

        Ok(())
    }

    fn load_latest(&self, name: &str) -> RepoResult<Document> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT document FROM snapshots
                 WHERE name = ?1
                 ORDER BY saved_at DESC, id DESC
                 LIMIT 1;",
                params![name],
                |row| row.get(0),
            )
            .optional()?;

        match payload {
            Some(payload) => parse_document(&payload),
            None => Err(RepoError::NotFound(name.to_string())),
        }
    }

    fn load_slot(&self, name: &str, slot: u32) -> RepoResult<Option<Document>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT document FROM snapshots WHERE name = ?1 AND slot = ?2;",
                params![name, slot],
                |row| row.get(0),
            )
            .optional()?;

        payload.map(|payload| parse_document(&payload)).transpose()
    }

    fn list_snapshots(&self, name: &str) -> RepoResult<Vec<SnapshotMeta>> {
        let mut stmt = self.conn.prepare(
            "SELECT slot, saved_at FROM snapshots
             WHERE name = ?1
             ORDER BY saved_at DESC, id DESC;",
        )?;

        let rows = stmt.query_map(params![name], parse_meta_row)?;
        let mut snapshots = Vec::new();
        for row in rows {
            snapshots.push(row?);
        }
        Ok(snapshots)
    }
}

fn parse_document(payload: &str) -> RepoResult<Document> {
    Document::from_json(payload).map_err(|err| RepoError::InvalidData(err.to_string()))
}

fn parse_meta_row(row: &Row<'_>) -> rusqlite::Result<SnapshotMeta> {
    Ok(SnapshotMeta {
        slot: row.get(0)?,
        saved_at: row.get(1)?,
    })
}
