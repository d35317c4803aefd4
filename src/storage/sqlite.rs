//! SQLite-backed definition store.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, warn};

use crate::error::{DictlogError, Result};
use crate::model::Entry;

use super::DefinitionStore;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS definition (
        word TEXT PRIMARY KEY,
        results TEXT NOT NULL
    );";

/// Definition store persisted in a single SQLite database file.
///
/// The connection is opened once and released when the store is dropped.
///
/// # Example
///
/// ```
/// use dictlog::storage::{DefinitionStore, SqliteStore};
/// use tempfile::TempDir;
///
/// let temp = TempDir::new().unwrap();
/// let store = SqliteStore::open(temp.path().join("cache.db")).unwrap();
/// assert!(store.list_all().unwrap().is_empty());
/// ```
#[derive(Debug)]
pub struct SqliteStore {
    path: PathBuf,
    conn: Connection,
}

impl SqliteStore {
    /// Open (creating if needed) the database at `path`.
    ///
    /// The parent directory is created owner-only. Safe to call on an
    /// already initialised database.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            create_private_dir(parent).map_err(|e| DictlogError::StorageInit {
                path: parent.to_path_buf(),
                message: format!("unable to create internal directories | {}", e),
            })?;
        }

        let conn = Connection::open(&path).map_err(|e| DictlogError::StorageInit {
            path: path.clone(),
            message: format!("unable to open database | {}", e),
        })?;

        let store = Self { path, conn };
        store.initialize()?;
        Ok(store)
    }

    /// Ensure the schema exists.
    pub fn initialize(&self) -> Result<()> {
        self.conn
            .execute_batch(SCHEMA)
            .map_err(|e| DictlogError::StorageInit {
                path: self.path.clone(),
                message: format!("unable to initialise DB | {}", e),
            })?;
        debug!("Definition cache ready at {:?}", self.path);
        Ok(())
    }

    /// Get the database path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DefinitionStore for SqliteStore {
    fn get(&self, word: &str) -> Result<Option<Vec<Entry>>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT results FROM definition WHERE word = ?1",
                params![word],
                |row| row.get(0),
            )
            .optional()?;

        raw.map(|json| decode(word, &json)).transpose()
    }

    fn put(&self, word: &str, entries: &[Entry]) -> Result<()> {
        let json = serde_json::to_string(entries).map_err(anyhow::Error::from)?;

        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO definition (word, results) VALUES (?1, ?2)
             ON CONFLICT(word) DO UPDATE SET results = excluded.results",
            params![word, json],
        )?;
        tx.commit()?;

        debug!("Cached {} result(s) for '{}'", entries.len(), word);
        Ok(())
    }

    fn list_all(&self) -> Result<BTreeMap<String, Vec<Entry>>> {
        let mut stmt = self
            .conn
            .prepare("SELECT word, results FROM definition ORDER BY word")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut all = BTreeMap::new();
        for row in rows {
            let (word, json) = row?;
            match decode(&word, &json) {
                Ok(entries) => {
                    all.insert(word, entries);
                }
                Err(e) => warn!("Skipping {}", e),
            }
        }

        Ok(all)
    }
}

fn decode(word: &str, json: &str) -> Result<Vec<Entry>> {
    serde_json::from_str(json).map_err(|e| DictlogError::CorruptEntry {
        word: word.to_string(),
        message: e.to_string(),
    })
}

#[cfg(unix)]
fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    fs::DirBuilder::new().recursive(true).mode(0o700).create(dir)
}

#[cfg(not(unix))]
fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir)
}
