//! Persistent set of listing fingerprints.
//!
//! Append-only: fingerprints are inserted once and never updated or removed.
//! Every insert runs in SQLite autocommit mode, so it is durable by the time
//! `mark` returns.

use crate::utils::error::Result;
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

pub struct SeenStore {
    conn: Mutex<Connection>,
    path: PathBuf,
}

impl SeenStore {
    /// Opens (or creates) the store, creating the parent directory if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(&path)?;
        conn.execute_batch("CREATE TABLE IF NOT EXISTS seen (fp TEXT PRIMARY KEY);")?;
        tracing::debug!(path = %path.display(), "seen store opened");

        Ok(Self {
            conn: Mutex::new(conn),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        // A poisoned lock only means another thread panicked mid-call; SQLite
        // itself keeps the table consistent.
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn is_seen(&self, fp: &str) -> Result<bool> {
        let conn = self.conn();
        let mut stmt = conn.prepare_cached("SELECT 1 FROM seen WHERE fp = ?1")?;
        let found = stmt.exists(params![fp])?;
        Ok(found)
    }

    /// Idempotent insert. Returns whether the fingerprint was new.
    pub fn mark(&self, fp: &str) -> Result<bool> {
        let conn = self.conn();
        let inserted = conn.execute("INSERT OR IGNORE INTO seen (fp) VALUES (?1)", params![fp])?;
        Ok(inserted == 1)
    }

    pub fn len(&self) -> Result<usize> {
        let conn = self.conn();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM seen", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    pub fn close(self) -> Result<()> {
        let conn = self.conn.into_inner().unwrap_or_else(|e| e.into_inner());
        conn.close().map_err(|(_, e)| e)?;
        Ok(())
    }
}
