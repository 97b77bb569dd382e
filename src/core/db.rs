//! Local SQLite database
//!
//! One file holds the settings row plus projects, lists and todos. All
//! timestamps are stored as second-precision UTC RFC 3339 strings so that
//! text comparison orders them correctly.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Connection;
use tracing::debug;

use crate::error::{Result, TuidooError};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS settings (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    active_theme_id TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS projects (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    color TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    deleted_at TEXT
);

CREATE TABLE IF NOT EXISTS todo_lists (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    color TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    deleted_at TEXT
);

CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    project_id INTEGER NOT NULL REFERENCES projects(id),
    list_id INTEGER REFERENCES todo_lists(id),
    name TEXT NOT NULL,
    description TEXT,
    priority INTEGER NOT NULL DEFAULT 0,
    status INTEGER NOT NULL DEFAULT 0,
    color TEXT NOT NULL DEFAULT '',
    done INTEGER NOT NULL DEFAULT 0,
    due_date TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    deleted_at TEXT
);

CREATE INDEX IF NOT EXISTS idx_todos_project ON todos(project_id);
CREATE INDEX IF NOT EXISTS idx_todos_list ON todos(list_id);
";

/// Handle on the tuidoo database
pub struct Database {
    pub(crate) conn: Connection,
    path: Option<PathBuf>,
}

impl Database {
    /// Open (creating if needed) the database at `path`
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path).map_err(|e| {
            TuidooError::Storage(format!("cannot open {}: {}", path.display(), e))
        })?;
        conn.busy_timeout(Duration::from_millis(250))?;

        let db = Self {
            conn,
            path: Some(path.to_path_buf()),
        };
        db.migrate().map_err(|e| {
            TuidooError::Storage(format!("{} is not usable: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), "database ready");
        Ok(db)
    }

    /// A throwaway in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let db = Self {
            conn: Connection::open_in_memory()?,
            path: None,
        };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> rusqlite::Result<()> {
        self.conn.pragma_update(None, "foreign_keys", "ON")?;
        self.conn.execute_batch(SCHEMA)
    }

    /// Location on disk, `None` for in-memory databases
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Format a timestamp the way every column stores it
pub(crate) fn to_db_time(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub(crate) fn now() -> String {
    to_db_time(Utc::now())
}

/// Parse a stored timestamp, reporting the column on failure
pub(crate) fn from_db_time(column: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                column,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    #[test]
    fn test_open_creates_parent_and_tables() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("tuidoo.db");
        let db = Database::open(&path).unwrap();
        assert_eq!(db.path(), Some(path.as_path()));

        let tables: i64 = db
            .conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' \
                 AND name IN ('settings', 'projects', 'todo_lists', 'todos')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 4);
    }

    #[test]
    fn test_open_fails_on_directory_path() {
        let dir = tempdir().unwrap();
        let err = Database::open(dir.path()).err().unwrap();
        assert!(matches!(err, TuidooError::Storage(_)));
    }

    #[test]
    fn test_open_fails_on_garbage_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tuidoo.db");
        fs::write(&path, vec![0x42u8; 4096]).unwrap();

        let err = Database::open(&path).err().unwrap();
        assert!(matches!(err, TuidooError::Storage(_)));
    }

    #[test]
    fn test_db_time_sorts_as_text() {
        let early = to_db_time(Utc.with_ymd_and_hms(2026, 1, 9, 8, 0, 0).unwrap());
        let late = to_db_time(Utc.with_ymd_and_hms(2026, 1, 10, 7, 0, 0).unwrap());
        assert_eq!(early, "2026-01-09T08:00:00Z");
        assert!(early < late);
        assert_eq!(
            from_db_time(0, &late).unwrap(),
            Utc.with_ymd_and_hms(2026, 1, 10, 7, 0, 0).unwrap()
        );
    }
}
