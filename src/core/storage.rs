//! Database access that degrades instead of failing
//!
//! Theme commands and the TUI keep working when the database cannot be
//! opened: reads fall back to defaults and writes report `Storage` errors.

use std::path::Path;

use tracing::warn;

use crate::core::db::Database;
use crate::core::settings::{OfflineSettings, SettingsStore};
use crate::error::{Result, TuidooError};

pub enum Storage {
    Available(Database),
    Unavailable(OfflineSettings),
}

impl Storage {
    /// Open the database at `path`, or fall back to offline settings
    pub fn open(path: &Path) -> Self {
        match Database::open(path) {
            Ok(db) => Storage::Available(db),
            Err(e) => {
                let reason = match e {
                    TuidooError::Storage(msg) => msg,
                    other => other.to_string(),
                };
                warn!(
                    path = %path.display(),
                    error = %reason,
                    "database unavailable, continuing without persistence"
                );
                Storage::Unavailable(OfflineSettings::new(reason))
            }
        }
    }

    pub fn database(&self) -> Option<&Database> {
        match self {
            Storage::Available(db) => Some(db),
            Storage::Unavailable(_) => None,
        }
    }

    pub fn database_mut(&mut self) -> Option<&mut Database> {
        match self {
            Storage::Available(db) => Some(db),
            Storage::Unavailable(_) => None,
        }
    }

    /// Why the database could not be opened
    pub fn unavailable_reason(&self) -> Option<&str> {
        match self {
            Storage::Available(_) => None,
            Storage::Unavailable(offline) => Some(offline.reason()),
        }
    }
}

impl From<Database> for Storage {
    fn from(db: Database) -> Self {
        Storage::Available(db)
    }
}

impl SettingsStore for Storage {
    fn active_theme_id(&self) -> Result<Option<String>> {
        match self {
            Storage::Available(db) => db.active_theme_id(),
            Storage::Unavailable(offline) => offline.active_theme_id(),
        }
    }

    fn set_active_theme_id(&mut self, id: &str) -> Result<()> {
        match self {
            Storage::Available(db) => db.set_active_theme_id(id),
            Storage::Unavailable(offline) => offline.set_active_theme_id(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_open_good_path_is_available() {
        let dir = tempdir().unwrap();
        let mut storage = Storage::open(&dir.path().join("tuidoo.db"));
        assert!(storage.database().is_some());
        storage.set_active_theme_id("nord").unwrap();
        assert_eq!(storage.active_theme_id().unwrap().as_deref(), Some("nord"));
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tuidoo.db");
        fs::write(&path, "not a database\n".repeat(512)).unwrap();

        let mut storage = Storage::open(&path);
        assert!(storage.database_mut().is_none());
        assert!(storage.unavailable_reason().is_some());
        assert!(matches!(
            storage.set_active_theme_id("nord"),
            Err(TuidooError::Storage(_))
        ));
    }

    #[test]
    fn test_directory_path_falls_back() {
        let dir = tempdir().unwrap();
        let storage = Storage::open(dir.path());
        assert!(storage.database().is_none());
    }
}
