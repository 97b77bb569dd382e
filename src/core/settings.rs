//! Persisted application settings
//!
//! The theme engine only needs the active theme identifier, read once at
//! startup and written after each successful switch. [`Database`] keeps it
//! in a single-row table; [`OfflineSettings`] stands in when the database
//! could not be opened.

use rusqlite::{params, OptionalExtension};
use tracing::debug;

use crate::core::db::{self, Database};
use crate::error::{Result, TuidooError};

/// Storage the theme engine reads from and writes to
#[cfg_attr(test, mockall::automock)]
pub trait SettingsStore {
    /// The persisted theme identifier, `None` when nothing was ever saved
    fn active_theme_id(&self) -> Result<Option<String>>;

    /// Persist the active theme identifier
    fn set_active_theme_id(&mut self, id: &str) -> Result<()>;
}

impl SettingsStore for Database {
    fn active_theme_id(&self) -> Result<Option<String>> {
        let id = self
            .conn
            .query_row(
                "SELECT active_theme_id FROM settings WHERE id = 1",
                [],
                |row| row.get(0),
            )
            .optional()?;
        Ok(id)
    }

    fn set_active_theme_id(&mut self, id: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO settings (id, active_theme_id, updated_at) VALUES (1, ?1, ?2) \
             ON CONFLICT(id) DO UPDATE SET \
                active_theme_id = excluded.active_theme_id, \
                updated_at = excluded.updated_at",
            params![id, db::now()],
        )?;
        debug!(theme = id, "persisted active theme");
        Ok(())
    }
}

/// Settings used when the database is unavailable.
///
/// Every call fails with the reason the database could not be opened.
#[derive(Debug, Clone)]
pub struct OfflineSettings {
    reason: String,
}

impl OfflineSettings {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    fn error(&self) -> TuidooError {
        TuidooError::Storage(self.reason.clone())
    }
}

impl SettingsStore for OfflineSettings {
    fn active_theme_id(&self) -> Result<Option<String>> {
        Err(self.error())
    }

    fn set_active_theme_id(&mut self, _id: &str) -> Result<()> {
        Err(self.error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn row_count(db: &Database) -> i64 {
        db.conn
            .query_row("SELECT COUNT(*) FROM settings", [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn test_empty_store_has_no_theme() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.active_theme_id().unwrap(), None);
    }

    #[test]
    fn test_reading_never_writes() {
        let db = Database::open_in_memory().unwrap();
        let _ = db.active_theme_id().unwrap();
        let _ = db.active_theme_id().unwrap();
        assert_eq!(row_count(&db), 0);
    }

    #[test]
    fn test_set_then_get_overwrites_single_row() {
        let mut db = Database::open_in_memory().unwrap();
        db.set_active_theme_id("nord").unwrap();
        db.set_active_theme_id("gruvbox").unwrap();

        assert_eq!(db.active_theme_id().unwrap().as_deref(), Some("gruvbox"));
        assert_eq!(row_count(&db), 1);
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tuidoo.db");

        {
            let mut db = Database::open(&path).unwrap();
            db.set_active_theme_id("synthwave").unwrap();
        }

        let db = Database::open(&path).unwrap();
        assert_eq!(db.active_theme_id().unwrap().as_deref(), Some("synthwave"));
    }

    #[test]
    fn test_offline_settings_fail_every_call() {
        let mut offline = OfflineSettings::new("cannot open /x/tuidoo.db");
        assert_eq!(offline.reason(), "cannot open /x/tuidoo.db");
        assert!(matches!(
            offline.active_theme_id(),
            Err(TuidooError::Storage(_))
        ));
        assert!(offline.set_active_theme_id("nord").is_err());
    }
}
