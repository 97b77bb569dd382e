//! Glue between the theme manager and settings storage
//!
//! Startup never fails because of a bad or unreadable setting: it falls back
//! to the default theme. Switching applies in memory first and persists
//! second; a failed write is reported but not rolled back.

use tracing::{info, warn};

use crate::core::settings::SettingsStore;
use crate::error::Result;
use crate::theme::catalog::DEFAULT_THEME_ID;
use crate::theme::ThemeManager;

/// Outcome of a successful in-memory theme switch
#[derive(Debug)]
pub struct ThemeChange {
    /// Identifier now active
    pub theme_id: &'static str,
    /// Whether the choice reached storage
    pub persisted: Result<()>,
}

impl ThemeChange {
    pub fn is_persisted(&self) -> bool {
        self.persisted.is_ok()
    }
}

/// Build a manager positioned on the persisted theme, or the default.
///
/// Reads the store once and never writes to it.
pub fn load_theme_manager(store: &dyn SettingsStore) -> ThemeManager {
    let mut manager = ThemeManager::new();

    match store.active_theme_id() {
        Ok(Some(id)) => match manager.set_theme(&id) {
            Ok(()) => info!(theme = %id, "applied saved theme"),
            Err(_) => warn!(
                theme = %id,
                fallback = DEFAULT_THEME_ID,
                "saved theme is not in the catalog, using default"
            ),
        },
        Ok(None) => info!(theme = DEFAULT_THEME_ID, "no saved theme, using default"),
        Err(e) => warn!(
            error = %e,
            fallback = DEFAULT_THEME_ID,
            "could not read saved theme, using default"
        ),
    }

    manager
}

/// Switch to `id` and persist the choice.
///
/// Returns `ThemeNotFound` without touching storage when `id` is unknown.
pub fn apply_theme(
    manager: &mut ThemeManager,
    store: &mut dyn SettingsStore,
    id: &str,
) -> Result<ThemeChange> {
    manager.set_theme(id)?;
    let theme_id = manager.current_theme().id;

    let persisted = store.set_active_theme_id(theme_id);
    match &persisted {
        Ok(()) => info!(theme = theme_id, "theme changed"),
        Err(e) => warn!(theme = theme_id, error = %e, "theme changed but was not saved"),
    }

    Ok(ThemeChange {
        theme_id,
        persisted,
    })
}
