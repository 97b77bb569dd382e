//! Resolved runtime paths and configuration shared by every command

use std::path::PathBuf;

use crate::cli::commands::Cli;
use crate::core::config::Config;
use crate::core::db::Database;
use crate::core::storage::Storage;
use crate::error::Result;

/// Configuration and file locations after applying command-line overrides
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Config,
    pub config_path: PathBuf,
    pub database_path: PathBuf,
}

impl AppContext {
    /// Resolve `--config` / `--database` against the platform defaults
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let config_path = match &cli.config {
            Some(path) => path.clone(),
            None => Config::config_path()?,
        };
        let config = Config::load_from(&config_path)?;
        let database_path = match &cli.database {
            Some(path) => path.clone(),
            None => config.database_path()?,
        };

        Ok(Self {
            config,
            config_path,
            database_path,
        })
    }

    /// Open the database for commands that cannot work without it
    pub fn open_database(&self) -> Result<Database> {
        Database::open(&self.database_path)
    }

    /// Open the database, degrading to defaults when it is unusable
    pub fn open_storage(&self) -> Storage {
        Storage::open(&self.database_path)
    }
}
