//! Application configuration management
//!
//! Handles loading and saving application settings including:
//! - Database location
//! - Banner gradient direction
//! - Event loop tick rate and default log filter
//!
//! The active theme is not stored here; it lives in the settings database.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TuidooError};
use crate::theme::BannerStyle;

/// Configurable keys, as spelled on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    DatabasePath,
    BannerStyle,
    TickRate,
    LogFilter,
}

impl ConfigField {
    pub fn key(&self) -> &'static str {
        match self {
            ConfigField::DatabasePath => "database-path",
            ConfigField::BannerStyle => "banner-style",
            ConfigField::TickRate => "tick-rate",
            ConfigField::LogFilter => "log-filter",
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Settings database; defaults to the platform data directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,

    /// Gradient direction for the header banner
    #[serde(default)]
    pub banner_style: BannerStyle,

    /// UI tick interval in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,

    /// Fallback tracing filter when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_tick_rate() -> u64 {
    250
}

const TICK_RATE_RANGE: std::ops::RangeInclusive<u64> = 16..=5000;

fn check_tick_rate(ms: u64) -> Result<()> {
    if !TICK_RATE_RANGE.contains(&ms) {
        return Err(TuidooError::Config(format!(
            "tick rate must be between {} and {} ms, got {}",
            TICK_RATE_RANGE.start(),
            TICK_RATE_RANGE.end(),
            ms
        )));
    }
    Ok(())
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: None,
            banner_style: BannerStyle::default(),
            tick_rate_ms: default_tick_rate(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Reject values that parse but cannot be used
    pub fn validate(&self) -> Result<()> {
        check_tick_rate(self.tick_rate_ms)?;
        if matches!(&self.database_path, Some(path) if path.as_os_str().is_empty()) {
            return Err(TuidooError::Config("database_path cannot be empty".into()));
        }
        Ok(())
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("com", "tuidoo", "tuidoo")
            .ok_or_else(|| TuidooError::Config("Could not determine config directory".into()))
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().join("config.toml"))
    }

    /// Default settings database location
    pub fn default_database_path() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.data_dir().join("tuidoo.db"))
    }

    /// Configured database path, or the platform default
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database_path {
            Some(path) => Ok(path.clone()),
            None => Self::default_database_path(),
        }
    }

    /// Read a field as display text
    pub fn get(&self, field: ConfigField) -> Result<String> {
        Ok(match field {
            ConfigField::DatabasePath => self.database_path()?.display().to_string(),
            ConfigField::BannerStyle => self.banner_style.to_string(),
            ConfigField::TickRate => self.tick_rate_ms.to_string(),
            ConfigField::LogFilter => self.log_filter.clone(),
        })
    }

    /// Parse and assign a field
    pub fn set(&mut self, field: ConfigField, value: &str) -> Result<()> {
        match field {
            ConfigField::DatabasePath => {
                if value.trim().is_empty() {
                    return Err(TuidooError::InvalidInput(
                        "Database path cannot be empty".into(),
                    ));
                }
                self.database_path = Some(PathBuf::from(value));
            }
            ConfigField::BannerStyle => {
                self.banner_style = BannerStyle::from_str(value).ok_or_else(|| {
                    TuidooError::InvalidInput(format!(
                        "Invalid banner style '{}'. Available styles: {}",
                        value,
                        BannerStyle::all()
                            .iter()
                            .map(|s| s.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    ))
                })?;
            }
            ConfigField::TickRate => {
                let ms: u64 = value.parse().map_err(|_| {
                    TuidooError::InvalidInput(format!(
                        "Invalid tick rate '{}'. Expected milliseconds, e.g. 250",
                        value
                    ))
                })?;
                check_tick_rate(ms)?;
                self.tick_rate_ms = ms;
            }
            ConfigField::LogFilter => self.log_filter = value.to_string(),
        }
        Ok(())
    }

    /// Reset a field to its default
    pub fn unset(&mut self, field: ConfigField) {
        let defaults = Config::default();
        match field {
            ConfigField::DatabasePath => self.database_path = defaults.database_path,
            ConfigField::BannerStyle => self.banner_style = defaults.banner_style,
            ConfigField::TickRate => self.tick_rate_ms = defaults.tick_rate_ms,
            ConfigField::LogFilter => self.log_filter = defaults.log_filter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.banner_style, BannerStyle::Horizontal);
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.log_filter, "warn");
        assert!(config.database_path.is_none());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "banner_style = \"diagonal\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.banner_style, BannerStyle::Diagonal);
        assert_eq!(config.tick_rate_ms, 250);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sub").join("config.toml");

        let mut config = Config::default();
        config.set(ConfigField::TickRate, "100").unwrap();
        config
            .set(ConfigField::DatabasePath, "/tmp/tuidoo-test.db")
            .unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.database_path().unwrap(),
            PathBuf::from("/tmp/tuidoo-test.db")
        );
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "tick_rate_ms = \"fast\"").unwrap();
        assert!(matches!(Config::load_from(&path), Err(TuidooError::Toml(_))));
    }

    #[test]
    fn test_zero_tick_rate_in_file_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "tick_rate_ms = 0\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, TuidooError::Config(_)));
        assert!(err.to_string().contains("between 16 and 5000"));
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set(ConfigField::BannerStyle, "spiral").is_err());
        assert!(config.set(ConfigField::TickRate, "soon").is_err());
        assert!(config.set(ConfigField::TickRate, "1").is_err());
        assert!(config.set(ConfigField::DatabasePath, "  ").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unset_restores_default() {
        let mut config = Config::default();
        config.set(ConfigField::BannerStyle, "diagonal").unwrap();
        config.unset(ConfigField::BannerStyle);
        assert_eq!(config.get(ConfigField::BannerStyle).unwrap(), "horizontal");
    }
}
