//! Core functionality for tuidoo
//!
//! This module contains shared business logic including:
//! - Application configuration
//! - The local database and its settings, project, list and todo tables
//! - Sample data seeding
//! - Theme bootstrap and switching

pub mod config;
pub mod db;
pub mod project;
pub mod seed;
pub mod settings;
pub mod storage;
pub mod task;
pub mod theme_service;
pub mod todo;

pub use config::Config;
pub use db::Database;
pub use settings::SettingsStore;
pub use storage::Storage;
pub use theme_service::{apply_theme, load_theme_manager, ThemeChange};
