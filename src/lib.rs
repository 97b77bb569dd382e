//! tuidoo - A terminal todo manager
//!
//! This library provides the theme engine (palette catalog, active theme
//! manager and gradient banner), the SQLite store for todos, projects,
//! lists and settings, and the CLI and TUI front-ends that consume them.

pub mod cli;
pub mod core;
pub mod error;
pub mod theme;
pub mod tui;

pub use error::{Result, TuidooError};
