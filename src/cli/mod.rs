//! CLI module for tuidoo
//!
//! This module contains all CLI command definitions and handlers using clap.

pub mod banner;
pub mod commands;
pub mod config;
pub mod context;
pub mod data;
pub mod project;
pub mod theme;
pub mod todo;

pub use commands::{Cli, Commands};
pub use context::AppContext;
