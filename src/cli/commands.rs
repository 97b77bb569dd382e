//! CLI command definitions using clap
//!
//! Defines the command structure for the `tuidoo` CLI tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::core::config::ConfigField;
use crate::core::task::{Priority, Status};
use crate::theme::BannerStyle;

/// tuidoo - Terminal todo manager
///
/// Run without arguments to launch the TUI mode.
#[derive(Parser, Debug)]
#[command(name = "tuidoo", version, about, long_about = None)]
pub struct Cli {
    /// Database to use instead of the configured one
    #[arg(long, global = true, env = "TUIDOO_DATABASE", value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Configuration file to use instead of the platform default
    #[arg(long, global = true, env = "TUIDOO_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect and switch colour themes
    Theme(ThemeArgs),

    /// Print the gradient banner
    Banner(BannerArgs),

    /// Manage configuration
    Config(ConfigArgs),

    /// Manage todos
    Todo(TodoArgs),

    /// Manage projects
    Project(GroupArgs),

    /// Manage todo lists
    #[command(name = "todolist")]
    TodoList(GroupArgs),

    /// Insert sample projects, lists and todos into empty tables
    Seed,

    /// Delete all data, settings included
    Clean {
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Delete all data and seed it again (the theme returns to the default)
    Reset {
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Todo Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Todo commands
#[derive(Parser, Debug)]
pub struct TodoArgs {
    #[command(subcommand)]
    pub command: TodoCommand,
}

#[derive(Subcommand, Debug)]
pub enum TodoCommand {
    /// List todos
    List {
        #[command(flatten)]
        filter: TodoFilterArgs,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a todo
    Add {
        /// Todo name
        name: String,

        /// Project ID or name
        #[arg(long, short)]
        project: String,

        /// List ID or name
        #[arg(long, short)]
        list: Option<String>,

        /// Longer description
        #[arg(long, short)]
        description: Option<String>,

        #[arg(long, value_parser = parse_priority, default_value = "medium")]
        priority: Priority,

        #[arg(long, value_parser = parse_status, default_value = "new")]
        status: Status,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
    },
    /// Mark a todo as done
    Done {
        id: i64,
    },
    /// Mark a todo as not done
    Reopen {
        id: i64,
    },
    /// Change a todo's status
    Status {
        id: i64,
        #[arg(value_parser = parse_status)]
        status: Status,
    },
    /// Delete a todo
    Delete {
        id: i64,

        /// Remove the row for good instead of hiding it
        #[arg(long)]
        purge: bool,
    },
    /// Count todos, in total and per status
    Count,
}

/// At most one filter per listing
#[derive(Args, Debug, Default)]
#[group(multiple = false)]
pub struct TodoFilterArgs {
    /// Only todos of this project (ID or name)
    #[arg(long)]
    pub project: Option<String>,

    /// Only todos in this list (ID or name)
    #[arg(long)]
    pub list: Option<String>,

    #[arg(long, value_parser = parse_status)]
    pub status: Option<Status>,

    #[arg(long, value_parser = parse_priority)]
    pub priority: Option<Priority>,

    /// Only todos not yet done
    #[arg(long)]
    pub pending: bool,

    /// Only todos already done
    #[arg(long)]
    pub completed: bool,

    /// Only pending todos past their due date
    #[arg(long)]
    pub overdue: bool,

    /// Only todos whose name contains this text
    #[arg(long)]
    pub search: Option<String>,
}

fn parse_priority(value: &str) -> std::result::Result<Priority, String> {
    Priority::parse(value).ok_or_else(|| {
        let names: Vec<_> = Priority::all().iter().map(|p| p.display_name()).collect();
        format!("expected one of: {}", names.join(", "))
    })
}

fn parse_status(value: &str) -> std::result::Result<Status, String> {
    Status::parse(value).ok_or_else(|| {
        let names: Vec<_> = Status::all().iter().map(|s| s.display_name()).collect();
        format!("expected one of: {}", names.join(", "))
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Project / List Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Project and todo list commands
#[derive(Parser, Debug)]
pub struct GroupArgs {
    #[command(subcommand)]
    pub command: GroupCommand,
}

#[derive(Subcommand, Debug)]
pub enum GroupCommand {
    /// List all entries
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create an entry
    Add {
        name: String,

        /// Display colour, e.g. "#FF6B6B"
        #[arg(long, short, default_value = "")]
        color: String,
    },
    /// Rename an entry
    Rename {
        /// ID or current name
        reference: String,
        new_name: String,
    },
    /// Delete an entry
    Remove {
        /// ID or name
        reference: String,
    },
    /// Find entries whose name contains the query
    Search {
        query: String,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Theme Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Theme commands
#[derive(Parser, Debug)]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub command: ThemeCommand,
}

#[derive(Subcommand, Debug)]
pub enum ThemeCommand {
    /// List available themes
    List {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the active theme
    Current,
    /// Switch the active theme and save it
    Set {
        /// Theme identifier, e.g. "tokyo-night"
        id: String,
    },
    /// Print every colour of a theme
    Show {
        /// Theme identifier (defaults to the active theme)
        id: Option<String>,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Banner Command
// ─────────────────────────────────────────────────────────────────────────────

/// Banner options
#[derive(Parser, Debug)]
pub struct BannerArgs {
    /// Gradient direction (defaults to the configured style)
    #[arg(long, short)]
    pub style: Option<BannerStyleArg>,

    /// Colour with this theme's header gradient instead of the brand ramp
    #[arg(long, short)]
    pub theme: Option<String>,

    /// Print without colour escapes
    #[arg(long)]
    pub plain: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum BannerStyleArg {
    Horizontal,
    Diagonal,
}

impl From<BannerStyleArg> for BannerStyle {
    fn from(arg: BannerStyleArg) -> Self {
        match arg {
            BannerStyleArg::Horizontal => BannerStyle::Horizontal,
            BannerStyleArg::Diagonal => BannerStyle::Diagonal,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Config Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration commands
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Set a configuration value
    Set {
        /// Configuration key
        key: ConfigKey,
        /// Value to set
        value: String,
    },
    /// Get a configuration value
    Get {
        /// Configuration key
        key: ConfigKey,
    },
    /// Reset a configuration value to its default
    Remove {
        /// Configuration key
        key: ConfigKey,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ConfigKey {
    /// Settings database location
    #[value(name = "database-path")]
    DatabasePath,

    /// Banner gradient direction
    #[value(name = "banner-style")]
    BannerStyle,

    /// UI tick interval in milliseconds
    #[value(name = "tick-rate")]
    TickRate,

    /// Default tracing filter
    #[value(name = "log-filter")]
    LogFilter,
}

impl From<ConfigKey> for ConfigField {
    fn from(key: ConfigKey) -> Self {
        match key {
            ConfigKey::DatabasePath => ConfigField::DatabasePath,
            ConfigKey::BannerStyle => ConfigField::BannerStyle,
            ConfigKey::TickRate => ConfigField::TickRate,
            ConfigKey::LogFilter => ConfigField::LogFilter,
        }
    }
}
