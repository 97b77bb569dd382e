//! Seed, clean and reset command handlers

use std::io::{self, BufRead, Write};

use chrono::Utc;
use tracing::info;

use crate::cli::context::AppContext;
use crate::core::seed::{self, SeedReport};
use crate::error::Result;
use crate::theme::DEFAULT_THEME_ID;

/// Insert sample data into empty tables
pub fn handle_seed(ctx: &AppContext) -> Result<()> {
    let mut db = ctx.open_database()?;
    let report = seed::seed(&mut db, Utc::now())?;
    println!("{}", seed_summary(&report));
    Ok(())
}

/// Delete every row after confirmation
pub fn handle_clean(yes: bool, ctx: &AppContext) -> Result<()> {
    if !yes && !confirm(&mut io::stdin().lock())? {
        println!("Clean cancelled");
        return Ok(());
    }

    let mut db = ctx.open_database()?;
    seed::clean(&mut db)?;
    info!(path = ?db.path(), "database cleaned");
    println!("✓ All data deleted");
    Ok(())
}

/// Delete every row, then seed again
pub fn handle_reset(yes: bool, ctx: &AppContext) -> Result<()> {
    if !yes && !confirm(&mut io::stdin().lock())? {
        println!("Reset cancelled");
        return Ok(());
    }

    let mut db = ctx.open_database()?;
    let report = seed::reset_and_seed(&mut db, Utc::now())?;
    info!(path = ?db.path(), "database reset");
    println!("✓ Database reset. Theme reset to default: {}", DEFAULT_THEME_ID);
    println!("{}", seed_summary(&report));
    Ok(())
}

/// Ask before destroying data; only "y" or "yes" proceeds
fn confirm(input: &mut impl BufRead) -> Result<bool> {
    print!("This will delete all data. Continue? (y/N) ");
    io::stdout().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

fn seed_summary(report: &SeedReport) -> String {
    if report.is_empty() {
        return "Nothing to seed, data already present".to_string();
    }
    format!(
        "✓ Seeded {} projects, {} lists, {} todos",
        report.projects, report.lists, report.todos
    )
}
