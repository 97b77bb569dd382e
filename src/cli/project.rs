//! Project and todo list CLI command handlers

use crate::cli::commands::GroupCommand;
use crate::cli::context::AppContext;
use crate::core::project::{Group, GroupKind};
use crate::error::Result;

/// Handle `project` and `todolist` commands
pub fn handle_group(kind: GroupKind, command: GroupCommand, ctx: &AppContext) -> Result<()> {
    let mut db = ctx.open_database()?;

    match command {
        GroupCommand::List { json } => {
            let groups = db.groups(kind)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&groups)?);
            } else {
                print_groups(kind, &groups);
            }
        }
        GroupCommand::Add { name, color } => {
            let group = db.create_group(kind, &name, &color)?;
            println!("✓ Created {} #{}: {}", kind.label(), group.id, group.name);
        }
        GroupCommand::Rename {
            reference,
            new_name,
        } => {
            let mut group = db.resolve_group(kind, &reference)?;
            let old = std::mem::replace(&mut group.name, new_name);
            db.update_group(kind, &group)?;
            println!("✓ Renamed {} '{}' to '{}'", kind.label(), old, group.name.trim());
        }
        GroupCommand::Remove { reference } => {
            let group = db.resolve_group(kind, &reference)?;
            db.delete_group(kind, group.id)?;
            println!("✓ Deleted {} '{}'", kind.label(), group.name);
        }
        GroupCommand::Search { query } => {
            print_groups(kind, &db.search_groups(kind, &query)?);
        }
    }
    Ok(())
}

fn print_groups(kind: GroupKind, groups: &[Group]) {
    if groups.is_empty() {
        println!("No {}s found.", kind.label());
        return;
    }
    for line in group_lines(groups) {
        println!("{}", line);
    }
}

/// `#id name color`, one per row
pub fn group_lines(groups: &[Group]) -> Vec<String> {
    groups
        .iter()
        .map(|g| format!("#{:<4} {:<20} {}", g.id, g.name, g.color).trim_end().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_lines_skip_missing_colour() {
        let groups = vec![
            Group {
                id: 1,
                name: "Work".into(),
                color: "#FF6B6B".into(),
            },
            Group {
                id: 12,
                name: "Errands".into(),
                color: String::new(),
            },
        ];
        let lines = group_lines(&groups);
        assert_eq!(lines[0], format!("#{:<4} {:<20} #FF6B6B", 1, "Work"));
        assert_eq!(lines[1], "#12   Errands");
    }
}
