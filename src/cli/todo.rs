//! Todo CLI command handlers

use chrono::{DateTime, Utc};

use crate::cli::commands::{TodoCommand, TodoFilterArgs};
use crate::cli::context::AppContext;
use crate::core::db::Database;
use crate::core::project::GroupKind;
use crate::core::task::Status;
use crate::core::todo::{parse_due_date, NewTodo, TodoEntry, TodoFilter, DUE_DATE_FORMAT};
use crate::error::Result;

/// Handle todo commands
pub fn handle_todo(command: TodoCommand, ctx: &AppContext) -> Result<()> {
    let mut db = ctx.open_database()?;

    match command {
        TodoCommand::List { filter, json } => {
            let filter = resolve_filter(&db, filter, Utc::now())?;
            let todos = db.todos(&filter)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&todos)?);
            } else if todos.is_empty() {
                println!("No todos found.");
            } else {
                for line in list_lines(&todos, Utc::now()) {
                    println!("{}", line);
                }
            }
        }
        TodoCommand::Add {
            name,
            project,
            list,
            description,
            priority,
            status,
            due,
        } => {
            let project = db.resolve_group(GroupKind::Project, &project)?;
            let list = list
                .map(|list| db.resolve_group(GroupKind::List, &list))
                .transpose()?;

            let mut new = NewTodo::new(project.id, name);
            new.list_id = list.map(|l| l.id);
            new.description = description;
            new.priority = priority;
            new.status = status;
            new.done = status == Status::Done;
            new.due_date = parse_due_date(due.as_deref().unwrap_or(""))?;

            let entry = db.create_todo(&new)?;
            println!("✓ Created todo #{}: {}", entry.todo.id, entry.todo.name);
        }
        TodoCommand::Done { id } => {
            db.mark_complete(id)?;
            println!("✓ Completed #{}: {}", id, db.todo(id)?.todo.name);
        }
        TodoCommand::Reopen { id } => {
            db.mark_incomplete(id)?;
            println!("✓ Reopened #{}: {}", id, db.todo(id)?.todo.name);
        }
        TodoCommand::Status { id, status } => {
            db.set_todo_status(id, status)?;
            println!("✓ #{} is now {}", id, status);
        }
        TodoCommand::Delete { id, purge } => {
            let name = db.todo(id).map(|entry| entry.todo.name).ok();
            if purge {
                db.hard_delete_todo(id)?;
            } else {
                db.delete_todo(id)?;
            }
            match name {
                Some(name) => println!("✓ Deleted #{}: {}", id, name),
                None => println!("✓ Deleted #{}", id),
            }
        }
        TodoCommand::Count => {
            for line in count_lines(&db)? {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

/// Turn command-line filter flags into a query
pub fn resolve_filter(
    db: &Database,
    args: TodoFilterArgs,
    now: DateTime<Utc>,
) -> Result<TodoFilter> {
    let filter = if let Some(project) = args.project {
        TodoFilter::Project(db.resolve_group(GroupKind::Project, &project)?.id)
    } else if let Some(list) = args.list {
        TodoFilter::List(db.resolve_group(GroupKind::List, &list)?.id)
    } else if let Some(status) = args.status {
        TodoFilter::Status(status)
    } else if let Some(priority) = args.priority {
        TodoFilter::Priority(priority)
    } else if args.pending {
        TodoFilter::Pending
    } else if args.completed {
        TodoFilter::Completed
    } else if args.overdue {
        TodoFilter::Overdue(now)
    } else if let Some(query) = args.search {
        TodoFilter::Search(query)
    } else {
        TodoFilter::All
    };
    Ok(filter)
}

/// Two lines per todo, like `gh pr list`
pub fn list_lines(todos: &[TodoEntry], now: DateTime<Utc>) -> Vec<String> {
    let mut lines = Vec::new();
    for entry in todos {
        let todo = &entry.todo;
        let marker = if todo.done { "✓" } else { "○" };
        lines.push(format!(
            "{} #{} {} [{}]",
            marker, todo.id, todo.name, todo.priority
        ));

        let mut detail = format!("   {} • {}", todo.status, entry.project);
        if let Some(list) = &entry.list {
            detail.push_str(&format!(" / {}", list));
        }
        if let Some(due) = todo.due_date {
            detail.push_str(&format!(" • due {}", due.format(DUE_DATE_FORMAT)));
            if todo.is_overdue(now) {
                detail.push_str(" (overdue)");
            }
        }
        lines.push(detail);
    }
    lines
}

fn count_lines(db: &Database) -> Result<Vec<String>> {
    let mut lines = vec![format!("{:<12} {}", "Total", db.count_todos()?)];
    for status in Status::all() {
        lines.push(format!(
            "{:<12} {}",
            status.display_name(),
            db.count_todos_by_status(*status)?
        ));
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed;
    use crate::error::TuidooError;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 4, 15, 30, 0).unwrap()
    }

    fn seeded() -> Database {
        let mut db = Database::open_in_memory().unwrap();
        seed::seed(&mut db, now()).unwrap();
        db
    }

    #[test]
    fn test_filter_by_project_name() {
        let db = seeded();
        let args = TodoFilterArgs {
            project: Some("homelab".into()),
            ..Default::default()
        };
        let filter = resolve_filter(&db, args, now()).unwrap();
        let todos = db.todos(&filter).unwrap();
        assert_eq!(todos.len(), 2);
        assert!(todos.iter().all(|t| t.project == "Homelab"));
    }

    #[test]
    fn test_unknown_list_is_not_found() {
        let db = seeded();
        let args = TodoFilterArgs {
            list: Some("Someday".into()),
            ..Default::default()
        };
        assert!(matches!(
            resolve_filter(&db, args, now()),
            Err(TuidooError::NotFound(_))
        ));
    }

    #[test]
    fn test_no_flags_lists_everything() {
        let db = seeded();
        let filter = resolve_filter(&db, TodoFilterArgs::default(), now()).unwrap();
        assert_eq!(filter, TodoFilter::All);
    }

    #[test]
    fn test_list_lines_flag_overdue() {
        let db = seeded();
        let todos = db.todos(&TodoFilter::All).unwrap();

        let lines = list_lines(&todos, now());
        assert_eq!(lines.len(), todos.len() * 2);
        assert_eq!(lines[0], "○ #1 Deploy microservice v2 [High]");
        assert_eq!(lines[1], "   Pending • Work / Urgent • due 2026-05-05");

        let later = Utc.with_ymd_and_hms(2026, 5, 6, 0, 0, 0).unwrap();
        assert!(list_lines(&todos, later)[1].ends_with("(overdue)"));
    }

    #[test]
    fn test_count_lines_cover_every_status() {
        let db = seeded();
        let lines = count_lines(&db).unwrap();
        assert_eq!(lines.len(), Status::all().len() + 1);
        assert_eq!(lines[0], format!("{:<12} 5", "Total"));
    }
}
