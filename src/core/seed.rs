//! Sample data and database wipes
//!
//! Seeding is idempotent per table: a table that already has live rows is
//! left alone. Everything runs in one transaction.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use rusqlite::{params, Transaction};
use tracing::{debug, info};

use crate::core::db::{self, Database};
use crate::core::project::{insert_group, live_ids, GroupKind};
use crate::core::task::{Priority, Status};
use crate::core::todo::{insert_todo, NewTodo};
use crate::error::{Result, TuidooError};
use crate::theme::catalog::DEFAULT_THEME_ID;

const PROJECTS: &[(&str, &str)] = &[
    ("Work", "#FF6B6B"),
    ("Personal", "#4ECDC4"),
    ("Homelab", "#45B7D1"),
];

const LISTS: &[(&str, &str)] = &[
    ("Urgent", "#FF4757"),
    ("Daily Tasks", "#FFA502"),
    ("Backlog", "#2ED573"),
    ("Homelab Setup", "#1E90FF"),
];

/// What a seed run inserted
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub settings: bool,
    pub projects: usize,
    pub lists: usize,
    pub todos: usize,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        !self.settings && self.projects == 0 && self.lists == 0 && self.todos == 0
    }
}

fn live_count(tx: &Transaction<'_>, table: &str) -> rusqlite::Result<i64> {
    tx.query_row(
        &format!("SELECT COUNT(*) FROM {} WHERE deleted_at IS NULL", table),
        [],
        |row| row.get(0),
    )
}

/// Midnight UTC `days` from `now`
fn days_ahead(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    (now + Duration::days(days))
        .date_naive()
        .and_time(NaiveTime::MIN)
        .and_utc()
}

fn sample_todos(projects: &[i64], lists: &[i64], now: DateTime<Utc>) -> Vec<NewTodo> {
    let todo = |project: usize,
                list: Option<usize>,
                name: &str,
                priority: Priority,
                status: Status,
                color: &str| {
        let mut new = NewTodo::new(projects[project], name);
        new.list_id = list.map(|i| lists[i]);
        new.priority = priority;
        new.status = status;
        new.color = color.to_string();
        new
    };

    let mut deploy = todo(
        0,
        Some(0),
        "Deploy microservice v2",
        Priority::High,
        Status::Pending,
        "#FF4757",
    );
    deploy.description = Some("Update Docker → Alpine 3.20 + Ansible deploy".into());
    deploy.due_date = Some(days_ahead(now, 1));

    let review = todo(
        0,
        Some(1),
        "Code review PR #456",
        Priority::Medium,
        Status::InProgress,
        "#FFA502",
    );

    let mut groceries = todo(
        1,
        Some(2),
        "Grocery shopping",
        Priority::Low,
        Status::Done,
        "#2ED573",
    );
    groceries.done = true;

    let mut backup = todo(
        2,
        Some(3),
        "Proxmox NFS backup",
        Priority::High,
        Status::Pending,
        "#1E90FF",
    );
    backup.description = Some("NFSv4 + MergerFS + daily cron".into());
    backup.due_date = Some(days_ahead(now, 7));

    let roles = todo(
        2,
        None,
        "Update Ansible Galaxy roles",
        Priority::Medium,
        Status::Pending,
        "#74B9FF",
    );

    vec![deploy, review, groceries, backup, roles]
}

/// Insert the default settings row and sample projects, lists and todos
pub fn seed(db: &mut Database, now: DateTime<Utc>) -> Result<SeedReport> {
    let mut report = SeedReport::default();
    let tx = db.conn.transaction()?;

    report.settings = tx.execute(
        "INSERT OR IGNORE INTO settings (id, active_theme_id, updated_at) VALUES (1, ?1, ?2)",
        params![DEFAULT_THEME_ID, db::to_db_time(now)],
    )? > 0;

    if live_count(&tx, "projects")? == 0 {
        for (name, color) in PROJECTS {
            insert_group(&tx, GroupKind::Project, name, color)?;
        }
        report.projects = PROJECTS.len();
    } else {
        debug!("projects already exist, skipping");
    }

    if live_count(&tx, "todo_lists")? == 0 {
        for (name, color) in LISTS {
            insert_group(&tx, GroupKind::List, name, color)?;
        }
        report.lists = LISTS.len();
    } else {
        debug!("lists already exist, skipping");
    }

    if live_count(&tx, "todos")? == 0 {
        let projects = live_ids(&tx, GroupKind::Project)?;
        let lists = live_ids(&tx, GroupKind::List)?;
        if projects.len() < PROJECTS.len() || lists.len() < LISTS.len() {
            return Err(TuidooError::InvalidInput(format!(
                "Not enough projects or lists to seed todos (need {} and {}, have {} and {})",
                PROJECTS.len(),
                LISTS.len(),
                projects.len(),
                lists.len()
            )));
        }
        let todos = sample_todos(&projects, &lists, now);
        for new in &todos {
            insert_todo(&tx, new)?;
        }
        report.todos = todos.len();
    } else {
        debug!("todos already exist, skipping");
    }

    tx.commit()?;
    info!(?report, "seed complete");
    Ok(report)
}

/// Permanently delete every row, soft-deleted ones included
pub fn clean(db: &mut Database) -> Result<()> {
    let tx = db.conn.transaction()?;
    for table in ["todos", "todo_lists", "projects", "settings"] {
        tx.execute(&format!("DELETE FROM {}", table), [])?;
    }
    tx.commit()?;
    info!("database cleaned");
    Ok(())
}

pub fn reset_and_seed(db: &mut Database, now: DateTime<Utc>) -> Result<SeedReport> {
    clean(db)?;
    seed(db, now)
}
