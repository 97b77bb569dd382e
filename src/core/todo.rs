//! Todo records and queries
//!
//! A todo always belongs to a project and may sit in a list. Reads return
//! [`TodoEntry`] values carrying the joined project and list names.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use serde::Serialize;
use tracing::debug;

use crate::core::db::{self, Database};
use crate::core::project::GroupKind;
use crate::core::task::{Priority, Status};
use crate::error::{Result, TuidooError};

/// How due dates are typed and shown
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` due date as midnight UTC; blank means none
pub fn parse_due_date(raw: &str) -> Result<Option<DateTime<Utc>>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let date = NaiveDate::parse_from_str(raw, DUE_DATE_FORMAT).map_err(|_| {
        TuidooError::InvalidInput(format!("Invalid due date '{}'. Expected YYYY-MM-DD", raw))
    })?;
    Ok(Some(date.and_time(NaiveTime::MIN).and_utc()))
}

/// Fields supplied when creating a todo
#[derive(Debug, Clone, PartialEq)]
pub struct NewTodo {
    pub project_id: i64,
    pub list_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub status: Status,
    pub color: String,
    pub done: bool,
    pub due_date: Option<DateTime<Utc>>,
}

impl NewTodo {
    pub fn new(project_id: i64, name: impl Into<String>) -> Self {
        Self {
            project_id,
            list_id: None,
            name: name.into(),
            description: None,
            priority: Priority::default(),
            status: Status::default(),
            color: String::new(),
            done: false,
            due_date: None,
        }
    }
}

/// A stored todo
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Todo {
    pub id: i64,
    pub project_id: i64,
    pub list_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub status: Status,
    pub color: String,
    pub done: bool,
    pub due_date: Option<DateTime<Utc>>,
}

impl Todo {
    /// Not done and due strictly before `now`
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.done && self.due_date.is_some_and(|due| due < now)
    }
}

/// A todo with the names of its project and list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodoEntry {
    #[serde(flatten)]
    pub todo: Todo,
    pub project: String,
    pub list: Option<String>,
}

/// Which todos a listing returns
#[derive(Debug, Clone, PartialEq)]
pub enum TodoFilter {
    All,
    Project(i64),
    List(i64),
    Status(Status),
    Priority(Priority),
    Pending,
    Completed,
    /// Not done with a due date before the given instant
    Overdue(DateTime<Utc>),
    /// Case-insensitive substring of the name
    Search(String),
}

impl TodoFilter {
    fn clause(&self) -> (&'static str, Vec<Value>) {
        match self {
            TodoFilter::All => ("1 = 1", vec![]),
            TodoFilter::Project(id) => ("t.project_id = ?1", vec![Value::Integer(*id)]),
            TodoFilter::List(id) => ("t.list_id = ?1", vec![Value::Integer(*id)]),
            TodoFilter::Status(status) => ("t.status = ?1", vec![Value::Integer(status.index())]),
            TodoFilter::Priority(priority) => {
                ("t.priority = ?1", vec![Value::Integer(priority.index())])
            }
            TodoFilter::Pending => ("t.done = 0", vec![]),
            TodoFilter::Completed => ("t.done = 1", vec![]),
            TodoFilter::Overdue(now) => (
                "t.done = 0 AND t.due_date IS NOT NULL AND t.due_date < ?1",
                vec![Value::Text(db::to_db_time(*now))],
            ),
            TodoFilter::Search(query) => (
                "t.name LIKE '%' || ?1 || '%'",
                vec![Value::Text(query.clone())],
            ),
        }
    }
}

const SELECT_ENTRY: &str = "SELECT \
        t.id, t.project_id, t.list_id, t.name, t.description, \
        t.priority, t.status, t.color, t.done, t.due_date, \
        p.name, l.name \
     FROM todos t \
     JOIN projects p ON p.id = t.project_id \
     LEFT JOIN todo_lists l ON l.id = t.list_id AND l.deleted_at IS NULL \
     WHERE t.deleted_at IS NULL";

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<TodoEntry> {
    let priority: i64 = row.get(5)?;
    let status: i64 = row.get(6)?;
    let due: Option<String> = row.get(9)?;

    Ok(TodoEntry {
        todo: Todo {
            id: row.get(0)?,
            project_id: row.get(1)?,
            list_id: row.get(2)?,
            name: row.get(3)?,
            description: row.get(4)?,
            priority: Priority::from_index(priority).unwrap_or_default(),
            status: Status::from_index(status).unwrap_or_default(),
            color: row.get(7)?,
            done: row.get(8)?,
            due_date: due.map(|raw| db::from_db_time(9, &raw)).transpose()?,
        },
        project: row.get(10)?,
        list: row.get(11)?,
    })
}

fn not_found(id: i64) -> TuidooError {
    TuidooError::NotFound(format!("todo with ID {} not found", id))
}

pub(crate) fn insert_todo(conn: &Connection, new: &NewTodo) -> rusqlite::Result<i64> {
    let now = db::now();
    conn.execute(
        "INSERT INTO todos \
            (project_id, list_id, name, description, priority, status, color, done, due_date, \
             created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10)",
        params![
            new.project_id,
            new.list_id,
            new.name.trim(),
            new.description,
            new.priority.index(),
            new.status.index(),
            new.color,
            new.done,
            new.due_date.map(db::to_db_time),
            now,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

impl Database {
    fn validate_todo(&self, name: &str, project_id: i64, list_id: Option<i64>) -> Result<()> {
        if name.trim().is_empty() {
            return Err(TuidooError::InvalidInput("The todo name cannot be empty".into()));
        }
        if project_id == 0 {
            return Err(TuidooError::InvalidInput("A todo needs a project".into()));
        }
        self.group(GroupKind::Project, project_id)?;
        if let Some(list_id) = list_id {
            self.group(GroupKind::List, list_id)?;
        }
        Ok(())
    }

    pub fn create_todo(&mut self, new: &NewTodo) -> Result<TodoEntry> {
        self.validate_todo(&new.name, new.project_id, new.list_id)?;
        let id = insert_todo(&self.conn, new)?;
        debug!(id, "created todo");
        self.todo(id)
    }

    pub fn todo(&self, id: i64) -> Result<TodoEntry> {
        self.conn
            .query_row(&format!("{} AND t.id = ?1", SELECT_ENTRY), [id], entry_from_row)
            .optional()?
            .ok_or_else(|| not_found(id))
    }

    /// List todos matching `filter`, oldest first
    pub fn todos(&self, filter: &TodoFilter) -> Result<Vec<TodoEntry>> {
        let (clause, values) = filter.clause();
        let mut stmt = self
            .conn
            .prepare(&format!("{} AND {} ORDER BY t.id", SELECT_ENTRY, clause))?;
        let entries = stmt
            .query_map(params_from_iter(values), entry_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(entries)
    }

    /// Overwrite every editable field of `todo`
    pub fn update_todo(&mut self, todo: &Todo) -> Result<()> {
        self.validate_todo(&todo.name, todo.project_id, todo.list_id)?;
        let changed = self.conn.execute(
            "UPDATE todos SET \
                project_id = ?1, list_id = ?2, name = ?3, description = ?4, priority = ?5, \
                status = ?6, color = ?7, done = ?8, due_date = ?9, updated_at = ?10 \
             WHERE id = ?11 AND deleted_at IS NULL",
            params![
                todo.project_id,
                todo.list_id,
                todo.name.trim(),
                todo.description,
                todo.priority.index(),
                todo.status.index(),
                todo.color,
                todo.done,
                todo.due_date.map(db::to_db_time),
                db::now(),
                todo.id,
            ],
        )?;
        if changed == 0 {
            return Err(not_found(todo.id));
        }
        debug!(id = todo.id, "updated todo");
        Ok(())
    }

    fn update_flags(&mut self, id: i64, status: Status, done: Option<bool>) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE todos SET status = ?1, done = COALESCE(?2, done), updated_at = ?3 \
             WHERE id = ?4 AND deleted_at IS NULL",
            params![status.index(), done, db::now(), id],
        )?;
        if changed == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    pub fn set_todo_status(&mut self, id: i64, status: Status) -> Result<()> {
        self.update_flags(id, status, None)
    }

    /// Done, with status `Done`
    pub fn mark_complete(&mut self, id: i64) -> Result<()> {
        self.update_flags(id, Status::Done, Some(true))
    }

    /// Not done, with status `Pending`
    pub fn mark_incomplete(&mut self, id: i64) -> Result<()> {
        self.update_flags(id, Status::Pending, Some(false))
    }

    /// Soft delete
    pub fn delete_todo(&mut self, id: i64) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE todos SET deleted_at = ?1 WHERE id = ?2 AND deleted_at IS NULL",
            params![db::now(), id],
        )?;
        if changed == 0 {
            return Err(not_found(id));
        }
        debug!(id, "deleted todo");
        Ok(())
    }

    /// Remove the row for good, including soft-deleted ones
    pub fn hard_delete_todo(&mut self, id: i64) -> Result<()> {
        let changed = self.conn.execute("DELETE FROM todos WHERE id = ?1", [id])?;
        if changed == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    pub fn count_todos(&self) -> Result<i64> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM todos WHERE deleted_at IS NULL",
            [],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    pub fn count_todos_by_status(&self, status: Status) -> Result<i64> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM todos WHERE deleted_at IS NULL AND status = ?1",
            [status.index()],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}
