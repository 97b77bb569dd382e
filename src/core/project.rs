//! Projects and todo lists
//!
//! Both are a named, coloured bucket for todos and share one record shape.
//! Deletes are soft: rows get a `deleted_at` stamp and drop out of every
//! query.

use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::Serialize;
use tracing::debug;

use crate::core::db::{self, Database};
use crate::error::{Result, TuidooError};

/// Which bucket table a [`Group`] lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Project,
    List,
}

impl GroupKind {
    fn table(&self) -> &'static str {
        match self {
            GroupKind::Project => "projects",
            GroupKind::List => "todo_lists",
        }
    }

    /// Lowercase noun used in messages
    pub fn label(&self) -> &'static str {
        match self {
            GroupKind::Project => "project",
            GroupKind::List => "list",
        }
    }
}

/// A project or a todo list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub color: String,
}

fn group_from_row(row: &Row<'_>) -> rusqlite::Result<Group> {
    Ok(Group {
        id: row.get(0)?,
        name: row.get(1)?,
        color: row.get(2)?,
    })
}

fn validate_name(kind: GroupKind, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(TuidooError::InvalidInput(format!(
            "The {} name cannot be empty",
            kind.label()
        )));
    }
    Ok(())
}

pub(crate) fn insert_group(
    conn: &Connection,
    kind: GroupKind,
    name: &str,
    color: &str,
) -> rusqlite::Result<i64> {
    let now = db::now();
    conn.execute(
        &format!(
            "INSERT INTO {} (name, color, created_at, updated_at) VALUES (?1, ?2, ?3, ?3)",
            kind.table()
        ),
        params![name.trim(), color, now],
    )?;
    Ok(conn.last_insert_rowid())
}

pub(crate) fn live_ids(conn: &Connection, kind: GroupKind) -> rusqlite::Result<Vec<i64>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT id FROM {} WHERE deleted_at IS NULL ORDER BY id",
        kind.table()
    ))?;
    let ids = stmt
        .query_map([], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<i64>>>()?;
    Ok(ids)
}

impl Database {
    pub fn create_group(&mut self, kind: GroupKind, name: &str, color: &str) -> Result<Group> {
        validate_name(kind, name)?;
        let id = insert_group(&self.conn, kind, name, color)?;
        debug!(kind = kind.label(), id, "created");
        self.group(kind, id)
    }

    /// Fetch one live row, `NotFound` otherwise
    pub fn group(&self, kind: GroupKind, id: i64) -> Result<Group> {
        self.conn
            .query_row(
                &format!(
                    "SELECT id, name, color FROM {} WHERE id = ?1 AND deleted_at IS NULL",
                    kind.table()
                ),
                [id],
                group_from_row,
            )
            .optional()?
            .ok_or_else(|| {
                TuidooError::NotFound(format!("{} with ID {} not found", kind.label(), id))
            })
    }

    pub fn groups(&self, kind: GroupKind) -> Result<Vec<Group>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT id, name, color FROM {} WHERE deleted_at IS NULL ORDER BY id",
            kind.table()
        ))?;
        let groups = stmt
            .query_map([], group_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(groups)
    }

    /// Case-insensitive substring match on the name
    pub fn search_groups(&self, kind: GroupKind, query: &str) -> Result<Vec<Group>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT id, name, color FROM {} \
             WHERE deleted_at IS NULL AND name LIKE '%' || ?1 || '%' ORDER BY id",
            kind.table()
        ))?;
        let groups = stmt
            .query_map([query], group_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(groups)
    }

    /// Resolve a command-line reference: a numeric ID or an exact name
    pub fn resolve_group(&self, kind: GroupKind, reference: &str) -> Result<Group> {
        if let Ok(id) = reference.trim().parse::<i64>() {
            return self.group(kind, id);
        }

        self.conn
            .query_row(
                &format!(
                    "SELECT id, name, color FROM {} \
                     WHERE deleted_at IS NULL AND name = ?1 COLLATE NOCASE ORDER BY id LIMIT 1",
                    kind.table()
                ),
                [reference.trim()],
                group_from_row,
            )
            .optional()?
            .ok_or_else(|| {
                TuidooError::NotFound(format!("{} '{}' not found", kind.label(), reference))
            })
    }

    pub fn update_group(&mut self, kind: GroupKind, group: &Group) -> Result<()> {
        validate_name(kind, &group.name)?;
        let changed = self.conn.execute(
            &format!(
                "UPDATE {} SET name = ?1, color = ?2, updated_at = ?3 \
                 WHERE id = ?4 AND deleted_at IS NULL",
                kind.table()
            ),
            params![group.name.trim(), group.color, db::now(), group.id],
        )?;
        if changed == 0 {
            return Err(TuidooError::NotFound(format!(
                "{} with ID {} not found",
                kind.label(),
                group.id
            )));
        }
        Ok(())
    }

    /// Soft delete.
    ///
    /// A deleted project takes its todos with it; a deleted list only
    /// detaches them.
    pub fn delete_group(&mut self, kind: GroupKind, id: i64) -> Result<()> {
        let now = db::now();
        let tx = self.conn.transaction()?;
        let changed = tx.execute(
            &format!(
                "UPDATE {} SET deleted_at = ?1 WHERE id = ?2 AND deleted_at IS NULL",
                kind.table()
            ),
            params![now, id],
        )?;
        if changed == 0 {
            return Err(TuidooError::NotFound(format!(
                "{} with ID {} not found",
                kind.label(),
                id
            )));
        }

        match kind {
            GroupKind::Project => tx.execute(
                "UPDATE todos SET deleted_at = ?1 WHERE project_id = ?2 AND deleted_at IS NULL",
                params![now, id],
            )?,
            GroupKind::List => tx.execute(
                "UPDATE todos SET list_id = NULL, updated_at = ?1 WHERE list_id = ?2",
                params![now, id],
            )?,
        };
        tx.commit()?;
        debug!(kind = kind.label(), id, "deleted");
        Ok(())
    }
}
