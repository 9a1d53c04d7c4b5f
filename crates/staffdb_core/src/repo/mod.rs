//! Persistence contract and SQLite-backed managers.
//!
//! # Responsibility
//! - Define the generic `PersistenceManager<T>` contract.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `save` picks insert vs update solely from `id == UNSAVED_ID`.
//! - Missing rows are normal results (`None`, no-op update), never errors.
//! - Statements and cursors never outlive the method call that created them.

use crate::model::EntityId;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod department_repo;
pub mod employee_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Errors from persistence manager operations.
#[derive(Debug)]
pub enum RepoError {
    /// Statement failed to execute in the underlying store.
    Store(rusqlite::Error),
    /// Employee references a department that is not stored yet.
    DepartmentNotSaved { department_id: EntityId },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl RepoError {
    /// Returns whether this error is a business-rule violation rather than
    /// an infrastructure fault.
    pub fn is_referential_violation(&self) -> bool {
        matches!(self, Self::DepartmentNotSaved { .. })
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "staff store statement failed: {err}"),
            Self::DepartmentNotSaved { department_id } => write!(
                f,
                "department must be saved before assigning to an employee (department id {department_id})"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "persistence manager requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "persistence manager requires column `{column}` in table `{table}`"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::DepartmentNotSaved { .. } => None,
            Self::MissingRequiredTable(_) => None,
            Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Store(value)
    }
}

/// Generic get/get-all/save contract implemented once per entity type.
pub trait PersistenceManager<T> {
    /// Fetches one entity by primary key, `None` when absent.
    fn get(&self, id: EntityId) -> RepoResult<Option<T>>;

    /// Fetches all entities in the store's natural row order.
    fn get_all(&self) -> RepoResult<Vec<T>>;

    /// Saves entity state.
    ///
    /// Entities with `id == UNSAVED_ID` are inserted and receive the
    /// generated id. Other entities update the row with the same id; when no
    /// such row exists the call is a silent no-op.
    fn save(&self, entity: &mut T) -> RepoResult<()>;
}

/// Checks that `table` exists and has every column in `columns`.
pub(crate) fn ensure_table_ready(
    conn: &Connection,
    table: &'static str,
    columns: &[&'static str],
) -> RepoResult<()> {
    if !table_exists(conn, table)? {
        return Err(RepoError::MissingRequiredTable(table));
    }

    for &column in columns {
        if !table_has_column(conn, table, column)? {
            return Err(RepoError::MissingRequiredColumn { table, column });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1 COLLATE NOCASE
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        // SQLite identifiers are case-insensitive.
        if current.eq_ignore_ascii_case(column) {
            return Ok(true);
        }
    }
    Ok(false)
}
