//! Department persistence manager.
//!
//! # Responsibility
//! - Map `Department` values to and from the `Department` table.
//!
//! # Invariants
//! - Straight column mapping: `id`, `name`, `code`. No joins.
//! - Inserts never bind `id`; the store generates it.

use super::{ensure_table_ready, PersistenceManager, RepoResult};
use crate::model::department::Department;
use crate::model::{EntityId, UNSAVED_ID};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row};

const DEPARTMENT_SELECT_SQL: &str = "SELECT id, name, code FROM Department";

pub(crate) const DEPARTMENT_TABLE: &str = "Department";
pub(crate) const DEPARTMENT_COLUMNS: &[&str] = &["id", "name", "code"];

/// SQLite-backed department manager.
pub struct DepartmentManager<'conn> {
    conn: &'conn Connection,
}

impl<'conn> DepartmentManager<'conn> {
    /// Constructs a manager after checking the `Department` table shape.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, DEPARTMENT_TABLE, DEPARTMENT_COLUMNS)?;
        Ok(Self { conn })
    }

    fn insert(&self, department: &mut Department) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO Department (name, code) VALUES (?1, ?2);",
            params![department.name.as_deref(), department.code.as_deref()],
        )?;
        department.id = self.conn.last_insert_rowid();

        debug!(
            "event=department_save module=repo status=ok op=insert id={}",
            department.id
        );
        Ok(())
    }

    fn update(&self, department: &Department) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE Department SET name = ?1, code = ?2 WHERE id = ?3;",
            params![
                department.name.as_deref(),
                department.code.as_deref(),
                department.id,
            ],
        )?;

        debug!(
            "event=department_save module=repo status=ok op=update id={} changed={changed}",
            department.id
        );
        Ok(())
    }
}

impl PersistenceManager<Department> for DepartmentManager<'_> {
    fn get(&self, id: EntityId) -> RepoResult<Option<Department>> {
        let department = self
            .conn
            .query_row(
                &format!("{DEPARTMENT_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_department_row,
            )
            .optional()?;
        Ok(department)
    }

    fn get_all(&self) -> RepoResult<Vec<Department>> {
        let mut stmt = self.conn.prepare(&format!("{DEPARTMENT_SELECT_SQL};"))?;
        let departments = stmt
            .query_map([], parse_department_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(departments)
    }

    fn save(&self, department: &mut Department) -> RepoResult<()> {
        if department.id == UNSAVED_ID {
            self.insert(department)
        } else {
            self.update(department)
        }
    }
}

fn parse_department_row(row: &Row<'_>) -> rusqlite::Result<Department> {
    Ok(Department {
        id: row.get("id")?,
        name: row.get("name")?,
        code: row.get("code")?,
    })
}
