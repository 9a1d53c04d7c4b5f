//! Employee persistence manager.
//!
//! # Responsibility
//! - Map `Employee` values to and from the `Employee` table.
//! - Resolve the owning department through an outer join on read.
//! - Reject writes that reference a department missing from the store.
//!
//! # Invariants
//! - An employee without a joined department row reads back with
//!   `department == None`, never a partially populated `Department`.
//! - The department existence check runs on every save, before any
//!   mutating statement. Check and write are not atomic.

use super::department_repo::{DEPARTMENT_COLUMNS, DEPARTMENT_TABLE};
use super::{ensure_table_ready, PersistenceManager, RepoError, RepoResult};
use crate::model::department::Department;
use crate::model::employee::Employee;
use crate::model::{EntityId, UNSAVED_ID};
use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension, Row};

const EMPLOYEE_SELECT_SQL: &str = "SELECT
    e.id,
    e.name,
    e.surname,
    e.salary,
    d.id AS department_id,
    d.name AS department_name,
    d.code AS department_code
FROM Employee e
LEFT JOIN Department d ON e.department = d.id";

const EMPLOYEE_TABLE: &str = "Employee";
const EMPLOYEE_COLUMNS: &[&str] = &["id", "name", "surname", "salary", "department"];

/// SQLite-backed employee manager.
pub struct EmployeeManager<'conn> {
    conn: &'conn Connection,
}

impl<'conn> EmployeeManager<'conn> {
    /// Constructs a manager after checking both `Employee` and `Department`
    /// table shapes.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, EMPLOYEE_TABLE, EMPLOYEE_COLUMNS)?;
        ensure_table_ready(conn, DEPARTMENT_TABLE, DEPARTMENT_COLUMNS)?;
        Ok(Self { conn })
    }

    /// Resolves the value bound to `Employee.department`.
    ///
    /// Fails with `DepartmentNotSaved` when the referenced department id is
    /// not present in the store.
    fn department_binding(&self, employee: &Employee) -> RepoResult<Option<EntityId>> {
        let Some(department_id) = employee.department_id() else {
            return Ok(None);
        };

        if !self.department_exists(department_id)? {
            warn!(
                "event=employee_save module=repo status=rejected reason=department_not_saved employee_id={} department_id={department_id}",
                employee.id
            );
            return Err(RepoError::DepartmentNotSaved { department_id });
        }

        Ok(Some(department_id))
    }

    fn department_exists(&self, department_id: EntityId) -> RepoResult<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(id) FROM Department WHERE id = ?1;",
            [department_id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    fn insert(&self, employee: &mut Employee, department: Option<EntityId>) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO Employee (name, surname, salary, department)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                employee.name.as_deref(),
                employee.surname.as_deref(),
                employee.salary,
                department,
            ],
        )?;
        employee.id = self.conn.last_insert_rowid();

        debug!(
            "event=employee_save module=repo status=ok op=insert id={}",
            employee.id
        );
        Ok(())
    }

    fn update(&self, employee: &Employee, department: Option<EntityId>) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE Employee
             SET
                name = ?1,
                surname = ?2,
                salary = ?3,
                department = ?4
             WHERE id = ?5;",
            params![
                employee.name.as_deref(),
                employee.surname.as_deref(),
                employee.salary,
                department,
                employee.id,
            ],
        )?;

        debug!(
            "event=employee_save module=repo status=ok op=update id={} changed={changed}",
            employee.id
        );
        Ok(())
    }
}

impl PersistenceManager<Employee> for EmployeeManager<'_> {
    fn get(&self, id: EntityId) -> RepoResult<Option<Employee>> {
        let employee = self
            .conn
            .query_row(
                &format!("{EMPLOYEE_SELECT_SQL} WHERE e.id = ?1;"),
                [id],
                parse_employee_row,
            )
            .optional()?;
        Ok(employee)
    }

    fn get_all(&self) -> RepoResult<Vec<Employee>> {
        let mut stmt = self.conn.prepare(&format!("{EMPLOYEE_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut employees = Vec::new();

        while let Some(row) = rows.next()? {
            employees.push(parse_employee_row(row)?);
        }

        Ok(employees)
    }

    fn save(&self, employee: &mut Employee) -> RepoResult<()> {
        let department = self.department_binding(employee)?;

        if employee.id == UNSAVED_ID {
            self.insert(employee, department)
        } else {
            self.update(employee, department)
        }
    }
}

fn parse_employee_row(row: &Row<'_>) -> rusqlite::Result<Employee> {
    let department = match row.get::<_, Option<EntityId>>("department_id")? {
        Some(id) => Some(Department {
            id,
            name: row.get("department_name")?,
            code: row.get("department_code")?,
        }),
        None => None,
    };

    Ok(Employee {
        id: row.get("id")?,
        name: row.get("name")?,
        surname: row.get("surname")?,
        // NULL salary reads as 0.
        salary: row.get::<_, Option<i64>>("salary")?.unwrap_or(0),
        department,
    })
}
