#![allow(dead_code)]

use rusqlite::Connection;
use staffdb_core::db::open_db_in_memory;
use staffdb_core::{Department, Employee, EntityId};

const FIXTURE_SQL: &str = "
INSERT INTO Department (id, name, code) VALUES (1, 'Development', 'DEV');
INSERT INTO Department (id, name, code) VALUES (2, 'Operations', 'OPS');
INSERT INTO Employee (id, name, surname, salary, department)
    VALUES (1, 'Janko', 'Hrasko', 1000, 1);
INSERT INTO Employee (id, name, surname, salary, department)
    VALUES (2, 'Jozko', 'Mrkvicka', 1200, NULL);
";

/// Migrated in-memory database seeded with two departments and two employees.
pub fn seeded_connection() -> Connection {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(FIXTURE_SQL).unwrap();
    conn
}

pub fn assert_sql_has_result(conn: &Connection, sql: &str) {
    let mut stmt = conn.prepare(sql).unwrap();
    let mut rows = stmt.query([]).unwrap();
    assert!(rows.next().unwrap().is_some(), "query returned no rows: {sql}");
}

pub fn row_count(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table};"), [], |row| {
        row.get(0)
    })
    .unwrap()
}

pub fn assert_department_value(department: &Department, id: EntityId, name: &str, code: &str) {
    assert_eq!(department.id, id);
    assert_eq!(department.name.as_deref(), Some(name));
    assert_eq!(department.code.as_deref(), Some(code));
}

pub fn assert_employee_value(
    employee: &Employee,
    id: EntityId,
    name: &str,
    surname: &str,
    salary: i64,
) {
    assert_eq!(employee.id, id);
    assert_eq!(employee.name.as_deref(), Some(name));
    assert_eq!(employee.surname.as_deref(), Some(surname));
    assert_eq!(employee.salary, salary);
}
