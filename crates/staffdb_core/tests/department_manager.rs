mod common;

use common::{assert_department_value, assert_sql_has_result, row_count, seeded_connection};
use staffdb_core::{Department, DepartmentManager, PersistenceManager, UNSAVED_ID};

#[test]
fn get_department_by_id() {
    let conn = seeded_connection();
    let manager = DepartmentManager::try_new(&conn).unwrap();

    let department = manager.get(1).unwrap().unwrap();
    assert_department_value(&department, 1, "Development", "DEV");
}

#[test]
fn missing_department_returns_none() {
    let conn = seeded_connection();
    let manager = DepartmentManager::try_new(&conn).unwrap();

    assert!(manager.get(404).unwrap().is_none());
}

#[test]
fn get_all_departments_in_natural_order() {
    let conn = seeded_connection();
    let manager = DepartmentManager::try_new(&conn).unwrap();

    let departments = manager.get_all().unwrap();
    assert_eq!(departments.len(), 2);
    assert_department_value(&departments[0], 1, "Development", "DEV");
    assert_department_value(&departments[1], 2, "Operations", "OPS");
}

#[test]
fn get_all_on_empty_table_returns_empty_vec() {
    let conn = seeded_connection();
    conn.execute_batch("DELETE FROM Employee; DELETE FROM Department;")
        .unwrap();
    let manager = DepartmentManager::try_new(&conn).unwrap();

    assert_eq!(manager.get_all().unwrap(), Vec::<Department>::new());
}

#[test]
fn save_new_department_inserts_row() {
    let conn = seeded_connection();
    let manager = DepartmentManager::try_new(&conn).unwrap();

    let mut department = Department::new("Marketing", "MRK");
    manager.save(&mut department).unwrap();

    assert_sql_has_result(
        &conn,
        "SELECT * FROM Department WHERE id = 3 AND name = 'Marketing' AND code = 'MRK';",
    );
}

#[test]
fn save_new_department_sets_generated_id() {
    let conn = seeded_connection();
    let manager = DepartmentManager::try_new(&conn).unwrap();

    let mut department = Department::new("Marketing", "MRK");
    assert!(!department.is_persisted());
    manager.save(&mut department).unwrap();

    assert_eq!(department.id, 3);
    assert!(department.is_persisted());
}

#[test]
fn saved_department_roundtrips_through_get() {
    let conn = seeded_connection();
    let manager = DepartmentManager::try_new(&conn).unwrap();

    let mut department = Department::new("Marketing", "MRK");
    manager.save(&mut department).unwrap();

    let loaded = manager.get(department.id).unwrap().unwrap();
    assert_eq!(loaded, department);
}

#[test]
fn save_updated_department() {
    let conn = seeded_connection();
    let manager = DepartmentManager::try_new(&conn).unwrap();

    let mut department = manager.get(1).unwrap().unwrap();
    department.name = Some("Engineering".to_string());
    department.code = Some("ENG".to_string());
    manager.save(&mut department).unwrap();

    assert_eq!(department.id, 1);
    assert_sql_has_result(
        &conn,
        "SELECT * FROM Department WHERE id = 1 AND name = 'Engineering' AND code = 'ENG';",
    );
    assert_eq!(row_count(&conn, "Department"), 2);
}

#[test]
fn saving_unchanged_department_twice_keeps_row_and_id() {
    let conn = seeded_connection();
    let manager = DepartmentManager::try_new(&conn).unwrap();

    let mut department = manager.get(2).unwrap().unwrap();
    manager.save(&mut department).unwrap();
    manager.save(&mut department).unwrap();

    assert_eq!(department.id, 2);
    assert_eq!(manager.get(2).unwrap().unwrap(), department);
    assert_eq!(row_count(&conn, "Department"), 2);
}

#[test]
fn update_of_missing_department_is_silent_noop() {
    let conn = seeded_connection();
    let manager = DepartmentManager::try_new(&conn).unwrap();

    let mut ghost = Department::new("Ghost", "GST");
    ghost.id = 404;
    manager.save(&mut ghost).unwrap();

    assert_eq!(ghost.id, 404);
    assert!(manager.get(404).unwrap().is_none());
    assert_eq!(row_count(&conn, "Department"), 2);
}

#[test]
fn new_department_starts_unsaved() {
    let department = Department::new("Marketing", "MRK");
    assert_eq!(department.id, UNSAVED_ID);
}

#[test]
fn null_text_columns_read_as_none() {
    let conn = seeded_connection();
    conn.execute(
        "INSERT INTO Department (id, name, code) VALUES (3, 'Support', NULL);",
        [],
    )
    .unwrap();
    let manager = DepartmentManager::try_new(&conn).unwrap();

    let department = manager.get(3).unwrap().unwrap();
    assert_eq!(department.name.as_deref(), Some("Support"));
    assert_eq!(department.code, None);
    assert_eq!(manager.get_all().unwrap().len(), 3);
}

#[test]
fn none_text_fields_are_stored_as_null() {
    let conn = seeded_connection();
    let manager = DepartmentManager::try_new(&conn).unwrap();

    let mut department = manager.get(2).unwrap().unwrap();
    department.code = None;
    manager.save(&mut department).unwrap();

    assert_sql_has_result(
        &conn,
        "SELECT * FROM Department WHERE id = 2 AND name = 'Operations' AND code IS NULL;",
    );
    assert_eq!(manager.get(2).unwrap().unwrap(), department);
}
