//! Employee domain model.
//!
//! # Responsibility
//! - Define the employee record and its optional department membership.
//!
//! # Invariants
//! - `department` is an owned snapshot of the department row, not a live link.
//! - A referenced department must be persisted before the employee is saved.
//!   This is checked by the employee manager at write time, so an employee
//!   may hold an unsaved department in memory.
//! - Text fields mirror nullable TEXT columns; `None` is stored as NULL.

use super::department::Department;
use super::{EntityId, UNSAVED_ID};
use serde::{Deserialize, Serialize};

/// Person employed in (at most) one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// `UNSAVED_ID` until the first successful save.
    pub id: EntityId,
    pub name: Option<String>,
    pub surname: Option<String>,
    /// Full SQLite INTEGER range.
    pub salary: i64,
    /// `None` when the employee is not assigned to any department.
    pub department: Option<Department>,
}

impl Employee {
    /// Creates an unsaved employee without a department.
    pub fn new(name: impl Into<String>, surname: impl Into<String>, salary: i64) -> Self {
        Self {
            id: UNSAVED_ID,
            name: Some(name.into()),
            surname: Some(surname.into()),
            salary,
            department: None,
        }
    }

    /// Assigns a department snapshot and returns the updated employee.
    pub fn with_department(mut self, department: Department) -> Self {
        self.department = Some(department);
        self
    }

    /// Returns whether this employee has a store-generated id.
    pub fn is_persisted(&self) -> bool {
        self.id != UNSAVED_ID
    }

    /// Id of the referenced department, if any.
    pub fn department_id(&self) -> Option<EntityId> {
        self.department.as_ref().map(|department| department.id)
    }
}
