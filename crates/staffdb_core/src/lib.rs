//! Data-access layer for departments and employees.
//! Maps both entities to SQLite rows behind one generic persistence contract.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::department::Department;
pub use model::employee::Employee;
pub use model::{EntityId, UNSAVED_ID};
pub use repo::department_repo::DepartmentManager;
pub use repo::employee_repo::EmployeeManager;
pub use repo::{PersistenceManager, RepoError, RepoResult};
