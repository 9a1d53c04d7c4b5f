//! SQLite storage bootstrap and schema setup.
//!
//! # Responsibility
//! - Open and configure SQLite connections for staff persistence.
//! - Create the `Department`/`Employee` schema on fresh databases.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - Managers may also be used on connections whose schema was created
//!   externally; they only require the tables and columns to exist.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type BootstrapResult<T> = Result<T, BootstrapError>;

/// Failure while preparing a connection for the persistence managers.
#[derive(Debug)]
pub enum BootstrapError {
    /// Opening the database or applying connection pragmas failed.
    Connection(rusqlite::Error),
    /// A bundled migration script failed; nothing from the batch is kept.
    Migration {
        version: u32,
        source: rusqlite::Error,
    },
    /// The database was written by a newer schema than this crate knows.
    SchemaTooNew { found: u32, supported: u32 },
}

impl Display for BootstrapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connection(err) => write!(f, "failed to prepare staff database: {err}"),
            Self::Migration { version, source } => {
                write!(f, "staff schema migration {version} failed: {source}")
            }
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "staff schema version {found} is newer than supported {supported}"
            ),
        }
    }
}

impl Error for BootstrapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Connection(err) => Some(err),
            Self::Migration { source, .. } => Some(source),
            Self::SchemaTooNew { .. } => None,
        }
    }
}
