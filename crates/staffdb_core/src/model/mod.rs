//! Domain model for department/employee records.
//!
//! # Responsibility
//! - Define the plain in-memory entities mapped to SQL rows.
//! - Carry the shared identity convention used by persistence managers.
//!
//! # Invariants
//! - `id == UNSAVED_ID` means the entity has never been persisted.
//! - Any other `id` is a store-generated primary key.

pub mod department;
pub mod employee;

/// Store-generated primary key shared by all entities.
pub type EntityId = i64;

/// Sentinel id carried by entities that were never saved.
pub const UNSAVED_ID: EntityId = 0;
