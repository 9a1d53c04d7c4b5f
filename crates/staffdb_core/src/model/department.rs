//! Department domain model.
//!
//! # Invariants
//! - Department has no foreign relationships.
//! - Uniqueness of `id` is enforced by the store, not by this type.
//! - `name` and `code` mirror nullable TEXT columns; `None` is stored as NULL.

use super::{EntityId, UNSAVED_ID};
use serde::{Deserialize, Serialize};

/// Organizational unit that employees may belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// `UNSAVED_ID` until the first successful save.
    pub id: EntityId,
    pub name: Option<String>,
    /// Short code such as `DEV`.
    pub code: Option<String>,
}

impl Department {
    /// Creates an unsaved department.
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: UNSAVED_ID,
            name: Some(name.into()),
            code: Some(code.into()),
        }
    }

    /// Returns whether this department has a store-generated id.
    pub fn is_persisted(&self) -> bool {
        self.id != UNSAVED_ID
    }
}
