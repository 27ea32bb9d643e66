//! Author domain model.
//!
//! # Responsibility
//! - Define the writer identity record referenced by articles.
//!
//! # Invariants
//! - `name` is non-empty and never changes after construction.
//! - `id` is stable and never reused for another author.

use crate::model::ValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an author.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type AuthorId = Uuid;

/// A writer registered in the catalog.
///
/// `name` is intentionally private with no setter: immutability is a
/// compile-time property, not a runtime check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AuthorRecord")]
pub struct Author {
    id: AuthorId,
    name: String,
}

impl Author {
    /// Creates an author with a generated stable id.
    ///
    /// # Errors
    /// - `ValidationError::EmptyAuthorName` when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates an author with a caller-provided stable id.
    ///
    /// Used by import paths and tests where identity already exists.
    ///
    /// # Errors
    /// - `ValidationError::NilId` when `id` is the nil uuid.
    /// - `ValidationError::EmptyAuthorName` when `name` is empty.
    pub fn with_id(id: AuthorId, name: impl Into<String>) -> Result<Self, ValidationError> {
        if id.is_nil() {
            return Err(ValidationError::NilId);
        }
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyAuthorName);
        }
        Ok(Self { id, name })
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Raw wire shape; conversion re-runs domain validation so invalid
/// persisted data is rejected instead of masked.
#[derive(Deserialize)]
struct AuthorRecord {
    id: AuthorId,
    name: String,
}

impl TryFrom<AuthorRecord> for Author {
    type Error = ValidationError;

    fn try_from(record: AuthorRecord) -> Result<Self, Self::Error> {
        Author::with_id(record.id, record.name)
    }
}
