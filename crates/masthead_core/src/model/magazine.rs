//! Magazine domain model.
//!
//! # Responsibility
//! - Define the publication venue record articles are published into.
//! - Keep `name`/`category` mutations behind validated setters.
//!
//! # Invariants
//! - `name` length stays within [`MAGAZINE_NAME_MIN_CHARS`,
//!   `MAGAZINE_NAME_MAX_CHARS`] for the life of the value.
//! - `category` is never empty.
//! - A rejected setter leaves the prior value unchanged.

use crate::model::ValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a magazine.
pub type MagazineId = Uuid;

/// Minimum magazine name length, in characters.
pub const MAGAZINE_NAME_MIN_CHARS: usize = 2;
/// Maximum magazine name length, in characters.
pub const MAGAZINE_NAME_MAX_CHARS: usize = 16;

/// A publication venue with a topic category.
///
/// Unlike [`crate::model::author::Author`], both text fields stay mutable
/// for the life of the magazine; every assignment re-validates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MagazineRecord")]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
}

impl Magazine {
    /// Creates a magazine with a generated stable id.
    ///
    /// # Errors
    /// - `ValidationError::MagazineNameLength` when `name` is outside
    ///   [2,16] characters.
    /// - `ValidationError::EmptyCategory` when `category` is empty.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), name, category)
    }

    /// Creates a magazine with a caller-provided stable id.
    ///
    /// # Errors
    /// Same as [`Magazine::new`], plus `ValidationError::NilId` for the
    /// nil uuid.
    pub fn with_id(
        id: MagazineId,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if id.is_nil() {
            return Err(ValidationError::NilId);
        }
        let name = name.into();
        validate_name(&name)?;
        let category = category.into();
        validate_category(&category)?;
        Ok(Self { id, name, category })
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Renames the magazine, applying the same rule as construction.
    ///
    /// # Errors
    /// - `ValidationError::MagazineNameLength`; the current name is kept.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Changes the topic category, applying the same rule as construction.
    ///
    /// # Errors
    /// - `ValidationError::EmptyCategory`; the current category is kept.
    pub fn set_category(&mut self, category: impl Into<String>) -> Result<(), ValidationError> {
        let category = category.into();
        validate_category(&category)?;
        self.category = category;
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if !(MAGAZINE_NAME_MIN_CHARS..=MAGAZINE_NAME_MAX_CHARS).contains(&len) {
        return Err(ValidationError::MagazineNameLength { len });
    }
    Ok(())
}

fn validate_category(category: &str) -> Result<(), ValidationError> {
    if category.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}

/// Raw wire shape; conversion re-runs domain validation so invalid
/// persisted data is rejected instead of masked.
#[derive(Deserialize)]
struct MagazineRecord {
    id: MagazineId,
    name: String,
    category: String,
}

impl TryFrom<MagazineRecord> for Magazine {
    type Error = ValidationError;

    fn try_from(record: MagazineRecord) -> Result<Self, Self::Error> {
        Magazine::with_id(record.id, record.name, record.category)
    }
}
