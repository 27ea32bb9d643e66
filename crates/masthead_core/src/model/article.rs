//! Article domain model.
//!
//! # Responsibility
//! - Define the join record linking one author to one magazine.
//!
//! # Invariants
//! - `title` length stays within [`ARTICLE_TITLE_MIN_CHARS`,
//!   `ARTICLE_TITLE_MAX_CHARS`] and never changes after construction.
//! - `author_id`/`magazine_id` are set once; the repository guarantees
//!   they resolve to registered entities.

use crate::model::author::AuthorId;
use crate::model::magazine::MagazineId;
use crate::model::ValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an article.
pub type ArticleId = Uuid;

/// Minimum article title length, in characters.
pub const ARTICLE_TITLE_MIN_CHARS: usize = 5;
/// Maximum article title length, in characters.
pub const ARTICLE_TITLE_MAX_CHARS: usize = 50;

/// A titled piece of work published by one author in one magazine.
///
/// Every field is fixed at construction; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ArticleRecord")]
pub struct Article {
    id: ArticleId,
    author_id: AuthorId,
    magazine_id: MagazineId,
    title: String,
}

impl Article {
    /// Creates an article record with a generated stable id.
    ///
    /// This only builds the value; linking it into the catalog is the
    /// repository's publish operation.
    ///
    /// # Errors
    /// - `ValidationError::TitleLength` when `title` is outside [5,50]
    ///   characters.
    pub fn new(
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), author_id, magazine_id, title)
    }

    /// Creates an article record with a caller-provided stable id.
    ///
    /// # Errors
    /// Same as [`Article::new`], plus `ValidationError::NilId` for the
    /// nil uuid.
    pub fn with_id(
        id: ArticleId,
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if id.is_nil() {
            return Err(ValidationError::NilId);
        }
        let title = title.into();
        let len = title.chars().count();
        if !(ARTICLE_TITLE_MIN_CHARS..=ARTICLE_TITLE_MAX_CHARS).contains(&len) {
            return Err(ValidationError::TitleLength { len });
        }
        Ok(Self {
            id,
            author_id,
            magazine_id,
            title,
        })
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn author_id(&self) -> AuthorId {
        self.author_id
    }

    pub fn magazine_id(&self) -> MagazineId {
        self.magazine_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Raw wire shape; conversion re-runs domain validation so invalid
/// persisted data is rejected instead of masked.
#[derive(Deserialize)]
struct ArticleRecord {
    id: ArticleId,
    author_id: AuthorId,
    magazine_id: MagazineId,
    title: String,
}

impl TryFrom<ArticleRecord> for Article {
    type Error = ValidationError;

    fn try_from(record: ArticleRecord) -> Result<Self, Self::Error> {
        Article::with_id(record.id, record.author_id, record.magazine_id, record.title)
    }
}
