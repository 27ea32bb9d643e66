//! Domain model for the author/magazine/article catalog.
//!
//! # Responsibility
//! - Define the validated entity records used by core business logic.
//! - Own every field-level constraint in one `ValidationError` taxonomy.
//!
//! # Invariants
//! - Every entity is identified by a stable, non-nil `Uuid`.
//! - A model value that exists has passed validation; there is no
//!   partially-valid state to observe.
//! - Immutable fields (`Author::name`, `Article::title`) expose no setter.

pub mod article;
pub mod author;
pub mod magazine;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Field-level constraint violation for any catalog entity.
///
/// Raised before any registry side effect, so a failed construction or
/// mutation leaves no observable state behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Author name is empty.
    EmptyAuthorName,
    /// Magazine name is outside the allowed character range.
    MagazineNameLength { len: usize },
    /// Magazine category is empty.
    EmptyCategory,
    /// Article title is outside the allowed character range.
    TitleLength { len: usize },
    /// Entity id is the nil uuid.
    NilId,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAuthorName => write!(f, "author name cannot be empty"),
            Self::MagazineNameLength { len } => write!(
                f,
                "magazine name must be {} to {} characters, got {len}",
                magazine::MAGAZINE_NAME_MIN_CHARS,
                magazine::MAGAZINE_NAME_MAX_CHARS
            ),
            Self::EmptyCategory => write!(f, "magazine category cannot be empty"),
            Self::TitleLength { len } => write!(
                f,
                "article title must be {} to {} characters, got {len}",
                article::ARTICLE_TITLE_MIN_CHARS,
                article::ARTICLE_TITLE_MAX_CHARS
            ),
            Self::NilId => write!(f, "entity id cannot be the nil uuid"),
        }
    }
}

impl Error for ValidationError {}
