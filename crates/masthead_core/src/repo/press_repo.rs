//! Press repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable registration/publish/query APIs over the catalog.
//! - Act as the single owner of the association graph; entities refer to
//!   each other by id only.
//!
//! # Invariants
//! - `publish_article` is the only path that creates an article, so an
//!   article visible anywhere is linked to a registered author and a
//!   registered magazine everywhere.
//! - List queries preserve registration/publish order.

use crate::model::article::{Article, ArticleId};
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::model::ValidationError;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Registry error for catalog registration and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    AuthorNotFound(AuthorId),
    MagazineNotFound(MagazineId),
    DuplicateAuthor(AuthorId),
    DuplicateMagazine(MagazineId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::AuthorNotFound(id) => write!(f, "author not found: {id}"),
            Self::MagazineNotFound(id) => write!(f, "magazine not found: {id}"),
            Self::DuplicateAuthor(id) => write!(f, "author already registered: {id}"),
            Self::DuplicateMagazine(id) => write!(f, "magazine already registered: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Query options for listing articles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleListQuery {
    /// Restrict to one author's articles.
    pub author: Option<AuthorId>,
    /// Restrict to one magazine's articles.
    pub magazine: Option<MagazineId>,
}

impl ArticleListQuery {
    /// All articles written by `author_id`, publish order.
    pub fn by_author(author_id: AuthorId) -> Self {
        Self {
            author: Some(author_id),
            magazine: None,
        }
    }

    /// All articles published in `magazine_id`, publish order.
    pub fn in_magazine(magazine_id: MagazineId) -> Self {
        Self {
            author: None,
            magazine: Some(magazine_id),
        }
    }
}

/// Repository interface for catalog registration and retrieval.
pub trait PressRepository {
    /// Registers an author; ids must be unique within the repository.
    fn add_author(&mut self, author: Author) -> RepoResult<AuthorId>;
    /// Registers a magazine; registration order backs `list_magazines`.
    fn add_magazine(&mut self, magazine: Magazine) -> RepoResult<MagazineId>;
    /// Writes back a mutated magazine (`set_name`/`set_category`).
    ///
    /// Authors and articles are immutable and have no update path.
    fn update_magazine(&mut self, magazine: &Magazine) -> RepoResult<()>;
    /// Creates an article linking `author_id` to `magazine_id`.
    ///
    /// Validation and parent resolution happen before the append, so a
    /// failed publish leaves no partially-linked state.
    fn publish_article(
        &mut self,
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: &str,
    ) -> RepoResult<ArticleId>;
    fn get_author(&self, id: AuthorId) -> Option<Author>;
    fn get_magazine(&self, id: MagazineId) -> Option<Magazine>;
    fn get_article(&self, id: ArticleId) -> Option<Article>;
    /// All authors, registration order.
    fn list_authors(&self) -> Vec<Author>;
    /// All magazines, registration order.
    fn list_magazines(&self) -> Vec<Magazine>;
    /// Articles matching `query`, publish order.
    fn list_articles(&self, query: &ArticleListQuery) -> Vec<Article>;
}

/// In-memory catalog registry.
///
/// Starts empty; there is no teardown. Tests construct a fresh value per
/// case instead of sharing process-wide state.
#[derive(Debug, Default)]
pub struct MemoryPressRepository {
    authors: Vec<Author>,
    magazines: Vec<Magazine>,
    articles: Vec<Article>,
}

impl MemoryPressRepository {
    pub fn new() -> Self {
        info!("event=registry_open module=repo status=ok mode=memory");
        Self::default()
    }
}

impl PressRepository for MemoryPressRepository {
    fn add_author(&mut self, author: Author) -> RepoResult<AuthorId> {
        if self.authors.iter().any(|known| known.id() == author.id()) {
            return Err(RepoError::DuplicateAuthor(author.id()));
        }
        let id = author.id();
        self.authors.push(author);
        Ok(id)
    }

    fn add_magazine(&mut self, magazine: Magazine) -> RepoResult<MagazineId> {
        if self
            .magazines
            .iter()
            .any(|known| known.id() == magazine.id())
        {
            return Err(RepoError::DuplicateMagazine(magazine.id()));
        }
        let id = magazine.id();
        self.magazines.push(magazine);
        Ok(id)
    }

    fn update_magazine(&mut self, magazine: &Magazine) -> RepoResult<()> {
        let slot = self
            .magazines
            .iter_mut()
            .find(|known| known.id() == magazine.id())
            .ok_or(RepoError::MagazineNotFound(magazine.id()))?;
        *slot = magazine.clone();
        Ok(())
    }

    fn publish_article(
        &mut self,
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: &str,
    ) -> RepoResult<ArticleId> {
        if !self.authors.iter().any(|author| author.id() == author_id) {
            return Err(RepoError::AuthorNotFound(author_id));
        }
        if !self
            .magazines
            .iter()
            .any(|magazine| magazine.id() == magazine_id)
        {
            return Err(RepoError::MagazineNotFound(magazine_id));
        }
        let article = Article::new(author_id, magazine_id, title)?;
        let id = article.id();
        self.articles.push(article);
        Ok(id)
    }

    fn get_author(&self, id: AuthorId) -> Option<Author> {
        self.authors.iter().find(|author| author.id() == id).cloned()
    }

    fn get_magazine(&self, id: MagazineId) -> Option<Magazine> {
        self.magazines
            .iter()
            .find(|magazine| magazine.id() == id)
            .cloned()
    }

    fn get_article(&self, id: ArticleId) -> Option<Article> {
        self.articles
            .iter()
            .find(|article| article.id() == id)
            .cloned()
    }

    fn list_authors(&self) -> Vec<Author> {
        self.authors.clone()
    }

    fn list_magazines(&self) -> Vec<Magazine> {
        self.magazines.clone()
    }

    fn list_articles(&self, query: &ArticleListQuery) -> Vec<Article> {
        self.articles
            .iter()
            .filter(|article| match query.author {
                Some(author_id) => article.author_id() == author_id,
                None => true,
            })
            .filter(|article| match query.magazine {
                Some(magazine_id) => article.magazine_id() == magazine_id,
                None => true,
            })
            .cloned()
            .collect()
    }
}
