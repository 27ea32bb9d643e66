//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide register/launch/publish entry points for core callers.
//! - Compute the derived views over the association graph.
//!
//! # Invariants
//! - Service APIs never bypass repository validation contracts.
//! - Deduplicated views dedup by entity id, first-seen order.
//! - Queries addressed to an unregistered id fail with the matching
//!   not-found error instead of returning an empty view.

use crate::model::article::{Article, ArticleId};
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::repo::press_repo::{ArticleListQuery, PressRepository, RepoError, RepoResult};

/// An author counts as a regular contributor to a magazine above this
/// many articles. Fixed domain constant, not configurable.
pub const REGULAR_CONTRIBUTOR_MIN_ARTICLES: usize = 2;

/// Use-case service wrapper over a [`PressRepository`].
pub struct PressService<R: PressRepository> {
    repo: R,
}

impl<R: PressRepository> PressService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new author by name.
    ///
    /// # Contract
    /// - Validates the name (non-empty) before any registry change.
    /// - Returns the new stable author id.
    pub fn register_author(&mut self, name: &str) -> RepoResult<AuthorId> {
        let author = Author::new(name)?;
        self.repo.add_author(author)
    }

    /// Launches a new magazine with a name and topic category.
    pub fn launch_magazine(&mut self, name: &str, category: &str) -> RepoResult<MagazineId> {
        let magazine = Magazine::new(name, category)?;
        self.repo.add_magazine(magazine)
    }

    /// Publishes an article by `author_id` in `magazine_id`.
    ///
    /// The one-call convenience over the repository's atomic publish:
    /// after it returns, the article is visible in the author's sequence,
    /// the magazine's sequence and the article registry.
    pub fn publish_article(
        &mut self,
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: &str,
    ) -> RepoResult<ArticleId> {
        self.repo.publish_article(author_id, magazine_id, title)
    }

    /// Renames a magazine, re-validating the name rule.
    pub fn rename_magazine(&mut self, id: MagazineId, name: &str) -> RepoResult<()> {
        let mut magazine = self
            .repo
            .get_magazine(id)
            .ok_or(RepoError::MagazineNotFound(id))?;
        magazine.set_name(name)?;
        self.repo.update_magazine(&magazine)
    }

    /// Moves a magazine to a different topic category.
    pub fn recategorize_magazine(&mut self, id: MagazineId, category: &str) -> RepoResult<()> {
        let mut magazine = self
            .repo
            .get_magazine(id)
            .ok_or(RepoError::MagazineNotFound(id))?;
        magazine.set_category(category)?;
        self.repo.update_magazine(&magazine)
    }

    /// The author's articles, publish order.
    pub fn articles_by(&self, author_id: AuthorId) -> RepoResult<Vec<Article>> {
        self.require_author(author_id)?;
        Ok(self.repo.list_articles(&ArticleListQuery::by_author(author_id)))
    }

    /// Distinct magazines the author has published in, each exactly once.
    pub fn magazines_of(&self, author_id: AuthorId) -> RepoResult<Vec<Magazine>> {
        let articles = self.articles_by(author_id)?;
        let mut magazines: Vec<Magazine> = Vec::new();
        for article in &articles {
            if magazines
                .iter()
                .any(|magazine| magazine.id() == article.magazine_id())
            {
                continue;
            }
            magazines.push(self.require_magazine(article.magazine_id())?);
        }
        Ok(magazines)
    }

    /// Distinct magazine categories across the author's articles.
    ///
    /// Empty when the author has not published anything.
    pub fn topic_areas(&self, author_id: AuthorId) -> RepoResult<Vec<String>> {
        let magazines = self.magazines_of(author_id)?;
        let mut areas: Vec<String> = Vec::new();
        for magazine in &magazines {
            if !areas.iter().any(|area| area == magazine.category()) {
                areas.push(magazine.category().to_string());
            }
        }
        Ok(areas)
    }

    /// The magazine's articles, publish order.
    pub fn articles_in(&self, magazine_id: MagazineId) -> RepoResult<Vec<Article>> {
        self.require_magazine(magazine_id)?;
        Ok(self
            .repo
            .list_articles(&ArticleListQuery::in_magazine(magazine_id)))
    }

    /// Ordered titles of the magazine's articles; empty when none.
    pub fn article_titles(&self, magazine_id: MagazineId) -> RepoResult<Vec<String>> {
        let articles = self.articles_in(magazine_id)?;
        Ok(articles
            .iter()
            .map(|article| article.title().to_string())
            .collect())
    }

    /// Distinct authors who have published in the magazine.
    pub fn contributors(&self, magazine_id: MagazineId) -> RepoResult<Vec<Author>> {
        let counts = self.contribution_counts(magazine_id)?;
        counts
            .into_iter()
            .map(|(author_id, _)| self.require_author_record(author_id))
            .collect()
    }

    /// Authors with strictly more than
    /// [`REGULAR_CONTRIBUTOR_MIN_ARTICLES`] articles in the magazine.
    pub fn contributing_authors(&self, magazine_id: MagazineId) -> RepoResult<Vec<Author>> {
        let counts = self.contribution_counts(magazine_id)?;
        counts
            .into_iter()
            .filter(|(_, count)| *count > REGULAR_CONTRIBUTOR_MIN_ARTICLES)
            .map(|(author_id, _)| self.require_author_record(author_id))
            .collect()
    }

    /// The magazine with the most articles across the whole registry.
    ///
    /// `None` when no magazines exist. Ties keep the first-registered
    /// magazine: the scan only replaces on a strictly greater count.
    pub fn top_publisher(&self) -> Option<Magazine> {
        let mut best: Option<(Magazine, usize)> = None;
        for magazine in self.repo.list_magazines() {
            let count = self
                .repo
                .list_articles(&ArticleListQuery::in_magazine(magazine.id()))
                .len();
            let replaces = match &best {
                Some((_, best_count)) => count > *best_count,
                None => true,
            };
            if replaces {
                best = Some((magazine, count));
            }
        }
        best.map(|(magazine, _)| magazine)
    }

    /// Per-author article counts in one magazine, first-seen order.
    fn contribution_counts(&self, magazine_id: MagazineId) -> RepoResult<Vec<(AuthorId, usize)>> {
        let articles = self.articles_in(magazine_id)?;
        let mut counts: Vec<(AuthorId, usize)> = Vec::new();
        for article in &articles {
            match counts
                .iter_mut()
                .find(|(author_id, _)| *author_id == article.author_id())
            {
                Some((_, count)) => *count += 1,
                None => counts.push((article.author_id(), 1)),
            }
        }
        Ok(counts)
    }

    fn require_author(&self, id: AuthorId) -> RepoResult<()> {
        self.require_author_record(id).map(|_| ())
    }

    fn require_author_record(&self, id: AuthorId) -> RepoResult<Author> {
        self.repo.get_author(id).ok_or(RepoError::AuthorNotFound(id))
    }

    fn require_magazine(&self, id: MagazineId) -> RepoResult<Magazine> {
        self.repo
            .get_magazine(id)
            .ok_or(RepoError::MagazineNotFound(id))
    }
}
