//! Port for article persistence adapters and their errors.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{Article, ArticleId, AuditStamp, NewArticle};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by article repository adapters.
    pub enum ArticleRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "article repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "article repository query failed: {message}",
    }
}

/// Port for reading and writing articles.
///
/// Paged finders order by ascending identifier. Each keyword finder matches a
/// single field; combining criteria is the caller's concern.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Read one page of articles without any filter.
    async fn find_page(&self, page: PageRequest) -> Result<Page<Article>, ArticleRepositoryError>;

    /// Read one page of articles whose title contains `keyword`.
    async fn find_by_title_containing(
        &self,
        keyword: &str,
        page: PageRequest,
    ) -> Result<Page<Article>, ArticleRepositoryError>;

    /// Read one page of articles whose body contains `keyword`.
    async fn find_by_content_containing(
        &self,
        keyword: &str,
        page: PageRequest,
    ) -> Result<Page<Article>, ArticleRepositoryError>;

    /// Read one page of articles whose hashtag equals `hashtag`.
    async fn find_by_hashtag(
        &self,
        hashtag: &str,
        page: PageRequest,
    ) -> Result<Page<Article>, ArticleRepositoryError>;

    /// Read one page of articles whose author nickname contains `keyword`.
    async fn find_by_author_nickname_containing(
        &self,
        keyword: &str,
        page: PageRequest,
    ) -> Result<Page<Article>, ArticleRepositoryError>;

    /// Fetch an article with its author by identifier.
    async fn find_by_id(&self, id: ArticleId)
    -> Result<Option<Article>, ArticleRepositoryError>;

    /// Insert an article and return the stored row with its assigned id.
    async fn save(&self, article: &NewArticle) -> Result<Article, ArticleRepositoryError>;

    /// Overwrite an existing article row.
    async fn update(&self, article: &Article) -> Result<(), ArticleRepositoryError>;

    /// Delete an article together with its comments in one transaction.
    async fn delete_by_id(&self, id: ArticleId) -> Result<(), ArticleRepositoryError>;

    /// Count all stored articles.
    async fn count(&self) -> Result<u64, ArticleRepositoryError>;
}

/// Fixture implementation behaving like an empty article store.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureArticleRepository;

#[async_trait]
impl ArticleRepository for FixtureArticleRepository {
    async fn find_page(&self, page: PageRequest) -> Result<Page<Article>, ArticleRepositoryError> {
        Ok(Page::empty(page))
    }

    async fn find_by_title_containing(
        &self,
        _keyword: &str,
        page: PageRequest,
    ) -> Result<Page<Article>, ArticleRepositoryError> {
        Ok(Page::empty(page))
    }

    async fn find_by_content_containing(
        &self,
        _keyword: &str,
        page: PageRequest,
    ) -> Result<Page<Article>, ArticleRepositoryError> {
        Ok(Page::empty(page))
    }

    async fn find_by_hashtag(
        &self,
        _hashtag: &str,
        page: PageRequest,
    ) -> Result<Page<Article>, ArticleRepositoryError> {
        Ok(Page::empty(page))
    }

    async fn find_by_author_nickname_containing(
        &self,
        _keyword: &str,
        page: PageRequest,
    ) -> Result<Page<Article>, ArticleRepositoryError> {
        Ok(Page::empty(page))
    }

    async fn find_by_id(
        &self,
        _id: ArticleId,
    ) -> Result<Option<Article>, ArticleRepositoryError> {
        Ok(None)
    }

    async fn save(&self, article: &NewArticle) -> Result<Article, ArticleRepositoryError> {
        Ok(Article {
            id: ArticleId::new(0),
            author: article.author.clone(),
            title: article.title.clone(),
            content: article.content.clone(),
            hashtag: article.hashtag.clone(),
            audit: AuditStamp::create(&article.author.username),
        })
    }

    async fn update(&self, _article: &Article) -> Result<(), ArticleRepositoryError> {
        Ok(())
    }

    async fn delete_by_id(&self, _id: ArticleId) -> Result<(), ArticleRepositoryError> {
        Ok(())
    }

    async fn count(&self) -> Result<u64, ArticleRepositoryError> {
        Ok(0)
    }
}
