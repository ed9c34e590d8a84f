//! Driving port for the article use cases.
//!
//! Inbound adapters call this port to search, read, and mutate articles
//! without knowing the backing persistence details.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{
    ArticleDto, ArticleId, ArticleUpdateDto, ArticleWithCommentsDto, Error, SearchType,
};

/// Driving port for article reads and writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleService: Send + Sync {
    /// Read one page of articles, optionally filtered by a keyword search.
    ///
    /// A missing search type or a blank keyword falls back to the unfiltered
    /// listing. Hashtag searches match exactly; the other dimensions match by
    /// substring.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] with `ServiceUnavailable` when the store cannot be
    /// reached and `InternalError` when a query fails.
    async fn search_articles(
        &self,
        search_type: Option<SearchType>,
        keyword: Option<String>,
        page: PageRequest,
    ) -> Result<Page<ArticleDto>, Error>;

    /// Read a single article together with its comments, oldest comment
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] with `NotFound` naming the requested id when no such
    /// article exists.
    async fn get_article(&self, id: ArticleId) -> Result<ArticleWithCommentsDto, Error>;

    /// Persist a new article authored by the account named in the payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] with `NotFound` when the named author account does
    /// not exist.
    async fn save_article(&self, dto: ArticleDto) -> Result<(), Error>;

    /// Apply the populated fields of `dto` to a stored article.
    ///
    /// Updating an id that no longer exists is logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] only for store failures, never for a missing target.
    async fn update_article(&self, dto: ArticleUpdateDto) -> Result<(), Error>;

    /// Delete an article and every comment under it.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for store failures.
    async fn delete_article(&self, id: ArticleId) -> Result<(), Error>;

    /// Count all stored articles.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for store failures.
    async fn count_articles(&self) -> Result<u64, Error>;
}

/// Fixture implementation behaving like an empty board.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureArticleService;

#[async_trait]
impl ArticleService for FixtureArticleService {
    async fn search_articles(
        &self,
        _search_type: Option<SearchType>,
        _keyword: Option<String>,
        page: PageRequest,
    ) -> Result<Page<ArticleDto>, Error> {
        Ok(Page::empty(page))
    }

    async fn get_article(&self, id: ArticleId) -> Result<ArticleWithCommentsDto, Error> {
        Err(Error::not_found(format!("article {id} not found")))
    }

    async fn save_article(&self, _dto: ArticleDto) -> Result<(), Error> {
        Ok(())
    }

    async fn update_article(&self, _dto: ArticleUpdateDto) -> Result<(), Error> {
        Ok(())
    }

    async fn delete_article(&self, _id: ArticleId) -> Result<(), Error> {
        Ok(())
    }

    async fn count_articles(&self) -> Result<u64, Error> {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;

    #[rstest]
    #[tokio::test]
    async fn fixture_search_returns_empty_page() {
        let service = FixtureArticleService;
        let page = service
            .search_articles(Some(SearchType::Title), Some("spring".into()), PageRequest::default())
            .await
            .expect("fixture search succeeds");
        assert!(page.items().is_empty());
        assert_eq!(page.total_elements(), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_get_reports_missing_article() {
        let service = FixtureArticleService;
        let err = service
            .get_article(ArticleId::new(42))
            .await
            .expect_err("fixture board is empty");
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(err.message.contains("42"));
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_count_is_zero() {
        let service = FixtureArticleService;
        let count = service.count_articles().await.expect("fixture count succeeds");
        assert_eq!(count, 0);
    }
}
