//! Driving port for the article comment use cases.

use async_trait::async_trait;

use crate::domain::{ArticleCommentDto, ArticleCommentId, ArticleId, Error};

/// Driving port for comment reads and writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleCommentService: Send + Sync {
    /// List every comment under an article, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for store failures. An unknown article id yields an
    /// empty list, not an error.
    async fn search_article_comments(
        &self,
        article_id: ArticleId,
    ) -> Result<Vec<ArticleCommentDto>, Error>;

    /// Persist a new comment under the article named in the payload.
    ///
    /// A payload naming a missing parent article, or a missing author
    /// account, is logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] with `InvalidRequest` when the payload carries no
    /// content, and store failures otherwise.
    async fn save_article_comment(&self, dto: ArticleCommentDto) -> Result<(), Error>;

    /// Replace the content of a stored comment.
    ///
    /// Only the content field is writable. A payload without an id, or
    /// naming a comment that no longer exists, is logged and otherwise
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] only for store failures, never for a missing target.
    async fn update_article_comment(&self, dto: ArticleCommentDto) -> Result<(), Error>;

    /// Delete a comment by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for store failures.
    async fn delete_article_comment(&self, id: ArticleCommentId) -> Result<(), Error>;
}

/// Fixture implementation behaving like a board without comments.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureArticleCommentService;

#[async_trait]
impl ArticleCommentService for FixtureArticleCommentService {
    async fn search_article_comments(
        &self,
        _article_id: ArticleId,
    ) -> Result<Vec<ArticleCommentDto>, Error> {
        Ok(Vec::new())
    }

    async fn save_article_comment(&self, _dto: ArticleCommentDto) -> Result<(), Error> {
        Ok(())
    }

    async fn update_article_comment(&self, _dto: ArticleCommentDto) -> Result<(), Error> {
        Ok(())
    }

    async fn delete_article_comment(&self, _id: ArticleCommentId) -> Result<(), Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[tokio::test]
    async fn fixture_search_returns_empty() {
        let service = FixtureArticleCommentService;
        let comments = service
            .search_article_comments(ArticleId::new(1))
            .await
            .expect("fixture search succeeds");
        assert!(comments.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_delete_succeeds() {
        let service = FixtureArticleCommentService;
        service
            .delete_article_comment(ArticleCommentId::new(1))
            .await
            .expect("fixture delete succeeds");
    }
}
