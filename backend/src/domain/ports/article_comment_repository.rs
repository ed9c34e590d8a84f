//! Port for article comment persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{ArticleComment, ArticleCommentId, ArticleId, AuditStamp, NewArticleComment};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by article comment repository adapters.
    pub enum ArticleCommentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "article comment repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "article comment repository query failed: {message}",
    }
}

/// Port for reading and writing article comments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleCommentRepository: Send + Sync {
    /// List every comment under an article, oldest first.
    async fn find_by_article_id(
        &self,
        article_id: ArticleId,
    ) -> Result<Vec<ArticleComment>, ArticleCommentRepositoryError>;

    /// Fetch a comment with its author by identifier.
    async fn find_by_id(
        &self,
        id: ArticleCommentId,
    ) -> Result<Option<ArticleComment>, ArticleCommentRepositoryError>;

    /// Insert a comment and return the stored row with its assigned id.
    async fn save(
        &self,
        comment: &NewArticleComment,
    ) -> Result<ArticleComment, ArticleCommentRepositoryError>;

    /// Overwrite an existing comment row.
    async fn update(&self, comment: &ArticleComment)
    -> Result<(), ArticleCommentRepositoryError>;

    /// Delete a comment by identifier.
    async fn delete_by_id(&self, id: ArticleCommentId)
    -> Result<(), ArticleCommentRepositoryError>;
}

/// Fixture implementation behaving like an empty comment store.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureArticleCommentRepository;

#[async_trait]
impl ArticleCommentRepository for FixtureArticleCommentRepository {
    async fn find_by_article_id(
        &self,
        _article_id: ArticleId,
    ) -> Result<Vec<ArticleComment>, ArticleCommentRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_id(
        &self,
        _id: ArticleCommentId,
    ) -> Result<Option<ArticleComment>, ArticleCommentRepositoryError> {
        Ok(None)
    }

    async fn save(
        &self,
        comment: &NewArticleComment,
    ) -> Result<ArticleComment, ArticleCommentRepositoryError> {
        let principal = comment
            .author
            .as_ref()
            .map_or(crate::domain::SYSTEM_PRINCIPAL, |author| {
                author.username.as_str()
            });
        Ok(ArticleComment {
            id: ArticleCommentId::new(0),
            article_id: comment.article_id,
            author: comment.author.clone(),
            content: comment.content.clone(),
            audit: AuditStamp::create(principal),
        })
    }

    async fn update(
        &self,
        _comment: &ArticleComment,
    ) -> Result<(), ArticleCommentRepositoryError> {
        Ok(())
    }

    async fn delete_by_id(
        &self,
        _id: ArticleCommentId,
    ) -> Result<(), ArticleCommentRepositoryError> {
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
    async fn fixture_list_returns_empty() {
        let repo = FixtureArticleCommentRepository;
        let listed = repo
            .find_by_article_id(ArticleId::new(1))
            .await
            .expect("fixture list succeeds");
        assert!(listed.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_save_stamps_system_for_anonymous_comments() {
        let repo = FixtureArticleCommentRepository;
        let saved = repo
            .save(&NewArticleComment {
                article_id: ArticleId::new(1),
                author: None,
                content: "comment".into(),
            })
            .await
            .expect("fixture save succeeds");
        assert_eq!(saved.audit.created_by, "system");
        assert!(saved.author.is_none());
    }

    #[rstest]
    fn query_error_formats_message() {
        let err = ArticleCommentRepositoryError::query("broken sql");
        assert!(err.to_string().contains("broken sql"));
    }
}
