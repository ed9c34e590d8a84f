//! Article comment domain service implementing the comment driving port.
//!
//! Comment writes are best effort: a payload pointing at an article or an
//! account that has since disappeared is logged and dropped rather than
//! failed, so feed-style clients replaying stale state do not error out.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    ArticleCommentRepository, ArticleCommentRepositoryError, ArticleCommentService,
    ArticleRepository, ArticleRepositoryError, UserAccountRepository, UserAccountRepositoryError,
};
use crate::domain::{
    ArticleCommentDto, ArticleCommentId, ArticleId, Error, NewArticleComment, UserAccount,
};

fn map_comment_error(error: ArticleCommentRepositoryError) -> Error {
    match error {
        ArticleCommentRepositoryError::Connection { message } => {
            Error::service_unavailable(format!(
                "article comment repository unavailable: {message}"
            ))
        }
        ArticleCommentRepositoryError::Query { message } => {
            Error::internal(format!("article comment repository error: {message}"))
        }
    }
}

fn map_article_error(error: ArticleRepositoryError) -> Error {
    match error {
        ArticleRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("article repository unavailable: {message}"))
        }
        ArticleRepositoryError::Query { message } => {
            Error::internal(format!("article repository error: {message}"))
        }
    }
}

fn map_account_error(error: UserAccountRepositoryError) -> Error {
    match error {
        UserAccountRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("user account repository unavailable: {message}"))
        }
        UserAccountRepositoryError::Query { message } => {
            Error::internal(format!("user account repository error: {message}"))
        }
        UserAccountRepositoryError::Duplicate { username } => {
            Error::conflict(format!("user account {username} already exists"))
        }
    }
}

/// Article comment service implementing the comment driving port.
#[derive(Clone)]
pub struct ArticleCommentServiceImpl<C, A, U> {
    comments: Arc<C>,
    articles: Arc<A>,
    accounts: Arc<U>,
}

impl<C, A, U> ArticleCommentServiceImpl<C, A, U> {
    /// Create a new service over the comment, article, and account
    /// repositories.
    pub fn new(comments: Arc<C>, articles: Arc<A>, accounts: Arc<U>) -> Self {
        Self {
            comments,
            articles,
            accounts,
        }
    }
}

impl<C, A, U> ArticleCommentServiceImpl<C, A, U>
where
    U: UserAccountRepository,
{
    /// Resolve the comment author named in the payload.
    ///
    /// `Ok(None)` covers both an anonymous payload and an author account
    /// that no longer exists; the second case also reports whether the
    /// lookup missed so the caller can skip the write.
    async fn resolve_author(
        &self,
        dto: &ArticleCommentDto,
    ) -> Result<AuthorResolution, Error> {
        let Some(named) = dto.user_account.as_ref() else {
            return Ok(AuthorResolution::Anonymous);
        };

        let account = self
            .accounts
            .find_by_username(&named.username)
            .await
            .map_err(map_account_error)?;

        Ok(match account {
            Some(account) => AuthorResolution::Found(account),
            None => AuthorResolution::Missing {
                username: named.username.clone(),
            },
        })
    }
}

enum AuthorResolution {
    Anonymous,
    Found(UserAccount),
    Missing { username: String },
}

#[async_trait]
impl<C, A, U> ArticleCommentService for ArticleCommentServiceImpl<C, A, U>
where
    C: ArticleCommentRepository,
    A: ArticleRepository,
    U: UserAccountRepository,
{
    async fn search_article_comments(
        &self,
        article_id: ArticleId,
    ) -> Result<Vec<ArticleCommentDto>, Error> {
        let comments = self
            .comments
            .find_by_article_id(article_id)
            .await
            .map_err(map_comment_error)?;

        Ok(comments.into_iter().map(ArticleCommentDto::from).collect())
    }

    async fn save_article_comment(&self, dto: ArticleCommentDto) -> Result<(), Error> {
        let Some(content) = dto
            .content
            .clone()
            .filter(|content| !content.trim().is_empty())
        else {
            return Err(Error::invalid_request(
                "article comment content must not be empty",
            ));
        };

        let parent = self
            .articles
            .find_by_id(dto.article_id)
            .await
            .map_err(map_article_error)?;
        if parent.is_none() {
            tracing::warn!(article_id = %dto.article_id, "skipping comment for missing article");
            return Ok(());
        }

        let author = match self.resolve_author(&dto).await? {
            AuthorResolution::Anonymous => None,
            AuthorResolution::Found(account) => Some(account),
            AuthorResolution::Missing { username } => {
                tracing::warn!(
                    article_id = %dto.article_id,
                    username,
                    "skipping comment for missing author account"
                );
                return Ok(());
            }
        };

        self.comments
            .save(&NewArticleComment {
                article_id: dto.article_id,
                author,
                content,
            })
            .await
            .map_err(map_comment_error)?;

        Ok(())
    }

    async fn update_article_comment(&self, dto: ArticleCommentDto) -> Result<(), Error> {
        let Some(id) = dto.id else {
            tracing::warn!(article_id = %dto.article_id, "skipping comment update without an id");
            return Ok(());
        };

        let Some(mut comment) = self
            .comments
            .find_by_id(id)
            .await
            .map_err(map_comment_error)?
        else {
            tracing::warn!(comment_id = %id, "skipping update for missing comment");
            return Ok(());
        };

        // Absent content means "leave unchanged", so there is nothing to
        // write back.
        let Some(content) = dto.content else {
            return Ok(());
        };

        comment.content = content;
        self.comments
            .update(&comment)
            .await
            .map_err(map_comment_error)?;

        Ok(())
    }

    async fn delete_article_comment(&self, id: ArticleCommentId) -> Result<(), Error> {
        self.comments
            .delete_by_id(id)
            .await
            .map_err(map_comment_error)?;

        Ok(())
    }
}

#[cfg(test)]
#[path = "article_comment_service_tests.rs"]
mod tests;
