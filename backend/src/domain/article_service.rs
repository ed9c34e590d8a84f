//! Article domain service implementing the article driving port.
//!
//! Coordinates the article, comment, and account repositories behind the
//! search, read, and mutation use cases. Read paths fail loudly on a missing
//! article; the update path logs and ignores a stale id so bulk callers are
//! not interrupted by entries deleted underneath them.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::ports::{
    ArticleCommentRepository, ArticleCommentRepositoryError, ArticleRepository,
    ArticleRepositoryError, ArticleService, UserAccountRepository, UserAccountRepositoryError,
};
use crate::domain::{
    ArticleDto, ArticleId, ArticleUpdateDto, ArticleWithCommentsDto, Error, SearchType,
};

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

/// Article service implementing the article driving port.
#[derive(Clone)]
pub struct ArticleServiceImpl<A, C, U> {
    articles: Arc<A>,
    comments: Arc<C>,
    accounts: Arc<U>,
}

impl<A, C, U> ArticleServiceImpl<A, C, U> {
    /// Create a new service over the article, comment, and account
    /// repositories.
    pub fn new(articles: Arc<A>, comments: Arc<C>, accounts: Arc<U>) -> Self {
        Self {
            articles,
            comments,
            accounts,
        }
    }
}

#[async_trait]
impl<A, C, U> ArticleService for ArticleServiceImpl<A, C, U>
where
    A: ArticleRepository,
    C: ArticleCommentRepository,
    U: UserAccountRepository,
{
    async fn search_articles(
        &self,
        search_type: Option<SearchType>,
        keyword: Option<String>,
        page: PageRequest,
    ) -> Result<Page<ArticleDto>, Error> {
        let keyword = keyword.filter(|candidate| !candidate.trim().is_empty());
        let result = match (search_type, keyword) {
            (Some(SearchType::Title), Some(keyword)) => {
                self.articles.find_by_title_containing(&keyword, page).await
            }
            (Some(SearchType::Content), Some(keyword)) => {
                self.articles
                    .find_by_content_containing(&keyword, page)
                    .await
            }
            (Some(SearchType::Hashtag), Some(keyword)) => {
                self.articles.find_by_hashtag(&keyword, page).await
            }
            (Some(SearchType::Author), Some(keyword)) => {
                self.articles
                    .find_by_author_nickname_containing(&keyword, page)
                    .await
            }
            // No dimension or a blank keyword lists everything.
            _ => self.articles.find_page(page).await,
        };

        Ok(result.map_err(map_article_error)?.map(ArticleDto::from))
    }

    async fn get_article(&self, id: ArticleId) -> Result<ArticleWithCommentsDto, Error> {
        let article = self
            .articles
            .find_by_id(id)
            .await
            .map_err(map_article_error)?
            .ok_or_else(|| Error::not_found(format!("article {id} not found")))?;

        let comments = self
            .comments
            .find_by_article_id(id)
            .await
            .map_err(map_comment_error)?;

        Ok(ArticleWithCommentsDto::from_entity(article, comments))
    }

    async fn save_article(&self, dto: ArticleDto) -> Result<(), Error> {
        let username = dto.user_account.username.clone();
        let author = self
            .accounts
            .find_by_username(&username)
            .await
            .map_err(map_account_error)?
            .ok_or_else(|| Error::not_found(format!("user account {username} not found")))?;

        self.articles
            .save(&dto.to_entity(author))
            .await
            .map_err(map_article_error)?;

        Ok(())
    }

    async fn update_article(&self, dto: ArticleUpdateDto) -> Result<(), Error> {
        let Some(mut article) = self
            .articles
            .find_by_id(dto.id)
            .await
            .map_err(map_article_error)?
        else {
            tracing::warn!(article_id = %dto.id, "skipping update for missing article");
            return Ok(());
        };

        if let Some(title) = dto.title {
            article.title = title;
        }
        if let Some(content) = dto.content {
            article.content = content;
        }
        if let Some(hashtag) = dto.hashtag {
            article.hashtag = Some(hashtag);
        }

        self.articles
            .update(&article)
            .await
            .map_err(map_article_error)?;

        Ok(())
    }

    async fn delete_article(&self, id: ArticleId) -> Result<(), Error> {
        self.articles
            .delete_by_id(id)
            .await
            .map_err(map_article_error)?;

        Ok(())
    }

    async fn count_articles(&self) -> Result<u64, Error> {
        self.articles.count().await.map_err(map_article_error)
    }
}

#[cfg(test)]
#[path = "article_service_tests.rs"]
mod tests;
