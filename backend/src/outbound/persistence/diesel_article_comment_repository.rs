//! PostgreSQL-backed `ArticleCommentRepository` implementation using Diesel
//! ORM.
//!
//! Comments are loaded left-joined with their optional author row and listed
//! in ascending id order, which matches creation order for BIGSERIAL keys.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ArticleCommentRepository, ArticleCommentRepositoryError};
use crate::domain::{
    ArticleComment, ArticleCommentId, ArticleId, AuditStamp, NewArticleComment, SYSTEM_PRINCIPAL,
};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{ArticleCommentRow, ArticleCommentUpdate, NewArticleCommentRow, UserAccountRow};
use super::pool::{DbPool, PoolError};
use super::row_mapping::{account_from_row, comment_from_row};
use super::schema::{article_comments, user_accounts};

/// Diesel-backed implementation of the article comment repository port.
#[derive(Clone)]
pub struct DieselArticleCommentRepository {
    pool: DbPool,
}

impl DieselArticleCommentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain repository errors.
fn map_pool_error(error: PoolError) -> ArticleCommentRepositoryError {
    map_basic_pool_error(error, ArticleCommentRepositoryError::connection)
}

/// Map Diesel errors to domain repository errors.
fn map_diesel_error(error: diesel::result::Error) -> ArticleCommentRepositoryError {
    map_basic_diesel_error(
        error,
        ArticleCommentRepositoryError::query,
        ArticleCommentRepositoryError::connection,
    )
}

fn joined_to_comment(row: ArticleCommentRow, author: Option<UserAccountRow>) -> ArticleComment {
    comment_from_row(row, author.map(account_from_row))
}

#[async_trait]
impl ArticleCommentRepository for DieselArticleCommentRepository {
    async fn find_by_article_id(
        &self,
        article_id: ArticleId,
    ) -> Result<Vec<ArticleComment>, ArticleCommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<(ArticleCommentRow, Option<UserAccountRow>)> = article_comments::table
            .left_join(user_accounts::table)
            .filter(article_comments::article_id.eq(article_id.into_inner()))
            .order(article_comments::id.asc())
            .select((
                ArticleCommentRow::as_select(),
                Option::<UserAccountRow>::as_select(),
            ))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows
            .into_iter()
            .map(|(comment, author)| joined_to_comment(comment, author))
            .collect())
    }

    async fn find_by_id(
        &self,
        id: ArticleCommentId,
    ) -> Result<Option<ArticleComment>, ArticleCommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<(ArticleCommentRow, Option<UserAccountRow>)> = article_comments::table
            .left_join(user_accounts::table)
            .filter(article_comments::id.eq(id.into_inner()))
            .select((
                ArticleCommentRow::as_select(),
                Option::<UserAccountRow>::as_select(),
            ))
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(|(comment, author)| joined_to_comment(comment, author)))
    }

    async fn save(
        &self,
        comment: &NewArticleComment,
    ) -> Result<ArticleComment, ArticleCommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Audit stamping happens here, before the insert. Anonymous comments
        // are stamped with the system principal.
        let principal = comment
            .author
            .as_ref()
            .map_or(SYSTEM_PRINCIPAL, |author| author.username.as_str());
        let stamp = AuditStamp::create(principal);
        let new_row = NewArticleCommentRow {
            article_id: comment.article_id.into_inner(),
            user_account_id: comment.author.as_ref().map(|author| author.id.into_inner()),
            content: &comment.content,
            created_at: stamp.created_at,
            created_by: &stamp.created_by,
            modified_at: stamp.modified_at,
            modified_by: &stamp.modified_by,
        };

        let row: ArticleCommentRow = diesel::insert_into(article_comments::table)
            .values(&new_row)
            .returning(ArticleCommentRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(comment_from_row(row, comment.author.clone()))
    }

    async fn update(
        &self,
        comment: &ArticleComment,
    ) -> Result<(), ArticleCommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut stamp = comment.audit.clone();
        stamp.touch(SYSTEM_PRINCIPAL);
        let changes = ArticleCommentUpdate {
            content: &comment.content,
            modified_at: stamp.modified_at,
            modified_by: &stamp.modified_by,
        };

        diesel::update(
            article_comments::table.filter(article_comments::id.eq(comment.id.into_inner())),
        )
        .set(&changes)
        .execute(&mut conn)
        .await
        .map(|_| ())
        .map_err(map_diesel_error)
    }

    async fn delete_by_id(
        &self,
        id: ArticleCommentId,
    ) -> Result<(), ArticleCommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(article_comments::table.filter(article_comments::id.eq(id.into_inner())))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
