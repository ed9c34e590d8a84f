//! PostgreSQL-backed `ArticleRepository` implementation using Diesel ORM.
//!
//! Articles are always loaded joined with their author row. Keyword finders
//! run a count and a page query per call; hashtag searches compare for
//! equality while the other dimensions use an escaped `LIKE` pattern.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::{Page, PageRequest};

use crate::domain::ports::{ArticleRepository, ArticleRepositoryError};
use crate::domain::{Article, ArticleId, AuditStamp, NewArticle, SYSTEM_PRINCIPAL};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{ArticleRow, ArticleUpdate, NewArticleRow, UserAccountRow};
use super::pool::{DbPool, PoolError};
use super::row_mapping::{account_from_row, article_from_row};
use super::schema::{article_comments, articles, user_accounts};

/// Diesel-backed implementation of the article repository port.
#[derive(Clone)]
pub struct DieselArticleRepository {
    pool: DbPool,
}

impl DieselArticleRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain repository errors.
fn map_pool_error(error: PoolError) -> ArticleRepositoryError {
    map_basic_pool_error(error, ArticleRepositoryError::connection)
}

/// Map Diesel errors to domain repository errors.
fn map_diesel_error(error: diesel::result::Error) -> ArticleRepositoryError {
    map_basic_diesel_error(
        error,
        ArticleRepositoryError::query,
        ArticleRepositoryError::connection,
    )
}

/// Build a `LIKE` pattern matching `keyword` anywhere in the column.
///
/// Backslash, percent, and underscore in the keyword are escaped so they
/// match literally.
fn like_pattern(keyword: &str) -> String {
    let escaped = keyword
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// Assemble a page envelope from joined rows and a count query result.
fn page_from_rows(
    rows: Vec<(ArticleRow, UserAccountRow)>,
    page: PageRequest,
    total: i64,
) -> Page<Article> {
    let items = rows
        .into_iter()
        .map(|(article, author)| article_from_row(article, account_from_row(author)))
        .collect();
    #[expect(
        clippy::cast_sign_loss,
        reason = "count queries never return negative totals"
    )]
    let total = total as u64;
    Page::new(items, page, total)
}

#[async_trait]
impl ArticleRepository for DieselArticleRepository {
    async fn find_page(&self, page: PageRequest) -> Result<Page<Article>, ArticleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = articles::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let rows: Vec<(ArticleRow, UserAccountRow)> = articles::table
            .inner_join(user_accounts::table)
            .order(articles::id.asc())
            .limit(page.limit())
            .offset(page.offset())
            .select((ArticleRow::as_select(), UserAccountRow::as_select()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(page_from_rows(rows, page, total))
    }

    async fn find_by_title_containing(
        &self,
        keyword: &str,
        page: PageRequest,
    ) -> Result<Page<Article>, ArticleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let pattern = like_pattern(keyword);

        let total: i64 = articles::table
            .filter(articles::title.like(&pattern))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let rows: Vec<(ArticleRow, UserAccountRow)> = articles::table
            .inner_join(user_accounts::table)
            .filter(articles::title.like(&pattern))
            .order(articles::id.asc())
            .limit(page.limit())
            .offset(page.offset())
            .select((ArticleRow::as_select(), UserAccountRow::as_select()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(page_from_rows(rows, page, total))
    }

    async fn find_by_content_containing(
        &self,
        keyword: &str,
        page: PageRequest,
    ) -> Result<Page<Article>, ArticleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let pattern = like_pattern(keyword);

        let total: i64 = articles::table
            .filter(articles::content.like(&pattern))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let rows: Vec<(ArticleRow, UserAccountRow)> = articles::table
            .inner_join(user_accounts::table)
            .filter(articles::content.like(&pattern))
            .order(articles::id.asc())
            .limit(page.limit())
            .offset(page.offset())
            .select((ArticleRow::as_select(), UserAccountRow::as_select()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(page_from_rows(rows, page, total))
    }

    async fn find_by_hashtag(
        &self,
        hashtag: &str,
        page: PageRequest,
    ) -> Result<Page<Article>, ArticleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = articles::table
            .filter(articles::hashtag.eq(hashtag))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let rows: Vec<(ArticleRow, UserAccountRow)> = articles::table
            .inner_join(user_accounts::table)
            .filter(articles::hashtag.eq(hashtag))
            .order(articles::id.asc())
            .limit(page.limit())
            .offset(page.offset())
            .select((ArticleRow::as_select(), UserAccountRow::as_select()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(page_from_rows(rows, page, total))
    }

    async fn find_by_author_nickname_containing(
        &self,
        keyword: &str,
        page: PageRequest,
    ) -> Result<Page<Article>, ArticleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let pattern = like_pattern(keyword);

        let total: i64 = articles::table
            .inner_join(user_accounts::table)
            .filter(user_accounts::nickname.like(&pattern))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let rows: Vec<(ArticleRow, UserAccountRow)> = articles::table
            .inner_join(user_accounts::table)
            .filter(user_accounts::nickname.like(&pattern))
            .order(articles::id.asc())
            .limit(page.limit())
            .offset(page.offset())
            .select((ArticleRow::as_select(), UserAccountRow::as_select()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(page_from_rows(rows, page, total))
    }

    async fn find_by_id(
        &self,
        id: ArticleId,
    ) -> Result<Option<Article>, ArticleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<(ArticleRow, UserAccountRow)> = articles::table
            .inner_join(user_accounts::table)
            .filter(articles::id.eq(id.into_inner()))
            .select((ArticleRow::as_select(), UserAccountRow::as_select()))
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(|(article, author)| article_from_row(article, account_from_row(author))))
    }

    async fn save(&self, article: &NewArticle) -> Result<Article, ArticleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Audit stamping happens here, before the insert, with the author as
        // the acting principal.
        let stamp = AuditStamp::create(&article.author.username);
        let new_row = NewArticleRow {
            user_account_id: article.author.id.into_inner(),
            title: &article.title,
            content: &article.content,
            hashtag: article.hashtag.as_deref(),
            created_at: stamp.created_at,
            created_by: &stamp.created_by,
            modified_at: stamp.modified_at,
            modified_by: &stamp.modified_by,
        };

        let row: ArticleRow = diesel::insert_into(articles::table)
            .values(&new_row)
            .returning(ArticleRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(article_from_row(row, article.author.clone()))
    }

    async fn update(&self, article: &Article) -> Result<(), ArticleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut stamp = article.audit.clone();
        stamp.touch(SYSTEM_PRINCIPAL);
        let changes = ArticleUpdate {
            title: &article.title,
            content: &article.content,
            hashtag: article.hashtag.as_deref(),
            modified_at: stamp.modified_at,
            modified_by: &stamp.modified_by,
        };

        diesel::update(articles::table.filter(articles::id.eq(article.id.into_inner())))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn delete_by_id(&self, id: ArticleId) -> Result<(), ArticleRepositoryError> {
        use diesel_async::AsyncConnection as _;
        use diesel_async::scoped_futures::ScopedFutureExt as _;

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Comments and article go in one transaction so a failure cannot
        // leave orphaned comments behind.
        conn.transaction(|conn| {
            async move {
                diesel::delete(
                    article_comments::table
                        .filter(article_comments::article_id.eq(id.into_inner())),
                )
                .execute(conn)
                .await?;

                diesel::delete(articles::table.filter(articles::id.eq(id.into_inner())))
                    .execute(conn)
                    .await?;

                Ok(())
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }

    async fn count(&self) -> Result<u64, ArticleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = articles::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        #[expect(
            clippy::cast_sign_loss,
            reason = "count queries never return negative totals"
        )]
        let total = total as u64;
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for error mapping and query helpers.

    use chrono::Utc;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let repo_err = map_pool_error(PoolError::checkout("connection refused"));

        assert!(matches!(
            repo_err,
            ArticleRepositoryError::Connection { .. }
        ));
        assert!(repo_err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn diesel_error_maps_to_query_error() {
        let repo_err = map_diesel_error(diesel::result::Error::NotFound);

        assert!(matches!(repo_err, ArticleRepositoryError::Query { .. }));
        assert!(repo_err.to_string().contains("record not found"));
    }

    #[rstest]
    #[case("spring", "%spring%")]
    #[case("50%", "%50\\%%")]
    #[case("snake_case", "%snake\\_case%")]
    #[case("back\\slash", "%back\\\\slash%")]
    fn like_patterns_escape_metacharacters(#[case] keyword: &str, #[case] expected: &str) {
        assert_eq!(like_pattern(keyword), expected);
    }

    #[rstest]
    fn pages_are_assembled_from_joined_rows() {
        let now = Utc::now();
        let author = UserAccountRow {
            id: 7,
            username: "uno".into(),
            password_hash: "hash".into(),
            email: None,
            nickname: Some("Uno".into()),
            memo: None,
            created_at: now,
            created_by: "uno".into(),
            modified_at: now,
            modified_by: "uno".into(),
        };
        let article = ArticleRow {
            id: 3,
            user_account_id: 7,
            title: "title".into(),
            content: "content".into(),
            hashtag: None,
            created_at: now,
            created_by: "uno".into(),
            modified_at: now,
            modified_by: "uno".into(),
        };

        let page = page_from_rows(vec![(article, author)], PageRequest::default(), 21);

        assert_eq!(page.items().len(), 1);
        assert_eq!(page.items()[0].author.username, "uno");
        assert_eq!(page.total_elements(), 21);
        assert_eq!(page.total_pages(), 2);
    }
}
