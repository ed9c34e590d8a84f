//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{article_comments, articles, user_accounts};

/// Row struct for reading from the user_accounts table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = user_accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserAccountRow {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub email: Option<String>,
    pub nickname: Option<String>,
    pub memo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
}

/// Insertable struct for registering new user accounts.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = user_accounts)]
pub(crate) struct NewUserAccountRow<'a> {
    pub username: &'a str,
    pub password_hash: &'a str,
    pub email: Option<&'a str>,
    pub nickname: Option<&'a str>,
    pub memo: Option<&'a str>,
    pub created_at: DateTime<Utc>,
    pub created_by: &'a str,
    pub modified_at: DateTime<Utc>,
    pub modified_by: &'a str,
}

// ---------------------------------------------------------------------------
// Article models
// ---------------------------------------------------------------------------

/// Row struct for reading from the articles table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = articles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ArticleRow {
    pub id: i64,
    pub user_account_id: i64,
    pub title: String,
    pub content: String,
    pub hashtag: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
}

/// Insertable struct for creating new article records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = articles)]
pub(crate) struct NewArticleRow<'a> {
    pub user_account_id: i64,
    pub title: &'a str,
    pub content: &'a str,
    pub hashtag: Option<&'a str>,
    pub created_at: DateTime<Utc>,
    pub created_by: &'a str,
    pub modified_at: DateTime<Utc>,
    pub modified_by: &'a str,
}

/// Changeset struct for overwriting article records.
///
/// `treat_none_as_null` makes a `None` hashtag clear the column instead of
/// skipping it; the whole merged row is written back.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = articles)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct ArticleUpdate<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub hashtag: Option<&'a str>,
    pub modified_at: DateTime<Utc>,
    pub modified_by: &'a str,
}

// ---------------------------------------------------------------------------
// Article comment models
// ---------------------------------------------------------------------------

/// Row struct for reading from the article_comments table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = article_comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ArticleCommentRow {
    pub id: i64,
    pub article_id: i64,
    pub user_account_id: Option<i64>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
}

/// Insertable struct for creating new comment records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = article_comments)]
pub(crate) struct NewArticleCommentRow<'a> {
    pub article_id: i64,
    pub user_account_id: Option<i64>,
    pub content: &'a str,
    pub created_at: DateTime<Utc>,
    pub created_by: &'a str,
    pub modified_at: DateTime<Utc>,
    pub modified_by: &'a str,
}

/// Changeset struct for replacing comment content.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = article_comments)]
pub(crate) struct ArticleCommentUpdate<'a> {
    pub content: &'a str,
    pub modified_at: DateTime<Utc>,
    pub modified_by: &'a str,
}
