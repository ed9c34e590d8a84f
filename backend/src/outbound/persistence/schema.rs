//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are used
//! by Diesel for compile-time query validation and type-safe SQL generation.
//!
//! # Maintenance
//!
//! When migrations change the schema, this file should be regenerated or
//! manually updated to reflect those changes. The `diesel print-schema`
//! command can generate these definitions from a live database.

diesel::table! {
    /// Registered user accounts.
    ///
    /// The `id` column is the primary key (BIGSERIAL); `username` carries a
    /// unique constraint.
    user_accounts (id) {
        /// Primary key assigned by the database.
        id -> Int8,
        /// Unique login name.
        username -> Varchar,
        /// Hashed credential.
        password_hash -> Varchar,
        /// Optional contact address.
        email -> Nullable<Varchar>,
        /// Optional display name.
        nickname -> Nullable<Varchar>,
        /// Optional free-form note.
        memo -> Nullable<Varchar>,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Principal that created the record.
        created_by -> Varchar,
        /// Last modification timestamp.
        modified_at -> Timestamptz,
        /// Principal behind the last modification.
        modified_by -> Varchar,
    }
}

diesel::table! {
    /// Board articles.
    ///
    /// Every article belongs to a user account; `title` must be non-empty.
    articles (id) {
        /// Primary key assigned by the database.
        id -> Int8,
        /// Authoring account (FK to `user_accounts.id`).
        user_account_id -> Int8,
        /// Article title.
        title -> Varchar,
        /// Article body.
        content -> Text,
        /// Optional topic tag.
        hashtag -> Nullable<Varchar>,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Principal that created the record.
        created_by -> Varchar,
        /// Last modification timestamp.
        modified_at -> Timestamptz,
        /// Principal behind the last modification.
        modified_by -> Varchar,
    }
}

diesel::table! {
    /// Comments attached to board articles.
    ///
    /// `user_account_id` is nullable; anonymous comments carry no author.
    article_comments (id) {
        /// Primary key assigned by the database.
        id -> Int8,
        /// Parent article (FK to `articles.id`).
        article_id -> Int8,
        /// Optional authoring account (FK to `user_accounts.id`).
        user_account_id -> Nullable<Int8>,
        /// Comment body.
        content -> Text,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Principal that created the record.
        created_by -> Varchar,
        /// Last modification timestamp.
        modified_at -> Timestamptz,
        /// Principal behind the last modification.
        modified_by -> Varchar,
    }
}

diesel::joinable!(articles -> user_accounts (user_account_id));
diesel::joinable!(article_comments -> articles (article_id));
diesel::joinable!(article_comments -> user_accounts (user_account_id));

diesel::allow_tables_to_appear_in_same_query!(article_comments, articles, user_accounts);
