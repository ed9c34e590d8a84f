//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! This module provides concrete implementations of domain repository ports
//! backed by PostgreSQL via the Diesel ORM with async support through
//! `diesel-async` and `bb8` connection pooling.
//!
//! # Architecture
//!
//! The persistence layer follows these principles:
//!
//! - **Thin adapters**: Repository implementations only translate between
//!   Diesel models and domain types. No business logic resides here.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) are internal implementation details, never
//!   exposed to the domain layer.
//! - **Async-safe pooling**: Connections are managed via `bb8` pools with
//!   proper async integration through `diesel-async`.
//! - **Strongly typed errors**: All database errors are mapped to domain
//!   persistence error types.
//!
//! # Example
//!
//! ```ignore
//! use pinboard_backend::outbound::persistence::{DbPool, PoolConfig, DieselArticleRepository};
//!
//! let config = PoolConfig::new("postgres://localhost/mydb");
//! let pool = DbPool::new(config).await?;
//! let repo = DieselArticleRepository::new(pool);
//! ```

mod diesel_article_comment_repository;
mod diesel_article_repository;
mod diesel_basic_error_mapping;
mod diesel_user_account_repository;
mod models;
mod pool;
mod row_mapping;
mod schema;

pub use diesel_article_comment_repository::DieselArticleCommentRepository;
pub use diesel_article_repository::DieselArticleRepository;
pub use diesel_user_account_repository::DieselUserAccountRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
