//! HTTP inbound adapter exposing REST endpoints.

pub mod article_comments;
pub mod articles;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod user_accounts;

pub use crate::domain::ApiResult;
