//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod article_comment_repository;
mod article_comment_service;
mod article_repository;
mod article_service;
mod user_account_repository;
mod user_account_service;

#[cfg(test)]
pub use article_comment_repository::MockArticleCommentRepository;
pub use article_comment_repository::{
    ArticleCommentRepository, ArticleCommentRepositoryError, FixtureArticleCommentRepository,
};
#[cfg(test)]
pub use article_comment_service::MockArticleCommentService;
pub use article_comment_service::{ArticleCommentService, FixtureArticleCommentService};
#[cfg(test)]
pub use article_repository::MockArticleRepository;
pub use article_repository::{ArticleRepository, ArticleRepositoryError, FixtureArticleRepository};
#[cfg(test)]
pub use article_service::MockArticleService;
pub use article_service::{ArticleService, FixtureArticleService};
#[cfg(test)]
pub use user_account_repository::MockUserAccountRepository;
pub use user_account_repository::{
    FixtureUserAccountRepository, UserAccountRepository, UserAccountRepositoryError,
};
#[cfg(test)]
pub use user_account_service::MockUserAccountService;
pub use user_account_service::{FixtureUserAccountService, UserAccountService};
