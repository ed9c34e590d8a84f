//! Domain model of the bulletin board.
//!
//! Entities ([`Article`], [`ArticleComment`], [`UserAccount`]) carry
//! store-assigned ids and audit metadata; drafts (`New*`) describe rows that
//! have not been persisted yet. DTOs are the flat snapshots exchanged with
//! callers. Services implement the driving ports in [`ports`] on top of the
//! repository ports, translating entities to DTOs at the boundary.

pub mod article;
pub mod article_comment;
pub mod article_comment_service;
pub mod article_service;
pub mod audit;
pub mod dto;
pub mod error;
pub mod ports;
pub mod search;
pub mod trace_id;
pub mod user_account;
pub mod user_account_service;

pub use self::article::{Article, ArticleId, NewArticle};
pub use self::article_comment::{ArticleComment, ArticleCommentId, NewArticleComment};
pub use self::article_comment_service::ArticleCommentServiceImpl;
pub use self::article_service::ArticleServiceImpl;
pub use self::audit::{AuditStamp, SYSTEM_PRINCIPAL};
pub use self::dto::{
    ArticleCommentDto, ArticleDto, ArticleUpdateDto, ArticleWithCommentsDto, UserAccountDto,
};
pub use self::error::{Error, ErrorCode};
pub use self::search::SearchType;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user_account::{NewUserAccount, UserAccount, UserAccountId};
pub use self::user_account_service::UserAccountServiceImpl;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use pinboard_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("nothing here"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
