//! Article comment HTTP handlers.
//!
//! ```text
//! GET    /api/v1/articles/{article_id}/comments
//! POST   /api/v1/article-comments
//! PUT    /api/v1/article-comments/{comment_id}
//! DELETE /api/v1/article-comments/{comment_id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ApiResult, ArticleCommentDto, ArticleCommentId, ArticleId};
use crate::inbound::http::articles::author_ref;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::user_accounts::UserAccountResponseBody;

/// Article comment response payload.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleCommentResponseBody {
    pub id: Option<i64>,
    pub article_id: i64,
    /// Commenting account; `null` for anonymous comments.
    pub user_account: Option<UserAccountResponseBody>,
    pub content: Option<String>,
    #[schema(format = "date-time")]
    pub created_at: Option<String>,
    pub created_by: Option<String>,
    #[schema(format = "date-time")]
    pub modified_at: Option<String>,
    pub modified_by: Option<String>,
}

impl From<ArticleCommentDto> for ArticleCommentResponseBody {
    fn from(value: ArticleCommentDto) -> Self {
        Self {
            id: value.id.map(ArticleCommentId::into_inner),
            article_id: value.article_id.into_inner(),
            user_account: value.user_account.map(UserAccountResponseBody::from),
            content: value.content,
            created_at: value.created_at.map(|at| at.to_rfc3339()),
            created_by: value.created_by,
            modified_at: value.modified_at.map(|at| at.to_rfc3339()),
            modified_by: value.modified_by,
        }
    }
}

/// Request payload for creating a comment.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleCommentRequestBody {
    pub article_id: i64,
    /// Username of the commenting account; omit for an anonymous comment.
    pub username: Option<String>,
    pub content: String,
}

/// Request payload for updating a comment.
///
/// Absent content means "leave unchanged". The parent article id travels with
/// the payload for shape parity with creation; updates do not consult it.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleCommentRequestBody {
    pub article_id: i64,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ArticlePath {
    article_id: i64,
}

#[derive(Debug, Deserialize)]
struct CommentPath {
    comment_id: i64,
}

/// List an article's comments, oldest first.
#[utoipa::path(
    get,
    path = "/api/v1/articles/{article_id}/comments",
    params(
        ("article_id" = i64, Path, description = "Parent article identifier")
    ),
    responses(
        (status = 200, description = "Comments in creation order", body = [ArticleCommentResponseBody]),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["article-comments"],
    operation_id = "listArticleComments"
)]
#[get("/articles/{article_id}/comments")]
pub async fn list_article_comments(
    state: web::Data<HttpState>,
    path: web::Path<ArticlePath>,
) -> ApiResult<web::Json<Vec<ArticleCommentResponseBody>>> {
    let id = ArticleId::new(path.into_inner().article_id);
    let comments = state.article_comments.search_article_comments(id).await?;

    Ok(web::Json(
        comments
            .into_iter()
            .map(ArticleCommentResponseBody::from)
            .collect(),
    ))
}

/// Attach a comment to an article.
///
/// The write is skipped with a server-side warning when the referenced
/// article or author does not exist, so acceptance does not guarantee a new
/// comment row.
#[utoipa::path(
    post,
    path = "/api/v1/article-comments",
    request_body = CreateArticleCommentRequestBody,
    responses(
        (status = 202, description = "Comment accepted"),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["article-comments"],
    operation_id = "createArticleComment"
)]
#[post("/article-comments")]
pub async fn create_article_comment(
    state: web::Data<HttpState>,
    payload: web::Json<CreateArticleCommentRequestBody>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let dto = ArticleCommentDto {
        id: None,
        article_id: ArticleId::new(payload.article_id),
        user_account: payload.username.map(author_ref),
        content: Some(payload.content),
        created_at: None,
        created_by: None,
        modified_at: None,
        modified_by: None,
    };

    state.article_comments.save_article_comment(dto).await?;

    Ok(HttpResponse::Accepted().finish())
}

/// Replace a comment's content.
///
/// Updates referencing a missing comment are dropped with a server-side
/// warning rather than failing.
#[utoipa::path(
    put,
    path = "/api/v1/article-comments/{comment_id}",
    request_body = UpdateArticleCommentRequestBody,
    params(
        ("comment_id" = i64, Path, description = "Comment identifier")
    ),
    responses(
        (status = 204, description = "Update accepted"),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["article-comments"],
    operation_id = "updateArticleComment"
)]
#[put("/article-comments/{comment_id}")]
pub async fn update_article_comment(
    state: web::Data<HttpState>,
    path: web::Path<CommentPath>,
    payload: web::Json<UpdateArticleCommentRequestBody>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let dto = ArticleCommentDto {
        id: Some(ArticleCommentId::new(path.into_inner().comment_id)),
        article_id: ArticleId::new(payload.article_id),
        user_account: None,
        content: payload.content,
        created_at: None,
        created_by: None,
        modified_at: None,
        modified_by: None,
    };

    state.article_comments.update_article_comment(dto).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Delete a comment.
#[utoipa::path(
    delete,
    path = "/api/v1/article-comments/{comment_id}",
    params(
        ("comment_id" = i64, Path, description = "Comment identifier")
    ),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["article-comments"],
    operation_id = "deleteArticleComment"
)]
#[delete("/article-comments/{comment_id}")]
pub async fn delete_article_comment(
    state: web::Data<HttpState>,
    path: web::Path<CommentPath>,
) -> ApiResult<HttpResponse> {
    let id = ArticleCommentId::new(path.into_inner().comment_id);
    state.article_comments.delete_article_comment(id).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "article_comments_tests.rs"]
mod tests;
