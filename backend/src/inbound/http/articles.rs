//! Article HTTP handlers.
//!
//! ```text
//! GET    /api/v1/articles
//! GET    /api/v1/articles/{article_id}
//! POST   /api/v1/articles
//! PUT    /api/v1/articles/{article_id}
//! DELETE /api/v1/articles/{article_id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use pagination::{DEFAULT_PAGE_SIZE, Page, PageRequest};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{
    ApiResult, ArticleDto, ArticleId, ArticleUpdateDto, ArticleWithCommentsDto, Error, SearchType,
    UserAccountDto,
};
use crate::inbound::http::article_comments::ArticleCommentResponseBody;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::user_accounts::UserAccountResponseBody;

/// Query string for the article search endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSearchQuery {
    pub search_type: Option<SearchType>,
    pub search_keyword: Option<String>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

/// Request payload for creating an article.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequestBody {
    /// Username of the authoring account.
    pub username: String,
    pub title: String,
    pub content: String,
    pub hashtag: Option<String>,
}

/// Request payload for a partial article update; absent fields keep their
/// stored value.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleRequestBody {
    pub title: Option<String>,
    pub content: Option<String>,
    pub hashtag: Option<String>,
}

/// Article response payload.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponseBody {
    pub id: Option<i64>,
    pub user_account: UserAccountResponseBody,
    pub title: String,
    pub content: String,
    pub hashtag: Option<String>,
    #[schema(format = "date-time")]
    pub created_at: Option<String>,
    pub created_by: Option<String>,
    #[schema(format = "date-time")]
    pub modified_at: Option<String>,
    pub modified_by: Option<String>,
}

impl From<ArticleDto> for ArticleResponseBody {
    fn from(value: ArticleDto) -> Self {
        Self {
            id: value.id.map(ArticleId::into_inner),
            user_account: UserAccountResponseBody::from(value.user_account),
            title: value.title,
            content: value.content,
            hashtag: value.hashtag,
            created_at: value.created_at.map(|at| at.to_rfc3339()),
            created_by: value.created_by,
            modified_at: value.modified_at.map(|at| at.to_rfc3339()),
            modified_by: value.modified_by,
        }
    }
}

/// One page of articles plus paging totals.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePageResponseBody {
    pub items: Vec<ArticleResponseBody>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl From<Page<ArticleDto>> for ArticlePageResponseBody {
    fn from(page: Page<ArticleDto>) -> Self {
        let page_index = page.page();
        let size = page.size();
        let total_elements = page.total_elements();
        let total_pages = page.total_pages();
        Self {
            items: page
                .into_items()
                .into_iter()
                .map(ArticleResponseBody::from)
                .collect(),
            page: page_index,
            size,
            total_elements,
            total_pages,
        }
    }
}

/// Article detail response payload including its comments, oldest first.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDetailResponseBody {
    pub id: i64,
    pub user_account: UserAccountResponseBody,
    pub title: String,
    pub content: String,
    pub hashtag: Option<String>,
    #[schema(format = "date-time")]
    pub created_at: String,
    pub created_by: String,
    #[schema(format = "date-time")]
    pub modified_at: String,
    pub modified_by: String,
    pub comments: Vec<ArticleCommentResponseBody>,
}

impl From<ArticleWithCommentsDto> for ArticleDetailResponseBody {
    fn from(value: ArticleWithCommentsDto) -> Self {
        Self {
            id: value.id.into_inner(),
            user_account: UserAccountResponseBody::from(value.user_account),
            title: value.title,
            content: value.content,
            hashtag: value.hashtag,
            created_at: value.created_at.to_rfc3339(),
            created_by: value.created_by,
            modified_at: value.modified_at.to_rfc3339(),
            modified_by: value.modified_by,
            comments: value
                .comments
                .into_iter()
                .map(ArticleCommentResponseBody::from)
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ArticlePath {
    article_id: i64,
}

/// Build a validated page request from optional query parameters.
pub(crate) fn parse_page_request(
    page: Option<u32>,
    size: Option<u32>,
) -> Result<PageRequest, Error> {
    let page = page.unwrap_or(0);
    let size = size.unwrap_or(DEFAULT_PAGE_SIZE);
    PageRequest::new(page, size).map_err(|source| {
        Error::invalid_request(source.to_string()).with_details(json!({
            "field": "size",
            "value": size,
            "code": "invalid_page_size",
        }))
    })
}

/// Minimal author reference; only the username is consulted when resolving
/// the authoring account.
pub(crate) fn author_ref(username: String) -> UserAccountDto {
    UserAccountDto {
        id: None,
        username,
        password_hash: String::new(),
        email: None,
        nickname: None,
        memo: None,
        created_at: None,
        created_by: None,
        modified_at: None,
        modified_by: None,
    }
}

/// Search articles, optionally filtered by one search dimension.
#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(
        ("searchType" = Option<String>, Query, description = "Search dimension: TITLE, CONTENT, HASHTAG or AUTHOR"),
        ("searchKeyword" = Option<String>, Query, description = "Keyword for the chosen dimension"),
        ("page" = Option<u32>, Query, description = "Zero-based page index"),
        ("size" = Option<u32>, Query, description = "Page size, at most 100")
    ),
    responses(
        (status = 200, description = "One page of articles", body = ArticlePageResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["articles"],
    operation_id = "searchArticles"
)]
#[get("/articles")]
pub async fn search_articles(
    state: web::Data<HttpState>,
    query: web::Query<ArticleSearchQuery>,
) -> ApiResult<web::Json<ArticlePageResponseBody>> {
    let query = query.into_inner();
    let page = parse_page_request(query.page, query.size)?;

    let articles = state
        .articles
        .search_articles(query.search_type, query.search_keyword, page)
        .await?;

    Ok(web::Json(ArticlePageResponseBody::from(articles)))
}

/// Fetch one article together with its comments.
#[utoipa::path(
    get,
    path = "/api/v1/articles/{article_id}",
    params(
        ("article_id" = i64, Path, description = "Article identifier")
    ),
    responses(
        (status = 200, description = "Article with comments", body = ArticleDetailResponseBody),
        (status = 404, description = "No article with that id", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["articles"],
    operation_id = "getArticle"
)]
#[get("/articles/{article_id}")]
pub async fn get_article(
    state: web::Data<HttpState>,
    path: web::Path<ArticlePath>,
) -> ApiResult<web::Json<ArticleDetailResponseBody>> {
    let id = ArticleId::new(path.into_inner().article_id);
    let article = state.articles.get_article(id).await?;

    Ok(web::Json(ArticleDetailResponseBody::from(article)))
}

/// Create a new article authored by an existing account.
#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequestBody,
    responses(
        (status = 201, description = "Article created"),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Author account does not exist", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["articles"],
    operation_id = "createArticle"
)]
#[post("/articles")]
pub async fn create_article(
    state: web::Data<HttpState>,
    payload: web::Json<CreateArticleRequestBody>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let dto = ArticleDto {
        id: None,
        user_account: author_ref(payload.username),
        title: payload.title,
        content: payload.content,
        hashtag: payload.hashtag,
        created_at: None,
        created_by: None,
        modified_at: None,
        modified_by: None,
    };

    state.articles.save_article(dto).await?;

    Ok(HttpResponse::Created().finish())
}

/// Update an article's populated fields.
///
/// Updates referencing a missing article are dropped with a server-side
/// warning rather than failing, so a 204 does not guarantee a write.
#[utoipa::path(
    put,
    path = "/api/v1/articles/{article_id}",
    request_body = UpdateArticleRequestBody,
    params(
        ("article_id" = i64, Path, description = "Article identifier")
    ),
    responses(
        (status = 204, description = "Update accepted"),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["articles"],
    operation_id = "updateArticle"
)]
#[put("/articles/{article_id}")]
pub async fn update_article(
    state: web::Data<HttpState>,
    path: web::Path<ArticlePath>,
    payload: web::Json<UpdateArticleRequestBody>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let dto = ArticleUpdateDto {
        id: ArticleId::new(path.into_inner().article_id),
        title: payload.title,
        content: payload.content,
        hashtag: payload.hashtag,
    };

    state.articles.update_article(dto).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Delete an article and its comments.
#[utoipa::path(
    delete,
    path = "/api/v1/articles/{article_id}",
    params(
        ("article_id" = i64, Path, description = "Article identifier")
    ),
    responses(
        (status = 204, description = "Article deleted"),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["articles"],
    operation_id = "deleteArticle"
)]
#[delete("/articles/{article_id}")]
pub async fn delete_article(
    state: web::Data<HttpState>,
    path: web::Path<ArticlePath>,
) -> ApiResult<HttpResponse> {
    let id = ArticleId::new(path.into_inner().article_id);
    state.articles.delete_article(id).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "articles_tests.rs"]
mod tests;
