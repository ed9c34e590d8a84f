//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: All HTTP endpoints from the inbound layer (articles, article
//!   comments, user accounts, health)
//! - **Schemas**: Request and response bodies plus the domain error wrappers
//!   ([`ErrorSchema`], [`ErrorCodeSchema`]) that provide OpenAPI definitions
//!   without coupling domain types to the utoipa framework
//!
//! The generated specification is served by Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::article_comments::{
    ArticleCommentResponseBody, CreateArticleCommentRequestBody, UpdateArticleCommentRequestBody,
};
use crate::inbound::http::articles::{
    ArticleDetailResponseBody, ArticlePageResponseBody, ArticleResponseBody,
    CreateArticleRequestBody, UpdateArticleRequestBody,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::user_accounts::{RegisterUserAccountRequestBody, UserAccountResponseBody};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pinboard backend API",
        description = "HTTP interface for board articles, their comments, and author accounts.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::articles::search_articles,
        crate::inbound::http::articles::get_article,
        crate::inbound::http::articles::create_article,
        crate::inbound::http::articles::update_article,
        crate::inbound::http::articles::delete_article,
        crate::inbound::http::article_comments::list_article_comments,
        crate::inbound::http::article_comments::create_article_comment,
        crate::inbound::http::article_comments::update_article_comment,
        crate::inbound::http::article_comments::delete_article_comment,
        crate::inbound::http::user_accounts::register_user_account,
        crate::inbound::http::user_accounts::get_user_account,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ArticleResponseBody,
        ArticlePageResponseBody,
        ArticleDetailResponseBody,
        CreateArticleRequestBody,
        UpdateArticleRequestBody,
        ArticleCommentResponseBody,
        CreateArticleCommentRequestBody,
        UpdateArticleCommentRequestBody,
        RegisterUserAccountRequestBody,
        UserAccountResponseBody,
        ErrorSchema,
        ErrorCodeSchema,
    )),
    tags(
        (name = "articles", description = "Board articles"),
        (name = "article-comments", description = "Comments below articles"),
        (name = "user-accounts", description = "Author accounts"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI schema field structure.

    use utoipa::OpenApi;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::*;

    // Note: utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn openapi_error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
    }

    #[test]
    fn openapi_article_page_schema_has_paging_envelope() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let page_schema = schemas
            .get("ArticlePageResponseBody")
            .expect("page schema");

        assert_object_schema_has_field(page_schema, "items");
        assert_object_schema_has_field(page_schema, "totalElements");
        assert_object_schema_has_field(page_schema, "totalPages");
    }

    #[test]
    fn openapi_lists_every_board_endpoint() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/api/v1/articles",
            "/api/v1/articles/{article_id}",
            "/api/v1/articles/{article_id}/comments",
            "/api/v1/article-comments",
            "/api/v1/article-comments/{comment_id}",
            "/api/v1/user-accounts",
            "/api/v1/user-accounts/{username}",
            "/health/ready",
            "/health/live",
        ] {
            assert!(paths.contains_key(path), "missing path {path}");
        }
    }
}
