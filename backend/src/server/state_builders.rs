//! Builders selecting repository-backed services or fixture fallbacks.

use std::sync::Arc;

use actix_web::web;

use pinboard_backend::domain::ports::{
    ArticleCommentService, ArticleService, FixtureArticleCommentService, FixtureArticleService,
    FixtureUserAccountService, UserAccountService,
};
use pinboard_backend::domain::{
    ArticleCommentServiceImpl, ArticleServiceImpl, UserAccountServiceImpl,
};
use pinboard_backend::inbound::http::state::HttpState;
use pinboard_backend::outbound::persistence::{
    DieselArticleCommentRepository, DieselArticleRepository, DieselUserAccountRepository,
};

use super::ServerConfig;

/// Construct the three board services, selecting Diesel-backed
/// implementations when `config.db_pool` is present and fixtures otherwise.
///
/// The Diesel repositories are shared between services so article, comment,
/// and account use cases observe the same pool.
fn build_board_services(
    config: &ServerConfig,
) -> (
    Arc<dyn ArticleService>,
    Arc<dyn ArticleCommentService>,
    Arc<dyn UserAccountService>,
) {
    match &config.db_pool {
        Some(pool) => {
            let articles = Arc::new(DieselArticleRepository::new(pool.clone()));
            let comments = Arc::new(DieselArticleCommentRepository::new(pool.clone()));
            let accounts = Arc::new(DieselUserAccountRepository::new(pool.clone()));
            (
                Arc::new(ArticleServiceImpl::new(
                    articles.clone(),
                    comments.clone(),
                    accounts.clone(),
                )),
                Arc::new(ArticleCommentServiceImpl::new(
                    comments,
                    articles,
                    accounts.clone(),
                )),
                Arc::new(UserAccountServiceImpl::new(accounts)),
            )
        }
        None => (
            Arc::new(FixtureArticleService),
            Arc::new(FixtureArticleCommentService),
            Arc::new(FixtureUserAccountService),
        ),
    }
}

/// Build the shared HTTP state from configured ports and fixture fallbacks.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let (articles, article_comments, user_accounts) = build_board_services(config);
    web::Data::new(HttpState::new(articles, article_comments, user_accounts))
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;
    use std::time::Duration;

    use pagination::PageRequest;
    use pinboard_backend::domain::{ArticleId, ErrorCode};
    use pinboard_backend::outbound::persistence::{DbPool, PoolConfig};
    use rstest::rstest;

    use super::*;

    fn pool_less_config() -> ServerConfig {
        ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 0)))
    }

    #[rstest]
    #[tokio::test]
    async fn missing_pool_selects_fixture_services() {
        let state = build_http_state(&pool_less_config());

        let page = state
            .articles
            .search_articles(None, None, PageRequest::default())
            .await
            .expect("fixture search should succeed");
        assert!(page.items().is_empty());

        let missing = state
            .articles
            .get_article(ArticleId::new(7))
            .await
            .expect_err("fixture board holds no articles");
        assert_eq!(missing.code, ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_registration_echoes_the_account() {
        let state = build_http_state(&pool_less_config());

        let registered = state
            .user_accounts
            .register_user_account(pinboard_backend::domain::UserAccountDto {
                id: None,
                username: "uno".into(),
                password_hash: "hash".into(),
                email: None,
                nickname: None,
                memo: None,
                created_at: None,
                created_by: None,
                modified_at: None,
                modified_by: None,
            })
            .await
            .expect("fixture registration should succeed");
        assert_eq!(registered.username, "uno");
        assert!(registered.id.is_some());
    }

    #[rstest]
    #[tokio::test]
    async fn configured_pool_selects_database_backed_services() {
        // bb8 establishes connections lazily, so building a pool against an
        // unreachable server succeeds and the first checkout fails instead.
        let pool_config = PoolConfig::new("postgres://127.0.0.1:1/pinboard")
            .with_connection_timeout(Duration::from_millis(250));
        let pool = DbPool::new(pool_config)
            .await
            .expect("pool should build without connecting");

        let config = pool_less_config().with_db_pool(pool);
        let state = build_http_state(&config);

        let outage = state
            .articles
            .search_articles(None, None, PageRequest::default())
            .await
            .expect_err("checkout against an unreachable server fails");
        assert_eq!(outage.code, ErrorCode::ServiceUnavailable);
    }
}
