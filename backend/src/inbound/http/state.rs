//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ArticleCommentService, ArticleService, UserAccountService};

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use pinboard_backend::domain::ports::{
///     FixtureArticleCommentService, FixtureArticleService, FixtureUserAccountService,
/// };
/// use pinboard_backend::inbound::http::state::HttpState;
///
/// let state = HttpState::new(
///     Arc::new(FixtureArticleService),
///     Arc::new(FixtureArticleCommentService),
///     Arc::new(FixtureUserAccountService),
/// );
/// let _articles = state.articles.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    pub articles: Arc<dyn ArticleService>,
    pub article_comments: Arc<dyn ArticleCommentService>,
    pub user_accounts: Arc<dyn UserAccountService>,
}

impl HttpState {
    /// Construct state from the three driving ports.
    pub fn new(
        articles: Arc<dyn ArticleService>,
        article_comments: Arc<dyn ArticleCommentService>,
        user_accounts: Arc<dyn UserAccountService>,
    ) -> Self {
        Self {
            articles,
            article_comments,
            user_accounts,
        }
    }
}
