//! Comment attached to exactly one article.

use crate::domain::article::ArticleId;
use crate::domain::audit::AuditStamp;
use crate::domain::user_account::UserAccount;

/// Store-assigned identifier of an [`ArticleComment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleCommentId(i64);

impl ArticleCommentId {
    /// Wrap a raw store identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw store identifier.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl From<i64> for ArticleCommentId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for ArticleCommentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A comment below an article.
///
/// The owning article reference is mandatory; the author is optional and a
/// deleted or anonymous author leaves the comment in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleComment {
    /// Store-assigned identifier, immutable after first persist.
    pub id: ArticleCommentId,
    /// Owning article.
    pub article_id: ArticleId,
    /// Author, when one was recorded.
    pub author: Option<UserAccount>,
    /// Comment body.
    pub content: String,
    /// Creation and modification metadata.
    pub audit: AuditStamp,
}

/// A comment that has not been persisted yet, bound to an article whose
/// existence was checked by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticleComment {
    /// Owning article.
    pub article_id: ArticleId,
    /// Resolved author, when the caller named one.
    pub author: Option<UserAccount>,
    /// Comment body.
    pub content: String,
}
