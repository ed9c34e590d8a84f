//! Board article aggregate root.

use crate::domain::audit::AuditStamp;
use crate::domain::user_account::UserAccount;

/// Store-assigned identifier of an [`Article`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(i64);

impl ArticleId {
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

impl From<i64> for ArticleId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A published article.
///
/// Owns its comments: deleting an article deletes every comment referencing
/// it in the same transaction. The title is non-empty by schema constraint;
/// the service layer does not re-validate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Store-assigned identifier, immutable after first persist.
    pub id: ArticleId,
    /// Resolved author account.
    pub author: UserAccount,
    /// Headline shown in listings and matched by title search.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Optional tag matched exactly by hashtag search.
    pub hashtag: Option<String>,
    /// Creation and modification metadata.
    pub audit: AuditStamp,
}

/// An article that has not been persisted yet. The author reference is
/// resolved before construction; an unresolved author never reaches this
/// type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    /// Resolved author account.
    pub author: UserAccount,
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Optional tag.
    pub hashtag: Option<String>,
}
