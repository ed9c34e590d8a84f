//! Author identity referenced by articles and comments.

use crate::domain::audit::AuditStamp;

/// Store-assigned identifier of a [`UserAccount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserAccountId(i64);

impl UserAccountId {
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

impl From<i64> for UserAccountId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for UserAccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered author.
///
/// Articles reference an account as a weak back reference; deleting an
/// article never touches its author. The credential hash is opaque to this
/// service; authentication happens elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    /// Store-assigned identifier, immutable after first persist.
    pub id: UserAccountId,
    /// Unique login name.
    pub username: String,
    /// Opaque credential hash supplied by the authentication layer.
    pub password_hash: String,
    /// Contact address, if provided.
    pub email: Option<String>,
    /// Public display name used by author search.
    pub nickname: Option<String>,
    /// Free-form operator note.
    pub memo: Option<String>,
    /// Creation and modification metadata.
    pub audit: AuditStamp,
}

/// An account that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserAccount {
    /// Unique login name.
    pub username: String,
    /// Opaque credential hash.
    pub password_hash: String,
    /// Contact address, if provided.
    pub email: Option<String>,
    /// Public display name.
    pub nickname: Option<String>,
    /// Free-form operator note.
    pub memo: Option<String>,
}
