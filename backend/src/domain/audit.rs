//! Audit metadata recorded on every persisted row.
//!
//! The original system populated these columns through a listener that fired
//! on persist. Here the stamping is explicit: persistence adapters call
//! [`AuditStamp::create`] immediately before an insert and [`AuditStamp::touch`]
//! immediately before an update. The store itself carries no column defaults,
//! so a row without a stamp cannot be written.

use chrono::{DateTime, Utc};

/// Principal recorded when no acting user is known, such as update and delete
/// paths where authentication is out of scope.
pub const SYSTEM_PRINCIPAL: &str = "system";

/// Creation and modification metadata attached to persisted entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditStamp {
    /// When the row was first persisted.
    pub created_at: DateTime<Utc>,
    /// Principal that created the row.
    pub created_by: String,
    /// When the row was last written.
    pub modified_at: DateTime<Utc>,
    /// Principal that last wrote the row.
    pub modified_by: String,
}

impl AuditStamp {
    /// Stamp for a row being persisted for the first time. Both sides carry
    /// the same instant and principal.
    #[must_use]
    pub fn create(principal: &str) -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            created_by: principal.to_owned(),
            modified_at: now,
            modified_by: principal.to_owned(),
        }
    }

    /// Refresh the modification side ahead of an update, leaving the creation
    /// side untouched.
    pub fn touch(&mut self, principal: &str) {
        self.modified_at = Utc::now();
        self.modified_by = principal.to_owned();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_stamps_both_sides_identically() {
        let stamp = AuditStamp::create("uno");
        assert_eq!(stamp.created_at, stamp.modified_at);
        assert_eq!(stamp.created_by, "uno");
        assert_eq!(stamp.modified_by, "uno");
    }

    #[test]
    fn touch_moves_only_the_modification_side() {
        let mut stamp = AuditStamp::create("uno");
        let created_at = stamp.created_at;

        stamp.touch(SYSTEM_PRINCIPAL);

        assert_eq!(stamp.created_at, created_at);
        assert_eq!(stamp.created_by, "uno");
        assert_eq!(stamp.modified_by, SYSTEM_PRINCIPAL);
        assert!(stamp.modified_at >= created_at);
    }
}
