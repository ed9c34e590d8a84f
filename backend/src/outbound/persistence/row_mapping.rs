//! Shared conversions from Diesel rows to domain entities.
//!
//! Every column maps directly onto a domain field, so the conversions are
//! infallible. Joined author rows are converted once and threaded into the
//! owning entity.

use crate::domain::{
    Article, ArticleComment, ArticleCommentId, ArticleId, AuditStamp, UserAccount, UserAccountId,
};

use super::models::{ArticleCommentRow, ArticleRow, UserAccountRow};

/// Convert a user account row into the domain entity.
pub(crate) fn account_from_row(row: UserAccountRow) -> UserAccount {
    UserAccount {
        id: UserAccountId::new(row.id),
        username: row.username,
        password_hash: row.password_hash,
        email: row.email,
        nickname: row.nickname,
        memo: row.memo,
        audit: AuditStamp {
            created_at: row.created_at,
            created_by: row.created_by,
            modified_at: row.modified_at,
            modified_by: row.modified_by,
        },
    }
}

/// Combine an article row with its already-converted author.
pub(crate) fn article_from_row(row: ArticleRow, author: UserAccount) -> Article {
    Article {
        id: ArticleId::new(row.id),
        author,
        title: row.title,
        content: row.content,
        hashtag: row.hashtag,
        audit: AuditStamp {
            created_at: row.created_at,
            created_by: row.created_by,
            modified_at: row.modified_at,
            modified_by: row.modified_by,
        },
    }
}

/// Combine a comment row with its optional author.
pub(crate) fn comment_from_row(
    row: ArticleCommentRow,
    author: Option<UserAccount>,
) -> ArticleComment {
    ArticleComment {
        id: ArticleCommentId::new(row.id),
        article_id: ArticleId::new(row.article_id),
        author,
        content: row.content,
        audit: AuditStamp {
            created_at: row.created_at,
            created_by: row.created_by,
            modified_at: row.modified_at,
            modified_by: row.modified_by,
        },
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rstest::rstest;

    use super::*;

    fn account_row(id: i64) -> UserAccountRow {
        let now = Utc::now();
        UserAccountRow {
            id,
            username: "uno".into(),
            password_hash: "hash".into(),
            email: Some("uno@example.com".into()),
            nickname: Some("Uno".into()),
            memo: None,
            created_at: now,
            created_by: "uno".into(),
            modified_at: now,
            modified_by: "uno".into(),
        }
    }

    #[rstest]
    fn account_conversion_keeps_audit_fields() {
        let account = account_from_row(account_row(7));

        assert_eq!(account.id, UserAccountId::new(7));
        assert_eq!(account.audit.created_by, "uno");
        assert_eq!(account.nickname.as_deref(), Some("Uno"));
    }

    #[rstest]
    fn article_conversion_attaches_the_author() {
        let now = Utc::now();
        let row = ArticleRow {
            id: 3,
            user_account_id: 7,
            title: "title".into(),
            content: "content".into(),
            hashtag: Some("#java".into()),
            created_at: now,
            created_by: "uno".into(),
            modified_at: now,
            modified_by: "system".into(),
        };

        let article = article_from_row(row, account_from_row(account_row(7)));

        assert_eq!(article.id, ArticleId::new(3));
        assert_eq!(article.author.id, UserAccountId::new(7));
        assert_eq!(article.audit.modified_by, "system");
    }

    #[rstest]
    fn comment_conversion_allows_anonymous_rows() {
        let now = Utc::now();
        let row = ArticleCommentRow {
            id: 9,
            article_id: 3,
            user_account_id: None,
            content: "comment".into(),
            created_at: now,
            created_by: "system".into(),
            modified_at: now,
            modified_by: "system".into(),
        };

        let comment = comment_from_row(row, None);

        assert_eq!(comment.article_id, ArticleId::new(3));
        assert!(comment.author.is_none());
    }
}
