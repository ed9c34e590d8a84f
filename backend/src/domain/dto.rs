//! Data transfer shapes exchanged between the HTTP layer and the services.
//!
//! DTOs mirror the domain entities but keep identifiers and audit fields
//! optional so the same shape serves both directions: inbound payloads omit
//! store-assigned values, outbound payloads carry them.

use crate::domain::{
    Article, ArticleComment, ArticleCommentId, ArticleId, NewArticle, NewUserAccount, UserAccount,
    UserAccountId,
};
use chrono::{DateTime, Utc};

/// User account as seen by transport adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccountDto {
    /// Store-assigned identifier, absent on registration.
    pub id: Option<UserAccountId>,
    /// Unique login name.
    pub username: String,
    /// Hashed credential.
    pub password_hash: String,
    /// Contact address, if provided.
    pub email: Option<String>,
    /// Display name, if provided.
    pub nickname: Option<String>,
    /// Free-form note, if provided.
    pub memo: Option<String>,
    /// Creation instant, absent on inbound payloads.
    pub created_at: Option<DateTime<Utc>>,
    /// Principal that created the account, absent on inbound payloads.
    pub created_by: Option<String>,
    /// Last modification instant, absent on inbound payloads.
    pub modified_at: Option<DateTime<Utc>>,
    /// Principal behind the last modification, absent on inbound payloads.
    pub modified_by: Option<String>,
}

impl UserAccountDto {
    /// Builds the insertable entity for registration.
    #[must_use]
    pub fn to_entity(&self) -> NewUserAccount {
        NewUserAccount {
            username: self.username.clone(),
            password_hash: self.password_hash.clone(),
            email: self.email.clone(),
            nickname: self.nickname.clone(),
            memo: self.memo.clone(),
        }
    }
}

impl From<UserAccount> for UserAccountDto {
    fn from(entity: UserAccount) -> Self {
        Self {
            id: Some(entity.id),
            username: entity.username,
            password_hash: entity.password_hash,
            email: entity.email,
            nickname: entity.nickname,
            memo: entity.memo,
            created_at: Some(entity.audit.created_at),
            created_by: Some(entity.audit.created_by),
            modified_at: Some(entity.audit.modified_at),
            modified_by: Some(entity.audit.modified_by),
        }
    }
}

/// Article as seen by transport adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDto {
    /// Store-assigned identifier, absent on creation.
    pub id: Option<ArticleId>,
    /// Authoring account; only its `username` is consulted on writes.
    pub user_account: UserAccountDto,
    /// Article title.
    pub title: String,
    /// Article body.
    pub content: String,
    /// Optional topic tag.
    pub hashtag: Option<String>,
    /// Creation instant, absent on inbound payloads.
    pub created_at: Option<DateTime<Utc>>,
    /// Principal that created the article, absent on inbound payloads.
    pub created_by: Option<String>,
    /// Last modification instant, absent on inbound payloads.
    pub modified_at: Option<DateTime<Utc>>,
    /// Principal behind the last modification, absent on inbound payloads.
    pub modified_by: Option<String>,
}

impl ArticleDto {
    /// Builds the insertable entity once the author account is resolved.
    #[must_use]
    pub fn to_entity(&self, author: UserAccount) -> NewArticle {
        NewArticle {
            author,
            title: self.title.clone(),
            content: self.content.clone(),
            hashtag: self.hashtag.clone(),
        }
    }
}

impl From<Article> for ArticleDto {
    fn from(entity: Article) -> Self {
        Self {
            id: Some(entity.id),
            user_account: entity.author.into(),
            title: entity.title,
            content: entity.content,
            hashtag: entity.hashtag,
            created_at: Some(entity.audit.created_at),
            created_by: Some(entity.audit.created_by),
            modified_at: Some(entity.audit.modified_at),
            modified_by: Some(entity.audit.modified_by),
        }
    }
}

/// Partial article update; `None` fields keep their stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleUpdateDto {
    /// Identifier of the article to update.
    pub id: ArticleId,
    /// Replacement title, if any.
    pub title: Option<String>,
    /// Replacement body, if any.
    pub content: Option<String>,
    /// Replacement hashtag, if any.
    pub hashtag: Option<String>,
}

/// Article detail joined with its comments in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleWithCommentsDto {
    /// Article identifier.
    pub id: ArticleId,
    /// Authoring account.
    pub user_account: UserAccountDto,
    /// Article title.
    pub title: String,
    /// Article body.
    pub content: String,
    /// Optional topic tag.
    pub hashtag: Option<String>,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// Principal that created the article.
    pub created_by: String,
    /// Last modification instant.
    pub modified_at: DateTime<Utc>,
    /// Principal behind the last modification.
    pub modified_by: String,
    /// Comments attached to the article, oldest first.
    pub comments: Vec<ArticleCommentDto>,
}

impl ArticleWithCommentsDto {
    /// Combines an article with its already-ordered comments.
    #[must_use]
    pub fn from_entity(article: Article, comments: Vec<ArticleComment>) -> Self {
        Self {
            id: article.id,
            user_account: article.author.into(),
            title: article.title,
            content: article.content,
            hashtag: article.hashtag,
            created_at: article.audit.created_at,
            created_by: article.audit.created_by,
            modified_at: article.audit.modified_at,
            modified_by: article.audit.modified_by,
            comments: comments.into_iter().map(ArticleCommentDto::from).collect(),
        }
    }
}

/// Article comment as seen by transport adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCommentDto {
    /// Store-assigned identifier, absent on creation.
    pub id: Option<ArticleCommentId>,
    /// Parent article identifier.
    pub article_id: ArticleId,
    /// Commenting account; `None` for anonymous comments.
    pub user_account: Option<UserAccountDto>,
    /// Comment body; required on creation, optional on update.
    pub content: Option<String>,
    /// Creation instant, absent on inbound payloads.
    pub created_at: Option<DateTime<Utc>>,
    /// Principal that created the comment, absent on inbound payloads.
    pub created_by: Option<String>,
    /// Last modification instant, absent on inbound payloads.
    pub modified_at: Option<DateTime<Utc>>,
    /// Principal behind the last modification, absent on inbound payloads.
    pub modified_by: Option<String>,
}

impl From<ArticleComment> for ArticleCommentDto {
    fn from(entity: ArticleComment) -> Self {
        Self {
            id: Some(entity.id),
            article_id: entity.article_id,
            user_account: entity.author.map(UserAccountDto::from),
            content: Some(entity.content),
            created_at: Some(entity.audit.created_at),
            created_by: Some(entity.audit.created_by),
            modified_at: Some(entity.audit.modified_at),
            modified_by: Some(entity.audit.modified_by),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AuditStamp;
    use rstest::{fixture, rstest};

    #[fixture]
    fn author() -> UserAccount {
        UserAccount {
            id: UserAccountId::new(7),
            username: "uno".into(),
            password_hash: "hash".into(),
            email: Some("uno@example.com".into()),
            nickname: Some("Uno".into()),
            memo: None,
            audit: AuditStamp::create("uno"),
        }
    }

    #[rstest]
    fn user_account_round_trips_through_dto(author: UserAccount) {
        let dto = UserAccountDto::from(author.clone());
        assert_eq!(dto.id, Some(author.id));
        assert_eq!(dto.username, author.username);
        assert_eq!(dto.created_by.as_deref(), Some("uno"));

        let entity = dto.to_entity();
        assert_eq!(entity.username, author.username);
        assert_eq!(entity.nickname.as_deref(), Some("Uno"));
    }

    #[rstest]
    fn article_dto_reflects_entity_fields(author: UserAccount) {
        let article = Article {
            id: ArticleId::new(11),
            author: author.clone(),
            title: "title".into(),
            content: "content".into(),
            hashtag: Some("#java".into()),
            audit: AuditStamp::create("uno"),
        };
        let dto = ArticleDto::from(article.clone());
        assert_eq!(dto.id, Some(ArticleId::new(11)));
        assert_eq!(dto.user_account.username, "uno");
        assert_eq!(dto.hashtag.as_deref(), Some("#java"));

        let entity = dto.to_entity(author);
        assert_eq!(entity.title, "title");
        assert_eq!(entity.author.username, "uno");
    }

    #[rstest]
    fn detail_dto_keeps_comment_order(author: UserAccount) {
        let article = Article {
            id: ArticleId::new(3),
            author: author.clone(),
            title: "title".into(),
            content: "content".into(),
            hashtag: None,
            audit: AuditStamp::create("uno"),
        };
        let comments = vec![
            ArticleComment {
                id: ArticleCommentId::new(1),
                article_id: article.id,
                author: Some(author.clone()),
                content: "first".into(),
                audit: AuditStamp::create("uno"),
            },
            ArticleComment {
                id: ArticleCommentId::new(2),
                article_id: article.id,
                author: None,
                content: "second".into(),
                audit: AuditStamp::create("system"),
            },
        ];

        let detail = ArticleWithCommentsDto::from_entity(article, comments);
        let ids: Vec<_> = detail.comments.iter().filter_map(|c| c.id).collect();
        assert_eq!(ids, vec![ArticleCommentId::new(1), ArticleCommentId::new(2)]);
        assert!(detail.comments[1].user_account.is_none());
    }

    #[test]
    fn comment_dto_preserves_anonymous_author() {
        let comment = ArticleComment {
            id: ArticleCommentId::new(9),
            article_id: ArticleId::new(3),
            author: None,
            content: "drive-by".into(),
            audit: AuditStamp::create("system"),
        };
        let dto = ArticleCommentDto::from(comment);
        assert!(dto.user_account.is_none());
        assert_eq!(dto.content.as_deref(), Some("drive-by"));
    }
}
