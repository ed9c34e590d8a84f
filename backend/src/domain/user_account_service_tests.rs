//! Tests for the user account service.

use std::sync::Arc;

use super::*;
use crate::domain::ports::MockUserAccountRepository;
use crate::domain::{AuditStamp, ErrorCode, UserAccount, UserAccountId};

fn registration() -> UserAccountDto {
    UserAccountDto {
        id: None,
        username: "uno".into(),
        password_hash: "hash".into(),
        email: Some("uno@example.com".into()),
        nickname: Some("Uno".into()),
        memo: None,
        created_at: None,
        created_by: None,
        modified_at: None,
        modified_by: None,
    }
}

fn stored_account() -> UserAccount {
    UserAccount {
        id: UserAccountId::new(1),
        username: "uno".into(),
        password_hash: "hash".into(),
        email: Some("uno@example.com".into()),
        nickname: Some("Uno".into()),
        memo: None,
        audit: AuditStamp::create("uno"),
    }
}

#[tokio::test]
async fn registration_returns_the_stored_account() {
    let mut accounts = MockUserAccountRepository::new();
    accounts
        .expect_save()
        .times(1)
        .withf(|new| new.username == "uno" && new.nickname.as_deref() == Some("Uno"))
        .return_once(|_| Ok(stored_account()));

    let service = UserAccountServiceImpl::new(Arc::new(accounts));
    let registered = service
        .register_user_account(registration())
        .await
        .expect("registration succeeds");

    assert_eq!(registered.id, Some(UserAccountId::new(1)));
    assert_eq!(registered.created_by.as_deref(), Some("uno"));
}

#[tokio::test]
async fn registration_rejects_blank_usernames() {
    let mut accounts = MockUserAccountRepository::new();
    accounts.expect_save().times(0);

    let service = UserAccountServiceImpl::new(Arc::new(accounts));
    let mut dto = registration();
    dto.username = "  ".into();
    let err = service
        .register_user_account(dto)
        .await
        .expect_err("blank username is invalid");

    assert_eq!(err.code, ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn duplicate_usernames_surface_as_conflict() {
    let mut accounts = MockUserAccountRepository::new();
    accounts
        .expect_save()
        .times(1)
        .return_once(|_| Err(UserAccountRepositoryError::duplicate("uno")));

    let service = UserAccountServiceImpl::new(Arc::new(accounts));
    let err = service
        .register_user_account(registration())
        .await
        .expect_err("username is taken");

    assert_eq!(err.code, ErrorCode::Conflict);
    assert!(err.message.contains("uno"));
}

#[tokio::test]
async fn lookup_returns_the_stored_account() {
    let mut accounts = MockUserAccountRepository::new();
    accounts
        .expect_find_by_username()
        .times(1)
        .withf(|username| username == "uno")
        .return_once(|_| Ok(Some(stored_account())));

    let service = UserAccountServiceImpl::new(Arc::new(accounts));
    let found = service
        .get_user_account("uno")
        .await
        .expect("account exists");

    assert_eq!(found.username, "uno");
    assert_eq!(found.nickname.as_deref(), Some("Uno"));
}

#[tokio::test]
async fn lookup_reports_the_missing_username() {
    let mut accounts = MockUserAccountRepository::new();
    accounts
        .expect_find_by_username()
        .times(1)
        .return_once(|_| Ok(None));

    let service = UserAccountServiceImpl::new(Arc::new(accounts));
    let err = service
        .get_user_account("duo")
        .await
        .expect_err("account is missing");

    assert_eq!(err.code, ErrorCode::NotFound);
    assert!(err.message.contains("duo"));
}

#[tokio::test]
async fn connection_errors_surface_as_service_unavailable() {
    let mut accounts = MockUserAccountRepository::new();
    accounts
        .expect_find_by_username()
        .times(1)
        .return_once(|_| Err(UserAccountRepositoryError::connection("pool exhausted")));

    let service = UserAccountServiceImpl::new(Arc::new(accounts));
    let err = service
        .get_user_account("uno")
        .await
        .expect_err("store is down");

    assert_eq!(err.code, ErrorCode::ServiceUnavailable);
}
