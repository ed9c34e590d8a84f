//! Port for user account persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{AuditStamp, NewUserAccount, UserAccount, UserAccountId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user account repository adapters.
    pub enum UserAccountRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "user account repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "user account repository query failed: {message}",
        /// Username is already taken.
        Duplicate { username: String } =>
            "user account {username} already exists",
    }
}

/// Port for registering and looking up user accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserAccountRepository: Send + Sync {
    /// Insert an account and return the stored row with its assigned id.
    async fn save(&self, account: &NewUserAccount)
    -> Result<UserAccount, UserAccountRepositoryError>;

    /// Fetch an account by its unique username.
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserAccount>, UserAccountRepositoryError>;
}

/// Fixture implementation behaving like an empty account store.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserAccountRepository;

#[async_trait]
impl UserAccountRepository for FixtureUserAccountRepository {
    async fn save(
        &self,
        account: &NewUserAccount,
    ) -> Result<UserAccount, UserAccountRepositoryError> {
        Ok(UserAccount {
            id: UserAccountId::new(0),
            username: account.username.clone(),
            password_hash: account.password_hash.clone(),
            email: account.email.clone(),
            nickname: account.nickname.clone(),
            memo: account.memo.clone(),
            audit: AuditStamp::create(&account.username),
        })
    }

    async fn find_by_username(
        &self,
        _username: &str,
    ) -> Result<Option<UserAccount>, UserAccountRepositoryError> {
        Ok(None)
    }
}
