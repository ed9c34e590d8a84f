//! Driving port for the user account use cases.

use async_trait::async_trait;

use crate::domain::{Error, UserAccountDto, UserAccountId};

/// Driving port for account registration and lookup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserAccountService: Send + Sync {
    /// Register a new account and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] with `Conflict` when the username is already taken
    /// and `InvalidRequest` when the username is blank.
    async fn register_user_account(&self, dto: UserAccountDto) -> Result<UserAccountDto, Error>;

    /// Fetch an account by its unique username.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] with `NotFound` naming the username when no such
    /// account exists.
    async fn get_user_account(&self, username: &str) -> Result<UserAccountDto, Error>;
}

/// Fixture implementation behaving like an empty account store.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserAccountService;

#[async_trait]
impl UserAccountService for FixtureUserAccountService {
    async fn register_user_account(&self, dto: UserAccountDto) -> Result<UserAccountDto, Error> {
        Ok(UserAccountDto {
            id: Some(UserAccountId::new(0)),
            ..dto
        })
    }

    async fn get_user_account(&self, username: &str) -> Result<UserAccountDto, Error> {
        Err(Error::not_found(format!(
            "user account {username} not found"
        )))
    }
}
