//! User account domain service implementing the account driving port.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    UserAccountRepository, UserAccountRepositoryError, UserAccountService,
};
use crate::domain::{Error, UserAccountDto};

fn map_account_error(error: UserAccountRepositoryError) -> Error {
    match error {
        UserAccountRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("user account repository unavailable: {message}"))
        }
        UserAccountRepositoryError::Query { message } => {
            Error::internal(format!("user account repository error: {message}"))
        }
        UserAccountRepositoryError::Duplicate { username } => {
            Error::conflict(format!("user account {username} already exists"))
        }
    }
}

/// User account service implementing the account driving port.
#[derive(Clone)]
pub struct UserAccountServiceImpl<U> {
    accounts: Arc<U>,
}

impl<U> UserAccountServiceImpl<U> {
    /// Create a new service over the account repository.
    pub fn new(accounts: Arc<U>) -> Self {
        Self { accounts }
    }
}

#[async_trait]
impl<U> UserAccountService for UserAccountServiceImpl<U>
where
    U: UserAccountRepository,
{
    async fn register_user_account(&self, dto: UserAccountDto) -> Result<UserAccountDto, Error> {
        if dto.username.trim().is_empty() {
            return Err(Error::invalid_request("username must not be empty"));
        }

        let registered = self
            .accounts
            .save(&dto.to_entity())
            .await
            .map_err(map_account_error)?;

        Ok(UserAccountDto::from(registered))
    }

    async fn get_user_account(&self, username: &str) -> Result<UserAccountDto, Error> {
        let account = self
            .accounts
            .find_by_username(username)
            .await
            .map_err(map_account_error)?
            .ok_or_else(|| Error::not_found(format!("user account {username} not found")))?;

        Ok(UserAccountDto::from(account))
    }
}

#[cfg(test)]
#[path = "user_account_service_tests.rs"]
mod tests;
