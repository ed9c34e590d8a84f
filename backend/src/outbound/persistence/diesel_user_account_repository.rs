//! PostgreSQL-backed `UserAccountRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserAccountRepository, UserAccountRepositoryError};
use crate::domain::{AuditStamp, NewUserAccount, UserAccount};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewUserAccountRow, UserAccountRow};
use super::pool::{DbPool, PoolError};
use super::row_mapping::account_from_row;
use super::schema::user_accounts;

/// Diesel-backed implementation of the user account repository port.
#[derive(Clone)]
pub struct DieselUserAccountRepository {
    pool: DbPool,
}

impl DieselUserAccountRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain repository errors.
fn map_pool_error(error: PoolError) -> UserAccountRepositoryError {
    map_basic_pool_error(error, UserAccountRepositoryError::connection)
}

/// Map Diesel errors to domain repository errors.
fn map_diesel_error(error: diesel::result::Error) -> UserAccountRepositoryError {
    map_basic_diesel_error(
        error,
        UserAccountRepositoryError::query,
        UserAccountRepositoryError::connection,
    )
}

/// Map insert failures, turning a unique violation on the username into the
/// dedicated duplicate error.
fn map_save_error(username: &str, error: diesel::result::Error) -> UserAccountRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    if let DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) = &error {
        return UserAccountRepositoryError::duplicate(username);
    }
    map_diesel_error(error)
}

#[async_trait]
impl UserAccountRepository for DieselUserAccountRepository {
    async fn save(
        &self,
        account: &NewUserAccount,
    ) -> Result<UserAccount, UserAccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Audit stamping happens here, before the insert. Registrations are
        // stamped with the account's own username.
        let stamp = AuditStamp::create(&account.username);
        let new_row = NewUserAccountRow {
            username: &account.username,
            password_hash: &account.password_hash,
            email: account.email.as_deref(),
            nickname: account.nickname.as_deref(),
            memo: account.memo.as_deref(),
            created_at: stamp.created_at,
            created_by: &stamp.created_by,
            modified_at: stamp.modified_at,
            modified_by: &stamp.modified_by,
        };

        let row: UserAccountRow = diesel::insert_into(user_accounts::table)
            .values(&new_row)
            .returning(UserAccountRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_save_error(&account.username, err))?;

        Ok(account_from_row(row))
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserAccount>, UserAccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserAccountRow> = user_accounts::table
            .filter(user_accounts::username.eq(username))
            .select(UserAccountRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(account_from_row))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for error mapping.

    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn unique_violations_map_to_duplicate() {
        let diesel_err = DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key value violates unique constraint".to_owned()),
        );

        let repo_err = map_save_error("uno", diesel_err);

        assert_eq!(repo_err, UserAccountRepositoryError::duplicate("uno"));
    }

    #[rstest]
    fn other_database_errors_map_to_query() {
        let diesel_err = DieselError::DatabaseError(
            DatabaseErrorKind::NotNullViolation,
            Box::new("null value in column".to_owned()),
        );

        let repo_err = map_save_error("uno", diesel_err);

        assert!(matches!(repo_err, UserAccountRepositoryError::Query { .. }));
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let repo_err = map_pool_error(PoolError::build("bad url"));

        assert!(matches!(
            repo_err,
            UserAccountRepositoryError::Connection { .. }
        ));
    }
}
