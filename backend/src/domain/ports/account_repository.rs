//! Port abstraction for account persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Account, Credentials, MatricNumber, NewAccount, ProfileUpdate};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by account repository adapters.
    pub enum AccountPersistenceError {
        /// An account with the same matric number already exists.
        Duplicate { matric_number: String } =>
            "account repository rejected duplicate matric number: {matric_number}",
        /// Repository connection could not be established.
        Connection { message: String } => "account repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "account repository query failed: {message}",
    }
}

/// Driven port over the `users` table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Insert a new account, failing with `Duplicate` when the key exists.
    async fn insert(&self, account: &NewAccount) -> Result<(), AccountPersistenceError>;

    /// Fetch the account whose matric number and password both match exactly.
    async fn find_by_credentials(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<Account>, AccountPersistenceError>;

    /// Fetch an account by matric number.
    async fn find_by_matric_number(
        &self,
        matric_number: &MatricNumber,
    ) -> Result<Option<Account>, AccountPersistenceError>;

    /// Overwrite every profile field of the matching account.
    ///
    /// Returns the number of affected rows; zero means no account matched.
    async fn update_profile(&self, update: &ProfileUpdate)
    -> Result<usize, AccountPersistenceError>;
}
