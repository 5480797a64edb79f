//! Account use-cases backed by the account repository port.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::ports::{AccountCommand, AccountPersistenceError, AccountRepository};
use super::{Account, Credentials, Error, NewAccount, ProfileUpdate};

/// Registers, authenticates, and updates accounts.
#[derive(Clone)]
pub struct AccountService {
    repository: Arc<dyn AccountRepository>,
}

impl AccountService {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<dyn AccountRepository>) -> Self {
        Self { repository }
    }
}

fn map_persistence_error(error: AccountPersistenceError) -> Error {
    match error {
        AccountPersistenceError::Duplicate { matric_number } => {
            Error::conflict(format!("matric number {matric_number} is already registered"))
        }
        AccountPersistenceError::Connection { message } => Error::service_unavailable(message),
        AccountPersistenceError::Query { message } => Error::internal(message),
    }
}

#[async_trait]
impl AccountCommand for AccountService {
    async fn register(&self, account: NewAccount) -> Result<(), Error> {
        self.repository
            .insert(&account)
            .await
            .map_err(map_persistence_error)
    }

    async fn authenticate(&self, credentials: &Credentials) -> Result<Account, Error> {
        self.repository
            .find_by_credentials(credentials)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| Error::not_found("no account matches these credentials"))
    }

    async fn update_profile(&self, update: ProfileUpdate) -> Result<usize, Error> {
        let rows = self
            .repository
            .update_profile(&update)
            .await
            .map_err(map_persistence_error)?;
        debug!(matric_number = %update.matric_number, rows, "profile update applied");
        Ok(rows)
    }
}
