//! Driving port for account use-cases.
//!
//! Inbound adapters call it to register, authenticate, and update accounts
//! without importing the persistence layer, so handler tests can swap in a
//! double.

use async_trait::async_trait;

use crate::domain::{Account, Credentials, Error, NewAccount, ProfileUpdate};

/// Domain use-case port for accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountCommand: Send + Sync {
    /// Register a new account.
    async fn register(&self, account: NewAccount) -> Result<(), Error>;

    /// Return the account matching `credentials`, or a `NotFound` error.
    async fn authenticate(&self, credentials: &Credentials) -> Result<Account, Error>;

    /// Replace profile fields, returning the affected row count.
    async fn update_profile(&self, update: ProfileUpdate) -> Result<usize, Error>;
}
