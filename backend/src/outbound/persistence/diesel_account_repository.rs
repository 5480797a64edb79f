//! SQLite-backed `AccountRepository` implementation using Diesel ORM.
//!
//! Passwords are matched with SQL equality on the stored text, so sign-in is
//! a single filtered lookup.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AccountPersistenceError, AccountRepository};
use crate::domain::{Account, AccountProfile, Credentials, MatricNumber, NewAccount, ProfileUpdate};

use super::diesel_basic_error_mapping::{
    is_unique_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{AccountRow, NewAccountRow, ProfileChangeset};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `AccountRepository` port.
#[derive(Clone)]
pub struct DieselAccountRepository {
    pool: DbPool,
}

impl DieselAccountRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> AccountPersistenceError {
    map_basic_pool_error(error, AccountPersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> AccountPersistenceError {
    map_basic_diesel_error(
        error,
        AccountPersistenceError::query,
        AccountPersistenceError::connection,
    )
}

fn row_to_account(row: AccountRow) -> Result<Account, AccountPersistenceError> {
    let matric_number = MatricNumber::new(&row.matric_number).map_err(|err| {
        AccountPersistenceError::query(format!("stored account is invalid: {err}"))
    })?;
    let profile = AccountProfile {
        name: row.name,
        department: row.department,
        college: row.college,
        level: row.level,
        hostel: row.hostel,
    };
    Ok(Account::new(matric_number, profile))
}

#[async_trait]
impl AccountRepository for DieselAccountRepository {
    async fn insert(&self, account: &NewAccount) -> Result<(), AccountPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewAccountRow::from(account);
        diesel::insert_into(users::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| {
                if is_unique_violation(&err) {
                    AccountPersistenceError::duplicate(account.matric_number.as_ref())
                } else {
                    map_diesel_error(err)
                }
            })
    }

    async fn find_by_credentials(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<Account>, AccountPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<AccountRow> = users::table
            .filter(users::matric_number.eq(credentials.matric_number().as_ref()))
            .filter(users::password.eq(credentials.password().expose()))
            .select(AccountRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_account).transpose()
    }

    async fn find_by_matric_number(
        &self,
        matric_number: &MatricNumber,
    ) -> Result<Option<Account>, AccountPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<AccountRow> = users::table
            .filter(users::matric_number.eq(matric_number.as_ref()))
            .select(AccountRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_account).transpose()
    }

    async fn update_profile(
        &self,
        update: &ProfileUpdate,
    ) -> Result<usize, AccountPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changes = ProfileChangeset::from(&update.profile);
        diesel::update(users::table.filter(users::matric_number.eq(update.matric_number.as_ref())))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)
    }
}
