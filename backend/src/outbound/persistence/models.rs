//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use crate::domain::{AccountProfile, NewAccount};

use super::schema::{orders, users};

/// Row struct for reading from the users table. The password column is never
/// selected.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct AccountRow {
    pub matric_number: String,
    pub name: String,
    pub department: String,
    pub college: String,
    pub level: String,
    pub hostel: String,
}

/// Insertable struct for creating new account records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewAccountRow<'a> {
    pub matric_number: &'a str,
    pub name: &'a str,
    pub department: &'a str,
    pub college: &'a str,
    pub level: &'a str,
    pub hostel: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a NewAccount> for NewAccountRow<'a> {
    fn from(account: &'a NewAccount) -> Self {
        let profile = &account.profile;
        Self {
            matric_number: account.matric_number.as_ref(),
            name: &profile.name,
            department: &profile.department,
            college: &profile.college,
            level: &profile.level,
            hostel: &profile.hostel,
            password: account.password.expose(),
        }
    }
}

/// Changeset replacing all five profile columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct ProfileChangeset<'a> {
    pub name: &'a str,
    pub department: &'a str,
    pub college: &'a str,
    pub level: &'a str,
    pub hostel: &'a str,
}

impl<'a> From<&'a AccountProfile> for ProfileChangeset<'a> {
    fn from(profile: &'a AccountProfile) -> Self {
        Self {
            name: &profile.name,
            department: &profile.department,
            college: &profile.college,
            level: &profile.level,
            hostel: &profile.hostel,
        }
    }
}

/// Row struct for reading from the orders table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct OrderRow {
    pub id: i64,
    pub matric_number: String,
    pub foods: String,
}

/// Insertable struct for new orders; `id` is assigned by SQLite.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = orders)]
pub(crate) struct NewOrderRow<'a> {
    pub matric_number: &'a str,
    pub foods: String,
}
