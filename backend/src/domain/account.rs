//! Account data model.
//!
//! An account is keyed by its matric number; everything else is free text
//! that the profile update replaces wholesale.

use std::fmt;

use super::auth::Password;

/// Validation errors raised while building account inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    /// Matric number was missing or blank once trimmed.
    EmptyMatricNumber,
    /// Password was empty.
    EmptyPassword,
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMatricNumber => write!(f, "matricNumber must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for AccountValidationError {}

/// Student matric number identifying an account.
///
/// ## Invariants
/// - Stored trimmed and never empty.
///
/// # Examples
/// ```
/// use campus_food::domain::MatricNumber;
///
/// let matric = MatricNumber::new("  CSC/2019/001 ").expect("valid matric number");
/// assert_eq!(matric.as_ref(), "CSC/2019/001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatricNumber(String);

impl MatricNumber {
    /// Validate and construct a matric number from raw input.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, AccountValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(AccountValidationError::EmptyMatricNumber);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for MatricNumber {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for MatricNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Mutable free-text profile fields of an account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountProfile {
    pub name: String,
    pub department: String,
    pub college: String,
    pub level: String,
    pub hostel: String,
}

/// Stored account as read back from the record store.
///
/// The password never leaves the store on reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    matric_number: MatricNumber,
    profile: AccountProfile,
}

impl Account {
    /// Assemble an account from its parts.
    #[must_use]
    pub fn new(matric_number: MatricNumber, profile: AccountProfile) -> Self {
        Self {
            matric_number,
            profile,
        }
    }

    /// Primary key of the account.
    #[must_use]
    pub fn matric_number(&self) -> &MatricNumber {
        &self.matric_number
    }

    /// Profile fields.
    #[must_use]
    pub fn profile(&self) -> &AccountProfile {
        &self.profile
    }
}

/// Validated registration input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub matric_number: MatricNumber,
    pub profile: AccountProfile,
    pub password: Password,
}

impl NewAccount {
    /// Validate raw registration fields.
    pub fn try_from_parts(
        matric_number: &str,
        profile: AccountProfile,
        password: &str,
    ) -> Result<Self, AccountValidationError> {
        Ok(Self {
            matric_number: MatricNumber::new(matric_number)?,
            profile,
            password: Password::new(password)?,
        })
    }
}

/// Validated profile replacement for an existing matric number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub matric_number: MatricNumber,
    pub profile: AccountProfile,
}

impl ProfileUpdate {
    /// Validate raw profile update fields.
    pub fn try_from_parts(
        matric_number: &str,
        profile: AccountProfile,
    ) -> Result<Self, AccountValidationError> {
        Ok(Self {
            matric_number: MatricNumber::new(matric_number)?,
            profile,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn matric_number_rejects_blank_input(#[case] raw: &str) {
        assert_eq!(
            MatricNumber::new(raw),
            Err(AccountValidationError::EmptyMatricNumber)
        );
    }

    #[rstest]
    fn new_account_keeps_empty_profile_fields() {
        let account = NewAccount::try_from_parts("MAT001", AccountProfile::default(), "pw")
            .expect("profile fields may be empty");
        assert_eq!(account.matric_number.as_ref(), "MAT001");
        assert_eq!(account.profile, AccountProfile::default());
    }

    #[rstest]
    fn new_account_requires_password() {
        let err = NewAccount::try_from_parts("MAT001", AccountProfile::default(), "")
            .expect_err("empty password must fail");
        assert_eq!(err, AccountValidationError::EmptyPassword);
        assert_eq!(err.to_string(), "password must not be empty");
    }

    #[rstest]
    fn profile_update_trims_matric_number() {
        let update = ProfileUpdate::try_from_parts(" MAT002 ", AccountProfile::default())
            .expect("valid update");
        assert_eq!(update.matric_number.to_string(), "MAT002");
    }
}
