//! Authentication primitives such as sign-in credentials.
//!
//! Passwords are stored and compared as plain text; the sign-in contract is
//! that authentication succeeds iff the stored text equals the submitted text.
//! They are still held in zeroising buffers while in memory.

use zeroize::Zeroizing;

use super::account::{AccountValidationError, MatricNumber};

/// Caller-supplied password.
///
/// ## Invariants
/// - Never empty. Whitespace is preserved so comparisons stay exact.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Validate and wrap a raw password.
    pub fn new(raw: &str) -> Result<Self, AccountValidationError> {
        if raw.is_empty() {
            return Err(AccountValidationError::EmptyPassword);
        }
        Ok(Self(Zeroizing::new(raw.to_owned())))
    }

    /// Password text for store comparisons.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(..)")
    }
}

/// Validated sign-in credentials.
///
/// # Examples
/// ```
/// use campus_food::domain::Credentials;
///
/// let creds = Credentials::try_from_parts(" MAT001 ", "secret").unwrap();
/// assert_eq!(creds.matric_number().as_ref(), "MAT001");
/// assert_eq!(creds.password().expose(), "secret");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    matric_number: MatricNumber,
    password: Password,
}

impl Credentials {
    /// Construct credentials from raw matric number and password inputs.
    pub fn try_from_parts(
        matric_number: &str,
        password: &str,
    ) -> Result<Self, AccountValidationError> {
        Ok(Self {
            matric_number: MatricNumber::new(matric_number)?,
            password: Password::new(password)?,
        })
    }

    /// Matric number used for the account lookup.
    #[must_use]
    pub fn matric_number(&self) -> &MatricNumber {
        &self.matric_number
    }

    /// Password compared against the stored text.
    #[must_use]
    pub fn password(&self) -> &Password {
        &self.password
    }
}
