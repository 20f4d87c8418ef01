//! Validated login and signup inputs.

use super::AuthDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum length of a new password, counted in UTF-16 code units.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Email address with a plausible `local@domain.tld` shape.
///
/// The check is syntactic only: one `@`, a non-empty local part, a dotted
/// domain with non-empty labels, and no whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// # Errors
    ///
    /// Returns [`AuthDomainError::EmptyEmail`] for blank input and
    /// [`AuthDomainError::InvalidEmail`] when the shape is wrong.
    pub fn new(value: impl Into<String>) -> Result<Self, AuthDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(AuthDomainError::EmptyEmail);
        }
        if !Self::is_plausible(normalized) {
            return Err(AuthDomainError::InvalidEmail(raw));
        }
        Ok(Self(normalized.to_owned()))
    }

    fn is_plausible(candidate: &str) -> bool {
        if candidate.chars().any(char::is_whitespace) {
            return false;
        }
        let Some((local, domain)) = candidate.split_once('@') else {
            return false;
        };
        let labels: Vec<&str> = domain.split('.').collect();
        !local.is_empty()
            && !domain.contains('@')
            && labels.len() >= 2
            && labels.iter().all(|label| !label.is_empty())
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when the lowercased address contains `marker`.
    #[must_use]
    pub fn contains_marker(&self, marker: &str) -> bool {
        self.0.to_lowercase().contains(&marker.to_lowercase())
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Secret text that never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Returns the raw secret.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Validated sign-in input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: EmailAddress,
    password: Password,
}

impl LoginCredentials {
    /// Validates sign-in input. The password only has to be present.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`AuthDomainError`], email first.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, AuthDomainError> {
        let validated_email = EmailAddress::new(email)?;
        let secret = password.into();
        if secret.is_empty() {
            return Err(AuthDomainError::EmptyPassword);
        }
        Ok(Self {
            email: validated_email,
            password: Password(secret),
        })
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the password.
    #[must_use]
    pub const fn password(&self) -> &Password {
        &self.password
    }
}

/// Validated account-creation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupDetails {
    name: String,
    email: EmailAddress,
    password: Password,
}

impl SignupDetails {
    /// Validates account-creation input.
    ///
    /// Rules are checked in form order (name, email, password strength,
    /// confirmation) and the first failure is returned.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`AuthDomainError`].
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Result<Self, AuthDomainError> {
        let raw_name = name.into();
        let display_name = raw_name.trim();
        if display_name.is_empty() {
            return Err(AuthDomainError::EmptyName);
        }
        let validated_email = EmailAddress::new(email)?;
        let secret = password.into();
        check_password_strength(&secret)?;
        let confirmation = confirm_password.into();
        if confirmation.is_empty() {
            return Err(AuthDomainError::EmptyPasswordConfirmation);
        }
        if confirmation != secret {
            return Err(AuthDomainError::PasswordMismatch);
        }
        Ok(Self {
            name: display_name.to_owned(),
            email: validated_email,
            password: Password(secret),
        })
    }

    /// Returns the trimmed display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the password.
    #[must_use]
    pub const fn password(&self) -> &Password {
        &self.password
    }
}

fn check_password_strength(secret: &str) -> Result<(), AuthDomainError> {
    if secret.encode_utf16().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthDomainError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    if !secret.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(AuthDomainError::PasswordMissingUppercase);
    }
    if !secret.chars().any(|c| c.is_ascii_digit()) {
        return Err(AuthDomainError::PasswordMissingDigit);
    }
    Ok(())
}

/// Signed-in session returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Address the user signed in with.
    pub email: EmailAddress,
}

/// Result of a successful signup.
///
/// The caller prefills the login form with `email`; the password is never
/// carried forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// Address the account was created for.
    pub email: EmailAddress,
}
