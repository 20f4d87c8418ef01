//! Validation errors for authentication forms.

use thiserror::Error;

/// Errors returned while validating login and signup input.
///
/// Messages are written to be shown next to the offending form field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthDomainError {
    /// The email field is empty.
    #[error("email is required")]
    EmptyEmail,

    /// The email is not shaped like `local@domain.tld`.
    #[error("please enter a valid email: '{0}'")]
    InvalidEmail(String),

    /// The password field is empty.
    #[error("password is required")]
    EmptyPassword,

    /// The new password is shorter than the minimum length.
    #[error("password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum accepted length in characters.
        min: usize,
    },

    /// The new password has no uppercase letter.
    #[error("add at least 1 uppercase letter")]
    PasswordMissingUppercase,

    /// The new password has no digit.
    #[error("add at least 1 number")]
    PasswordMissingDigit,

    /// The display name is empty after trimming.
    #[error("name is required")]
    EmptyName,

    /// The password confirmation field is empty.
    #[error("please confirm your password")]
    EmptyPasswordConfirmation,

    /// The password confirmation differs from the password.
    #[error("passwords do not match")]
    PasswordMismatch,
}
