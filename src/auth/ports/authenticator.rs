//! Authentication port.

use crate::auth::domain::{LoginCredentials, Registration, Session, SignupDetails};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for authenticator operations.
pub type AuthenticatorResult<T> = Result<T, AuthenticatorError>;

/// Backend that signs users in and creates accounts.
///
/// A call is pending until its future resolves, then either succeeds or fails
/// with a domain-specific [`AuthenticatorError`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Signs a user in.
    ///
    /// # Errors
    ///
    /// Returns [`AuthenticatorError::InvalidCredentials`] when the backend
    /// rejects the email and password pair.
    async fn login(&self, credentials: &LoginCredentials) -> AuthenticatorResult<Session>;

    /// Creates an account.
    ///
    /// # Errors
    ///
    /// Returns [`AuthenticatorError::EmailTaken`] when the email already
    /// belongs to an account.
    async fn signup(&self, details: &SignupDetails) -> AuthenticatorResult<Registration>;
}

/// Errors returned by authenticator implementations.
#[derive(Debug, Clone, Error)]
pub enum AuthenticatorError {
    /// The email and password pair was rejected.
    #[error("Invalid email or password.")]
    InvalidCredentials,

    /// The email already belongs to an account.
    #[error("That email is already in use.")]
    EmailTaken,

    /// Backend failure unrelated to the submitted input.
    #[error("authentication backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl AuthenticatorError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
