//! Service layer for the login and signup flow.

use crate::auth::{
    domain::{AuthDomainError, LoginCredentials, Registration, Session, SignupDetails},
    ports::{Authenticator, AuthenticatorError},
};
use std::sync::Arc;
use thiserror::Error;

/// Raw login form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    email: String,
    password: String,
}

impl LoginForm {
    /// Creates a login form.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Creates a login form prefilled after a successful signup.
    ///
    /// The password is left empty so the user has to type it again.
    #[must_use]
    pub fn prefilled(registration: &Registration) -> Self {
        Self::new(registration.email.as_str(), "")
    }

    /// Returns the email field.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the password field.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Raw signup form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupForm {
    name: String,
    email: String,
    password: String,
    confirm_password: String,
}

impl SignupForm {
    /// Creates a signup form.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }
}

/// Service-level errors for the authentication flow.
#[derive(Debug, Error)]
pub enum AuthFlowError {
    /// The form did not pass validation; no request was made.
    #[error(transparent)]
    Validation(#[from] AuthDomainError),
    /// The authenticator rejected the request.
    #[error(transparent)]
    Rejected(#[from] AuthenticatorError),
}

/// Result type for authentication flow operations.
pub type AuthFlowResult<T> = Result<T, AuthFlowError>;

/// Login and signup orchestration service.
#[derive(Clone)]
pub struct AuthService<A>
where
    A: Authenticator,
{
    authenticator: Arc<A>,
}

impl<A> AuthService<A>
where
    A: Authenticator,
{
    /// Creates a new authentication service.
    #[must_use]
    pub const fn new(authenticator: Arc<A>) -> Self {
        Self { authenticator }
    }

    /// Validates the login form and signs the user in.
    ///
    /// # Errors
    ///
    /// Returns [`AuthFlowError::Validation`] for invalid input and
    /// [`AuthFlowError::Rejected`] when the authenticator refuses the login.
    pub async fn login(&self, form: LoginForm) -> AuthFlowResult<Session> {
        let credentials = LoginCredentials::new(form.email, form.password).inspect_err(|err| {
            tracing::debug!(error = %err, "login form rejected");
        })?;
        match self.authenticator.login(&credentials).await {
            Ok(session) => {
                tracing::info!(email = %session.email, "signed in");
                Ok(session)
            }
            Err(err) => {
                tracing::warn!(email = %credentials.email(), error = %err, "sign-in failed");
                Err(err.into())
            }
        }
    }

    /// Validates the signup form and creates the account.
    ///
    /// # Errors
    ///
    /// Returns [`AuthFlowError::Validation`] for invalid input and
    /// [`AuthFlowError::Rejected`] when the authenticator refuses the signup.
    pub async fn signup(&self, form: SignupForm) -> AuthFlowResult<Registration> {
        let details = SignupDetails::new(
            form.name,
            form.email,
            form.password,
            form.confirm_password,
        )
        .inspect_err(|err| {
            tracing::debug!(error = %err, "signup form rejected");
        })?;
        match self.authenticator.signup(&details).await {
            Ok(registration) => {
                tracing::info!(email = %registration.email, "account created");
                Ok(registration)
            }
            Err(err) => {
                tracing::warn!(email = %details.email(), error = %err, "signup failed");
                Err(err.into())
            }
        }
    }
}
