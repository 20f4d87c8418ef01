//! Authenticator that simulates a backend with a fixed delay.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

use crate::auth::{
    domain::{LoginCredentials, Registration, Session, SignupDetails},
    ports::{Authenticator, AuthenticatorError, AuthenticatorResult},
};

/// Error returned when a marker is blank.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("authentication marker must not be empty")]
pub struct EmptyMarkerError;

/// Email text that selects a simulated failure.
///
/// Stored trimmed and lowercased. A blank marker would match every address,
/// so it is rejected on construction and on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AuthMarker(String);

impl AuthMarker {
    /// Creates a normalized marker.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyMarkerError`] when the value is empty after trimming.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, EmptyMarkerError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(EmptyMarkerError);
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    /// Returns the marker text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AuthMarker {
    type Error = EmptyMarkerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AuthMarker> for String {
    fn from(value: AuthMarker) -> Self {
        value.0
    }
}

impl fmt::Display for AuthMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Behaviour of the [`SimulatedAuthenticator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatedAuthConfig {
    /// Delay applied to every call before it resolves.
    #[serde(with = "duration_millis")]
    pub latency: Duration,
    /// Login fails when the lowercased email contains this text.
    pub login_failure_marker: AuthMarker,
    /// Signup fails when the lowercased email contains this text.
    pub signup_conflict_marker: AuthMarker,
}

impl Default for SimulatedAuthConfig {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(750),
            login_failure_marker: AuthMarker("fail".to_owned()),
            signup_conflict_marker: AuthMarker("taken".to_owned()),
        }
    }
}

impl SimulatedAuthConfig {
    /// Default markers with no delay.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            latency: Duration::ZERO,
            ..Self::default()
        }
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

/// Authenticator whose outcome is keyed off the submitted email.
#[derive(Debug, Clone, Default)]
pub struct SimulatedAuthenticator {
    config: SimulatedAuthConfig,
}

impl SimulatedAuthenticator {
    /// Creates an authenticator with the given behaviour.
    #[must_use]
    pub const fn new(config: SimulatedAuthConfig) -> Self {
        Self { config }
    }

    /// Returns the configured behaviour.
    #[must_use]
    pub const fn config(&self) -> &SimulatedAuthConfig {
        &self.config
    }

    async fn simulate_latency(&self) {
        if !self.config.latency.is_zero() {
            tokio::time::sleep(self.config.latency).await;
        }
    }
}

#[async_trait]
impl Authenticator for SimulatedAuthenticator {
    async fn login(&self, credentials: &LoginCredentials) -> AuthenticatorResult<Session> {
        self.simulate_latency().await;
        if credentials
            .email()
            .contains_marker(self.config.login_failure_marker.as_str())
        {
            return Err(AuthenticatorError::InvalidCredentials);
        }
        Ok(Session {
            email: credentials.email().clone(),
        })
    }

    async fn signup(&self, details: &SignupDetails) -> AuthenticatorResult<Registration> {
        self.simulate_latency().await;
        if details
            .email()
            .contains_marker(self.config.signup_conflict_marker.as_str())
        {
            return Err(AuthenticatorError::EmailTaken);
        }
        Ok(Registration {
            email: details.email().clone(),
        })
    }
}
