//! Runtime configuration for the task board.
//!
//! Configuration can be set via environment variables:
//! - `TASKBOARD_SEED_ON_START` - Optional. Load the example tasks when a
//!   session starts. Defaults to `true`.
//! - `TASKBOARD_AUTH_LATENCY_MS` - Optional. Simulated authentication delay in
//!   milliseconds. Defaults to `750`.
//! - `TASKBOARD_AUTH_LOGIN_FAILURE_MARKER` - Optional. Email text that makes a
//!   login fail. Defaults to `fail`.
//! - `TASKBOARD_AUTH_SIGNUP_CONFLICT_MARKER` - Optional. Email text that makes
//!   a signup fail. Defaults to `taken`.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::auth::adapters::simulated::{AuthMarker, SimulatedAuthConfig};

/// Environment variable controlling session seeding.
pub const SEED_ON_START_VAR: &str = "TASKBOARD_SEED_ON_START";
/// Environment variable controlling simulated authentication latency.
pub const AUTH_LATENCY_MS_VAR: &str = "TASKBOARD_AUTH_LATENCY_MS";
/// Environment variable overriding the login failure marker.
pub const LOGIN_FAILURE_MARKER_VAR: &str = "TASKBOARD_AUTH_LOGIN_FAILURE_MARKER";
/// Environment variable overriding the signup conflict marker.
pub const SIGNUP_CONFLICT_MARKER_VAR: &str = "TASKBOARD_AUTH_SIGNUP_CONFLICT_MARKER";

/// Errors returned while loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set to a value that cannot be used.
    #[error("invalid value for {0}: '{1}'")]
    InvalidValue(String, String),
}

/// Task board configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Whether a new session starts with the example tasks.
    pub seed_on_start: bool,
    /// Behaviour of the simulated authenticator.
    pub auth: SimulatedAuthConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            seed_on_start: true,
            auth: SimulatedAuthConfig::default(),
        }
    }
}

impl BoardConfig {
    /// Default configuration without simulated latency.
    ///
    /// Useful for tests and demos.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            auth: SimulatedAuthConfig::instant(),
            ..Self::default()
        }
    }

    /// Default configuration with an empty task list.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            seed_on_start: false,
            ..Self::default()
        }
    }

    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable is set to an
    /// unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// unset variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable is set to an
    /// unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let seed_on_start = lookup(SEED_ON_START_VAR)
            .map(|raw| parse_bool(SEED_ON_START_VAR, &raw))
            .transpose()?
            .unwrap_or(defaults.seed_on_start);
        let latency = lookup(AUTH_LATENCY_MS_VAR)
            .map(|raw| parse_millis(AUTH_LATENCY_MS_VAR, &raw))
            .transpose()?
            .unwrap_or(defaults.auth.latency);
        let login_failure_marker = lookup(LOGIN_FAILURE_MARKER_VAR)
            .map(|raw| parse_marker(LOGIN_FAILURE_MARKER_VAR, &raw))
            .transpose()?
            .unwrap_or(defaults.auth.login_failure_marker);
        let signup_conflict_marker = lookup(SIGNUP_CONFLICT_MARKER_VAR)
            .map(|raw| parse_marker(SIGNUP_CONFLICT_MARKER_VAR, &raw))
            .transpose()?
            .unwrap_or(defaults.auth.signup_conflict_marker);

        Ok(Self {
            seed_on_start,
            auth: SimulatedAuthConfig {
                latency,
                login_failure_marker,
                signup_conflict_marker,
            },
        })
    }
}

fn invalid(name: &str, raw: &str) -> ConfigError {
    ConfigError::InvalidValue(name.to_owned(), raw.to_owned())
}

fn parse_bool(name: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(name, raw)),
    }
}

fn parse_millis(name: &str, raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| invalid(name, raw))
}

fn parse_marker(name: &str, raw: &str) -> Result<AuthMarker, ConfigError> {
    AuthMarker::new(raw).map_err(|_| invalid(name, raw))
}

#[cfg(test)]
mod tests;
