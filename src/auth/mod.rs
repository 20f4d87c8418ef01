//! Mock authentication flow for the task board.
//!
//! Validates login and signup forms, then hands them to an [`Authenticator`]
//! port. The only adapter simulates a backend: it waits a fixed delay and
//! decides the outcome from literal markers in the email address. There is no
//! credential store and no session token.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Flow orchestration in [`services`]
//!
//! [`Authenticator`]: ports::Authenticator

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
