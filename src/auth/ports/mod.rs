//! Port contracts for the mock authentication flow.

pub mod authenticator;

#[cfg(test)]
pub use authenticator::MockAuthenticator;
pub use authenticator::{Authenticator, AuthenticatorError, AuthenticatorResult};
