//! Domain model for the mock authentication flow.

mod credentials;
mod error;

pub use credentials::{
    EmailAddress, LoginCredentials, MIN_PASSWORD_LENGTH, Password, Registration, Session,
    SignupDetails,
};
pub use error::AuthDomainError;
