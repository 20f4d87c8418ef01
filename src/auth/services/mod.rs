//! Application services for the authentication flow.

mod flow;

pub use flow::{AuthFlowError, AuthFlowResult, AuthService, LoginForm, SignupForm};
