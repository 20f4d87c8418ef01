//! Adapter implementations of the authentication port.

pub mod simulated;
