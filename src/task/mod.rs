//! Task board state management.
//!
//! Owns the ordered task collection, applies create, update, remove and
//! status-toggle transitions, and computes the filtered view used for search.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The task store service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
