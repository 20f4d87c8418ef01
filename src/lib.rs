//! Taskboard: an in-memory task board with a mock authentication flow.
//!
//! The crate keeps an ordered collection of tasks, supports create, update,
//! remove and done-toggle transitions, and derives filtered views by free-text
//! query, status and priority. State lives for one session only; there is no
//! persistence and no network I/O.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`task`]: Task store and derived filtering
//! - [`auth`]: Mock login and signup flow
//! - [`config`]: Session configuration
//! - [`session`]: Wiring for a single session

pub mod auth;
pub mod config;
pub mod session;
pub mod task;
