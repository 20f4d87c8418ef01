//! Port contracts for the task board.
//!
//! Ports define storage-agnostic interfaces used by the task store service.

pub mod repository;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
