//! Application services for the task board.

mod store;

pub use store::{TaskDraft, TaskInsights, TaskStore, TaskStoreError, TaskStoreResult};
