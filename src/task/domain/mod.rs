//! Domain model for the task board.
//!
//! Tasks, their closed status and priority enumerations, and the parameters of
//! the derived filter view. Nothing here knows how tasks are stored.

mod error;
mod filter;
mod seed;
mod task;
mod values;

pub use error::{ParseFilterError, ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use filter::{FilterChoice, PriorityFilter, StatusFilter, TaskFilter};
pub use seed::seed_tasks;
pub use task::{Task, TaskContent, TaskOrigin, TaskPriority, TaskStatus};
pub use values::{TaskId, TaskTitle};
