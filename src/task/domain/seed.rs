//! Fixed example tasks loaded at the start of every session.

use super::{Task, TaskContent, TaskDomainError, TaskPriority, TaskStatus};
use chrono::Duration;
use mockable::Clock;

/// Raw seed rows: title, description, priority, status, age in days.
const SEED_ROWS: [(&str, &str, TaskPriority, TaskStatus, i64); 3] = [
    (
        "Design login states",
        "Loading, error, success — with smooth motion.",
        TaskPriority::High,
        TaskStatus::InProgress,
        0,
    ),
    (
        "Dashboard layout",
        "Glass cards, spacing rhythm, and clear hierarchy.",
        TaskPriority::Medium,
        TaskStatus::Todo,
        0,
    ),
    (
        "CRUD interactions",
        "Create, edit, mark done — no jank.",
        TaskPriority::Low,
        TaskStatus::Done,
        1,
    ),
];

/// Builds the session seed in display order (most recent first).
///
/// # Errors
///
/// Returns [`TaskDomainError`] if a seed row fails validation.
pub fn seed_tasks(clock: &impl Clock) -> Result<Vec<Task>, TaskDomainError> {
    let now = clock.utc();
    SEED_ROWS
        .iter()
        .map(|&(title, description, priority, status, age_days)| {
            TaskContent::new(title, description, priority, status)
                .map(|content| Task::seed(content, now - Duration::days(age_days)))
        })
        .collect()
}
