//! Task entity and the enumerations it is built from.

use super::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError, TaskId, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow status of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work has not started.
    #[default]
    Todo,
    /// Work is underway.
    InProgress,
    /// Work is finished.
    Done,
}

impl TaskStatus {
    /// Every status, in workflow order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Returns the canonical text representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }

    /// Returns the status reached by the done/not-done toggle.
    ///
    /// `Done` goes back to `Todo`; both `Todo` and `InProgress` go to `Done`.
    /// A toggled `InProgress` task therefore never returns to `InProgress`.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Done => Self::Todo,
            Self::Todo | Self::InProgress => Self::Done,
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| ParseTaskStatusError(value.to_owned()))
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Importance level of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Normal importance.
    #[default]
    Medium,
    /// Needs attention first.
    High,
}

impl TaskPriority {
    /// Every priority, lowest first.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Returns the canonical text representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str() == normalized)
            .ok_or_else(|| ParseTaskPriorityError(value.to_owned()))
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Creation marker recorded with each task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskOrigin {
    /// Loaded from the fixed session seed.
    Seed,
    /// Created through the store during the session.
    Created,
}

/// Validated editable fields of a task.
///
/// Both creation and update go through this type, so a task can only ever hold
/// a trimmed, non-empty title and a trimmed description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskContent {
    title: TaskTitle,
    description: String,
    priority: TaskPriority,
    status: TaskStatus,
}

impl TaskContent {
    /// Validates raw editable fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: TaskPriority,
        status: TaskStatus,
    ) -> Result<Self, TaskDomainError> {
        let validated_title = TaskTitle::new(title)?;
        Ok(Self {
            title: validated_title,
            description: description.into().trim().to_owned(),
            priority,
            status,
        })
    }

    /// Returns the validated title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the trimmed description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }
}

/// Task entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: String,
    priority: TaskPriority,
    status: TaskStatus,
    origin: TaskOrigin,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task with a fresh identifier.
    #[must_use]
    pub fn create(content: TaskContent, clock: &impl Clock) -> Self {
        Self::build(content, TaskOrigin::Created, clock.utc())
    }

    /// Creates a seed task with an explicit creation time.
    #[must_use]
    pub fn seed(content: TaskContent, created_at: DateTime<Utc>) -> Self {
        Self::build(content, TaskOrigin::Seed, created_at)
    }

    fn build(content: TaskContent, origin: TaskOrigin, created_at: DateTime<Utc>) -> Self {
        let TaskContent {
            title,
            description,
            priority,
            status,
        } = content;
        Self {
            id: TaskId::new(),
            title,
            description,
            priority,
            status,
            origin,
            created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, possibly empty.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation marker.
    #[must_use]
    pub const fn origin(&self) -> TaskOrigin {
        self.origin
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces every editable field, keeping identity, origin and creation
    /// time.
    pub fn apply(&mut self, content: TaskContent) {
        let TaskContent {
            title,
            description,
            priority,
            status,
        } = content;
        self.title = title;
        self.description = description;
        self.priority = priority;
        self.status = status;
    }

    /// Flips the task between done and not done. See [`TaskStatus::toggled`].
    pub const fn toggle_status(&mut self) {
        self.status = self.status.toggled();
    }
}
