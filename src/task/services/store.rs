//! Task store service: create, update, remove, toggle, and derived views.

use crate::task::{
    domain::{
        Task, TaskContent, TaskDomainError, TaskFilter, TaskId, TaskPriority, TaskStatus,
        seed_tasks,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating or editing a task.
///
/// Fields are raw; validation happens when the store applies the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: String,
    priority: TaskPriority,
    status: TaskStatus,
}

impl TaskDraft {
    /// Creates a draft with a title, an empty description, medium priority and
    /// `todo` status.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            priority: TaskPriority::default(),
            status: TaskStatus::default(),
        }
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    fn into_content(self) -> Result<TaskContent, TaskDomainError> {
        TaskContent::new(self.title, self.description, self.priority, self.status)
    }
}

impl From<&Task> for TaskDraft {
    /// Prefills a draft with the current fields of `task`, ready for editing.
    fn from(task: &Task) -> Self {
        Self {
            title: task.title().as_str().to_owned(),
            description: task.description().to_owned(),
            priority: task.priority(),
            status: task.status(),
        }
    }
}

/// Counters shown alongside the task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskInsights {
    /// Number of tasks in the store.
    pub total: usize,
    /// Number of tasks with status `done`.
    pub done: usize,
    /// Number of tasks with status `in_progress`.
    pub in_progress: usize,
    /// Number of tasks matched by the current view.
    pub visible: usize,
}

/// Service-level errors for task store operations.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// Input validation failed; nothing was changed.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// No task has the given identifier; nothing was changed.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskStoreError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Authoritative owner of the task collection.
///
/// Every mutation validates its input before touching the repository, so a
/// failed call leaves the collection exactly as it was.
pub struct TaskStore<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskStore<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskStore<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a store over an existing repository.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a store and loads the session seed into it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when a seed task cannot be stored.
    pub fn seeded(repository: Arc<R>, clock: Arc<C>) -> TaskStoreResult<Self> {
        let store = Self::new(repository, clock);
        let seed = seed_tasks(&*store.clock)?;
        // Seed rows are already most-recent-first; prepend them oldest first.
        for task in seed.iter().rev() {
            store.repository.insert_first(task)?;
        }
        tracing::debug!(count = seed.len(), "task store seeded");
        Ok(store)
    }

    /// Creates a task and places it first in the collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Validation`] when the title is blank.
    pub fn create(&self, draft: TaskDraft) -> TaskStoreResult<Task> {
        let content = draft.into_content().inspect_err(|err| {
            tracing::warn!(error = %err, "rejected task creation");
        })?;
        let task = Task::create(content, &*self.clock);
        self.repository.insert_first(&task)?;
        tracing::info!(task_id = %task.id(), title = %task.title(), "task created");
        Ok(task)
    }

    /// Replaces the editable fields of an existing task in place.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Validation`] when the patched title is blank
    /// and [`TaskStoreError::NotFound`] when no task has `id`.
    pub fn update(&self, id: TaskId, patch: TaskDraft) -> TaskStoreResult<Task> {
        let content = patch.into_content().inspect_err(|err| {
            tracing::warn!(task_id = %id, error = %err, "rejected task update");
        })?;
        let mut task = self.require(id)?;
        task.apply(content);
        self.repository.update(&task)?;
        tracing::info!(task_id = %id, "task updated");
        Ok(task)
    }

    /// Permanently removes a task and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no task has `id`, including
    /// when it was already removed.
    pub fn remove(&self, id: TaskId) -> TaskStoreResult<Task> {
        let removed = self.repository.remove(id).map_err(|err| {
            tracing::warn!(task_id = %id, error = %err, "task removal failed");
            TaskStoreError::from(err)
        })?;
        tracing::info!(task_id = %id, "task removed");
        Ok(removed)
    }

    /// Flips a task between done and not done.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no task has `id`.
    pub fn toggle_status(&self, id: TaskId) -> TaskStoreResult<Task> {
        let mut task = self.require(id)?;
        let previous = task.status();
        task.toggle_status();
        self.repository.update(&task)?;
        tracing::info!(
            task_id = %id,
            from = %previous,
            to = %task.status(),
            "task status toggled"
        );
        Ok(task)
    }

    /// Returns the tasks matched by `view`, in collection order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when the snapshot cannot be read.
    pub fn filter(&self, view: &TaskFilter) -> TaskStoreResult<Vec<Task>> {
        let tasks = self.repository.list()?;
        let total = tasks.len();
        let matched: Vec<Task> = tasks.into_iter().filter(|task| view.matches(task)).collect();
        tracing::debug!(matched = matched.len(), total, "task view computed");
        Ok(matched)
    }

    /// Returns a snapshot of every task, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when the snapshot cannot be read.
    pub fn all(&self) -> TaskStoreResult<Vec<Task>> {
        Ok(self.repository.list()?)
    }

    /// Returns the dashboard counters for the current collection and `view`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when the snapshot cannot be read.
    pub fn insights(&self, view: &TaskFilter) -> TaskStoreResult<TaskInsights> {
        let tasks = self.repository.list()?;
        let count_status =
            |status: TaskStatus| tasks.iter().filter(|task| task.status() == status).count();
        Ok(TaskInsights {
            total: tasks.len(),
            done: count_status(TaskStatus::Done),
            in_progress: count_status(TaskStatus::InProgress),
            visible: tasks.iter().filter(|task| view.matches(task)).count(),
        })
    }

    fn require(&self, id: TaskId) -> TaskStoreResult<Task> {
        self.repository.find_by_id(id)?.ok_or_else(|| {
            tracing::warn!(task_id = %id, "task not found");
            TaskStoreError::NotFound(id)
        })
    }
}
