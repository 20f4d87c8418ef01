//! In-memory ordered task repository.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Clones share the same underlying collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read_state(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, Vec<Task>>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write_state(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, Vec<Task>>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

fn position_of(tasks: &[Task], id: TaskId) -> Option<usize> {
    tasks.iter().position(|task| task.id() == id)
}

impl TaskRepository for InMemoryTaskRepository {
    fn insert_first(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.write_state()?;
        if position_of(&tasks, task.id()).is_some() {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        tasks.insert(0, task.clone());
        Ok(())
    }

    fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.write_state()?;
        let slot = tasks
            .iter_mut()
            .find(|existing| existing.id() == task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        *slot = task.clone();
        Ok(())
    }

    fn remove(&self, id: TaskId) -> TaskRepositoryResult<Task> {
        let mut tasks = self.write_state()?;
        let index = position_of(&tasks, id).ok_or(TaskRepositoryError::NotFound(id))?;
        // `Vec::remove` shifts the tail left, so relative order is kept.
        Ok(tasks.remove(index))
    }

    fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.read_state()?;
        Ok(tasks.iter().find(|task| task.id() == id).cloned())
    }

    fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.read_state()?;
        Ok(tasks.to_vec())
    }
}
