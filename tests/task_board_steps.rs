//! Behavioural tests for the task board store.

use std::sync::Arc;

use eyre::{Result, eyre};
use mockable::DefaultClock;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{FilterChoice, Task, TaskFilter, TaskId, TaskPriority, TaskStatus},
    services::{TaskDraft, TaskStore, TaskStoreError},
};

type TestStore = TaskStore<InMemoryTaskRepository, DefaultClock>;

#[derive(Default)]
struct TaskBoardWorld {
    store: Option<TestStore>,
    view: Vec<Task>,
    last_error: Option<TaskStoreError>,
}

impl TaskBoardWorld {
    fn store(&self) -> Result<&TestStore> {
        self.store
            .as_ref()
            .ok_or_else(|| eyre!("missing task store in scenario world"))
    }

    fn task_id_titled(&self, title: &str) -> Result<TaskId> {
        self.store()?
            .all()?
            .iter()
            .find(|task| task.title().as_str() == title)
            .map(Task::id)
            .ok_or_else(|| eyre!("no task titled {title}"))
    }

    fn record<T>(&mut self, result: Result<T, TaskStoreError>) {
        self.last_error = result.err();
    }
}

#[fixture]
fn world() -> TaskBoardWorld {
    TaskBoardWorld::default()
}

#[given("a seeded task board")]
fn seeded_task_board(world: &mut TaskBoardWorld) -> Result<()> {
    let store = TaskStore::seeded(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )?;
    world.store = Some(store);
    world.view.clear();
    world.last_error = None;
    Ok(())
}

#[when(r#"I create a task titled "{title}""#)]
fn create_task(world: &mut TaskBoardWorld, title: String) -> Result<()> {
    let result = world.store()?.create(TaskDraft::new(title));
    world.record(result);
    Ok(())
}

#[when("I create a task with a blank title")]
fn create_blank_task(world: &mut TaskBoardWorld) -> Result<()> {
    let result = world.store()?.create(TaskDraft::new("   "));
    world.record(result);
    Ok(())
}

#[when(r#"I search for "{query}""#)]
fn search(world: &mut TaskBoardWorld, query: String) -> Result<()> {
    world.view = world.store()?.filter(&TaskFilter::new().with_query(query))?;
    Ok(())
}

#[when(r#"I filter by status "{status}""#)]
fn filter_by_status(world: &mut TaskBoardWorld, status: String) -> Result<()> {
    let parsed = TaskStatus::try_from(status.as_str())?;
    let view = TaskFilter::new().with_status(FilterChoice::Only(parsed));
    world.view = world.store()?.filter(&view)?;
    Ok(())
}

#[when(r#"I filter by priority "{priority}""#)]
fn filter_by_priority(world: &mut TaskBoardWorld, priority: String) -> Result<()> {
    let parsed = TaskPriority::try_from(priority.as_str())?;
    let view = TaskFilter::new().with_priority(FilterChoice::Only(parsed));
    world.view = world.store()?.filter(&view)?;
    Ok(())
}

#[when(r#"I toggle the task titled "{title}""#)]
fn toggle_task(world: &mut TaskBoardWorld, title: String) -> Result<()> {
    let id = world.task_id_titled(&title)?;
    let result = world.store()?.toggle_status(id);
    world.record(result);
    Ok(())
}

#[when(r#"I remove the task titled "{title}" twice"#)]
fn remove_task_twice(world: &mut TaskBoardWorld, title: String) -> Result<()> {
    let id = world.task_id_titled(&title)?;
    world.store()?.remove(id)?;
    let second = world.store()?.remove(id);
    world.record(second);
    Ok(())
}

#[then("the board holds {count:u64} tasks")]
fn board_holds(world: &TaskBoardWorld, count: u64) -> Result<()> {
    let actual = world.store()?.all()?.len();
    if u64::try_from(actual)? != count {
        return Err(eyre!("expected {count} tasks, found {actual}"));
    }
    Ok(())
}

#[then(r#"the first task is titled "{title}""#)]
fn first_task_titled(world: &TaskBoardWorld, title: String) -> Result<()> {
    let all = world.store()?.all()?;
    let first = all.first().ok_or_else(|| eyre!("board is empty"))?;
    if first.title().as_str() != title {
        return Err(eyre!("expected first task {title}, found {}", first.title()));
    }
    Ok(())
}

#[then("the operation fails with a validation error")]
fn fails_with_validation(world: &TaskBoardWorld) -> Result<()> {
    if !matches!(world.last_error, Some(TaskStoreError::Validation(_))) {
        return Err(eyre!(
            "expected validation error, got {:?}",
            world.last_error
        ));
    }
    Ok(())
}

#[then("the operation fails with a not found error")]
fn fails_with_not_found(world: &TaskBoardWorld) -> Result<()> {
    if !matches!(world.last_error, Some(TaskStoreError::NotFound(_))) {
        return Err(eyre!("expected not found error, got {:?}", world.last_error));
    }
    Ok(())
}

#[then(r#"the view contains only "{title}""#)]
fn view_contains_only(world: &TaskBoardWorld, title: String) -> Result<()> {
    let titles: Vec<&str> = world
        .view
        .iter()
        .map(|task| task.title().as_str())
        .collect();
    if titles != [title.as_str()] {
        return Err(eyre!("expected only {title}, found {titles:?}"));
    }
    Ok(())
}

#[then(r#"the task titled "{title}" has status "{status}""#)]
fn task_has_status(world: &TaskBoardWorld, title: String, status: String) -> Result<()> {
    let expected = TaskStatus::try_from(status.as_str())?;
    let id = world.task_id_titled(&title)?;
    let task = world
        .store()?
        .all()?
        .into_iter()
        .find(|task| task.id() == id)
        .ok_or_else(|| eyre!("task {title} disappeared"))?;
    if task.status() != expected {
        return Err(eyre!("expected status {expected}, found {}", task.status()));
    }
    Ok(())
}

#[scenario(
    path = "tests/features/task_board.feature",
    name = "Creating a task puts it first"
)]
#[tokio::test(flavor = "multi_thread")]
async fn creating_a_task_puts_it_first(world: TaskBoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_board.feature",
    name = "Blank titles are rejected"
)]
#[tokio::test(flavor = "multi_thread")]
async fn blank_titles_are_rejected(world: TaskBoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_board.feature",
    name = "Searching narrows the view"
)]
#[tokio::test(flavor = "multi_thread")]
async fn searching_narrows_the_view(world: TaskBoardWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/task_board.feature", name = "Filtering by status")]
#[tokio::test(flavor = "multi_thread")]
async fn filtering_by_status(world: TaskBoardWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/task_board.feature", name = "Filtering by priority")]
#[tokio::test(flavor = "multi_thread")]
async fn filtering_by_priority(world: TaskBoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_board.feature",
    name = "Toggling an in-progress task never returns it to in progress"
)]
#[tokio::test(flavor = "multi_thread")]
async fn toggling_in_progress_task(world: TaskBoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_board.feature",
    name = "Removing a task twice"
)]
#[tokio::test(flavor = "multi_thread")]
async fn removing_a_task_twice(world: TaskBoardWorld) {
    let _ = world;
}
