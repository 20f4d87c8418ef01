//! Domain-focused tests for task values and transitions.

use crate::task::domain::{
    ParseTaskPriorityError, ParseTaskStatusError, Task, TaskContent, TaskDomainError, TaskId,
    TaskOrigin, TaskPriority, TaskStatus, TaskTitle, seed_tasks,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

fn task_with_status(status: TaskStatus, clock: &DefaultClock) -> Task {
    let content = TaskContent::new("Toggle me", "", TaskPriority::Medium, status)
        .expect("valid task content");
    Task::create(content, clock)
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn title_rejects_blank_values(#[case] raw: &str) {
    assert_eq!(TaskTitle::new(raw), Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn title_is_trimmed() {
    let title = TaskTitle::new(" Ship it ").expect("valid title");
    assert_eq!(title.as_str(), "Ship it");
}

#[rstest]
fn content_trims_description() {
    let content = TaskContent::new(
        "Write notes",
        "  spaced out  ",
        TaskPriority::Low,
        TaskStatus::Todo,
    )
    .expect("valid content");
    assert_eq!(content.description(), "spaced out");
}

#[rstest]
fn created_task_is_marked_as_created(clock: DefaultClock) {
    let task = task_with_status(TaskStatus::Todo, &clock);
    assert_eq!(task.origin(), TaskOrigin::Created);
    assert_eq!(task.title().as_str(), "Toggle me");
}

#[rstest]
#[case(TaskStatus::Done, TaskStatus::Todo)]
#[case(TaskStatus::Todo, TaskStatus::Done)]
#[case(TaskStatus::InProgress, TaskStatus::Done)]
fn toggled_returns_expected(#[case] from: TaskStatus, #[case] expected: TaskStatus) {
    assert_eq!(from.toggled(), expected);
}

#[rstest]
fn toggling_in_progress_twice_lands_on_todo(clock: DefaultClock) {
    let mut task = task_with_status(TaskStatus::InProgress, &clock);

    task.toggle_status();
    assert_eq!(task.status(), TaskStatus::Done);
    task.toggle_status();
    assert_eq!(task.status(), TaskStatus::Todo);
}

#[rstest]
fn apply_replaces_fields_and_keeps_identity(clock: DefaultClock) {
    let mut task = task_with_status(TaskStatus::Todo, &clock);
    let id = task.id();
    let created_at = task.created_at();
    let content = TaskContent::new(
        "Renamed",
        "new description",
        TaskPriority::High,
        TaskStatus::InProgress,
    )
    .expect("valid content");

    task.apply(content);

    assert_eq!(task.id(), id);
    assert_eq!(task.created_at(), created_at);
    assert_eq!(task.origin(), TaskOrigin::Created);
    assert_eq!(task.title().as_str(), "Renamed");
    assert_eq!(task.description(), "new description");
    assert_eq!(task.priority(), TaskPriority::High);
    assert_eq!(task.status(), TaskStatus::InProgress);
}

#[rstest]
#[case(" In_Progress ", TaskStatus::InProgress)]
#[case("todo", TaskStatus::Todo)]
#[case("DONE", TaskStatus::Done)]
fn status_parses_case_insensitively(#[case] raw: &str, #[case] expected: TaskStatus) {
    assert_eq!(TaskStatus::try_from(raw), Ok(expected));
}

#[rstest]
fn every_variant_parses_from_its_text_form() {
    for status in TaskStatus::ALL {
        assert_eq!(TaskStatus::try_from(status.as_str()), Ok(status));
    }
    for priority in TaskPriority::ALL {
        assert_eq!(TaskPriority::try_from(priority.to_string().as_str()), Ok(priority));
    }
}

#[rstest]
fn status_rejects_unknown_text() {
    assert_eq!(
        TaskStatus::try_from("blocked"),
        Err(ParseTaskStatusError("blocked".to_owned()))
    );
}

#[rstest]
fn priority_rejects_unknown_text() {
    assert_eq!(
        TaskPriority::try_from("urgent"),
        Err(ParseTaskPriorityError("urgent".to_owned()))
    );
}

#[rstest]
fn enums_serialize_as_snake_case() {
    let status = serde_json::to_string(&TaskStatus::InProgress).expect("serialize status");
    let priority = serde_json::to_string(&TaskPriority::High).expect("serialize priority");
    assert_eq!(status, "\"in_progress\"");
    assert_eq!(priority, "\"high\"");
}

#[rstest]
fn task_serialization_rejects_blank_title(clock: DefaultClock) {
    let task = task_with_status(TaskStatus::Todo, &clock);
    let mut json = serde_json::to_value(&task).expect("serialize task");
    json.as_object_mut()
        .expect("task serializes as an object")
        .insert("title".to_owned(), serde_json::Value::String("  ".to_owned()));

    assert!(serde_json::from_value::<Task>(json).is_err());
}

#[rstest]
fn task_id_round_trips_through_display_form() {
    let id = TaskId::new();
    let rendered = id.to_string();

    assert!(rendered.starts_with("tsk_"));
    assert_eq!(rendered.parse::<TaskId>().expect("parse id"), id);
    assert_eq!(TaskId::from_uuid(id.into_inner()), id);
    assert_eq!(
        id.into_inner().to_string().parse::<TaskId>().expect("parse bare uuid"),
        id
    );
}

#[rstest]
fn seed_tasks_match_session_defaults(clock: DefaultClock) {
    let seed = seed_tasks(&clock).expect("seed rows are valid");
    let titles: Vec<&str> = seed.iter().map(|task| task.title().as_str()).collect();

    assert_eq!(
        titles,
        vec!["Design login states", "Dashboard layout", "CRUD interactions"]
    );
    assert!(seed.iter().all(|task| task.origin() == TaskOrigin::Seed));
    let newest = seed.first().expect("seed is not empty");
    let oldest = seed.last().expect("seed is not empty");
    assert!(oldest.created_at() < newest.created_at());
}
