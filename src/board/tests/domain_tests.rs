//! Domain validation and lifecycle transition tests.

use crate::board::domain::{
    BoardDomainError, Column, ColumnId, EmailAddress, NewTask, PersistedTaskData, Priority,
    Project, ProjectId, Task, TaskId, TaskStatus,
};
use crate::testing::FixedClock;
use chrono::{TimeZone, Utc};
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> FixedClock {
    FixedClock::new(
        Utc.with_ymd_and_hms(2024, 5, 14, 9, 0, 0)
            .single()
            .expect("valid fixture instant"),
    )
}

fn new_task(title: &str, project_id: ProjectId, column_id: ColumnId) -> NewTask {
    NewTask {
        title: title.to_owned(),
        content: None,
        deadline: Utc
            .with_ymd_and_hms(2024, 5, 20, 17, 0, 0)
            .single()
            .expect("valid fixture instant"),
        priority: Priority::Medium,
        project_id,
        column_id,
    }
}

#[rstest]
fn task_creation_trims_title_and_starts_doing(clock: FixedClock) {
    let task = Task::new(
        new_task("  Write launch notes  ", ProjectId::new(), ColumnId::new()),
        &clock,
    )
    .expect("task creation should succeed");

    assert_eq!(task.title(), "Write launch notes");
    assert_eq!(task.status(), TaskStatus::Doing);
    assert!(task.finished_at().is_none());
    assert_eq!(task.created_at(), task.updated_at());
}

#[rstest]
#[case("")]
#[case("   ")]
fn task_creation_rejects_blank_titles(clock: FixedClock, #[case] title: &str) {
    let result = Task::new(new_task(title, ProjectId::new(), ColumnId::new()), &clock);
    assert!(matches!(result, Err(BoardDomainError::EmptyTaskTitle)));
}

#[rstest]
fn project_creation_rejects_blank_names(clock: FixedClock) {
    use crate::board::domain::OwnerId;

    let result = Project::new("  ", OwnerId::new(), &clock);
    assert!(matches!(result, Err(BoardDomainError::EmptyProjectName)));
}

#[rstest]
#[case("alice@example.com", "alice@example.com")]
#[case("  bob@example.org  ", "bob@example.org")]
fn email_accepts_and_trims_valid_addresses(#[case] input: &str, #[case] expected: &str) {
    let email = EmailAddress::new(input).expect("address should validate");
    assert_eq!(email.as_str(), expected);
}

#[rstest]
#[case("plainaddress")]
#[case("@example.com")]
#[case("alice@")]
#[case("alice@@example.com")]
#[case("alice smith@example.com")]
fn email_rejects_malformed_addresses(#[case] input: &str) {
    let result = EmailAddress::new(input);
    assert!(matches!(result, Err(BoardDomainError::InvalidEmail(_))));
}

#[rstest]
fn moving_into_completion_column_marks_done(clock: FixedClock) {
    let project_id = ProjectId::new();
    let done_column =
        Column::new("Done", 2, true, project_id, &clock).expect("column creation should succeed");
    let mut task = Task::new(new_task("Ship the release", project_id, ColumnId::new()), &clock)
        .expect("task creation should succeed");

    task.move_to_column(&done_column, &clock)
        .expect("move should succeed");

    assert_eq!(task.status(), TaskStatus::Done);
    assert_eq!(task.finished_at(), Some(clock_instant(&clock)));
    assert_eq!(task.column_id(), done_column.id());
}

#[rstest]
fn leaving_completion_column_reopens_task(clock: FixedClock) {
    let project_id = ProjectId::new();
    let done_column =
        Column::new("Done", 2, true, project_id, &clock).expect("column creation should succeed");
    let doing_column =
        Column::new("Doing", 1, false, project_id, &clock).expect("column creation should succeed");
    let mut task = Task::new(new_task("Ship the release", project_id, ColumnId::new()), &clock)
        .expect("task creation should succeed");

    task.move_to_column(&done_column, &clock)
        .expect("move should succeed");
    task.move_to_column(&doing_column, &clock)
        .expect("move should succeed");

    assert_eq!(task.status(), TaskStatus::Doing);
    assert!(task.finished_at().is_none());
}

#[rstest]
fn moving_to_a_foreign_project_column_is_rejected(clock: FixedClock) {
    let project_id = ProjectId::new();
    let foreign_column = Column::new("Done", 2, true, ProjectId::new(), &clock)
        .expect("column creation should succeed");
    let mut task = Task::new(new_task("Ship the release", project_id, ColumnId::new()), &clock)
        .expect("task creation should succeed");

    let result = task.move_to_column(&foreign_column, &clock);

    assert!(matches!(
        result,
        Err(BoardDomainError::ColumnProjectMismatch { .. })
    ));
    assert_eq!(task.status(), TaskStatus::Doing);
}

#[rstest]
fn mark_overdue_only_transitions_in_progress_tasks(clock: FixedClock) {
    let project_id = ProjectId::new();
    let done_column =
        Column::new("Done", 2, true, project_id, &clock).expect("column creation should succeed");

    let mut doing = Task::new(new_task("In progress", project_id, ColumnId::new()), &clock)
        .expect("task creation should succeed");
    doing.mark_overdue(&clock);
    assert_eq!(doing.status(), TaskStatus::Overdue);

    let mut done = Task::new(new_task("Finished", project_id, ColumnId::new()), &clock)
        .expect("task creation should succeed");
    done.move_to_column(&done_column, &clock)
        .expect("move should succeed");
    done.mark_overdue(&clock);
    assert_eq!(done.status(), TaskStatus::Done);
    assert!(done.finished_at().is_some());
}

#[rstest]
fn persisted_done_task_requires_a_finish_instant(clock: FixedClock) {
    let data = persisted_task(&clock, TaskStatus::Done, None);
    let result = Task::from_persisted(data);
    assert!(matches!(
        result,
        Err(BoardDomainError::DoneWithoutFinishInstant(_))
    ));
}

#[rstest]
fn persisted_in_progress_task_rejects_a_finish_instant(clock: FixedClock) {
    let finished = Some(clock_instant(&clock));
    let data = persisted_task(&clock, TaskStatus::Doing, finished);
    let result = Task::from_persisted(data);
    assert!(matches!(
        result,
        Err(BoardDomainError::FinishInstantWithoutDone(_))
    ));
}

#[rstest]
#[case("high", Priority::High)]
#[case(" Medium ", Priority::Medium)]
#[case("LOW", Priority::Low)]
fn priority_parses_stored_values(#[case] input: &str, #[case] expected: Priority) {
    assert_eq!(Priority::try_from(input), Ok(expected));
}

#[rstest]
#[case("doing", TaskStatus::Doing)]
#[case("Done", TaskStatus::Done)]
#[case(" overdue ", TaskStatus::Overdue)]
fn status_parses_stored_values(#[case] input: &str, #[case] expected: TaskStatus) {
    assert_eq!(TaskStatus::try_from(input), Ok(expected));
}

#[rstest]
fn unknown_stored_values_are_rejected() {
    assert!(Priority::try_from("urgent").is_err());
    assert!(TaskStatus::try_from("archived").is_err());
}

fn clock_instant(clock: &FixedClock) -> chrono::DateTime<Utc> {
    use mockable::Clock;
    clock.utc()
}

fn persisted_task(
    clock: &FixedClock,
    status: TaskStatus,
    finished_at: Option<chrono::DateTime<Utc>>,
) -> PersistedTaskData {
    let now = clock_instant(clock);
    PersistedTaskData {
        id: TaskId::new(),
        title: "Persisted".to_owned(),
        content: None,
        deadline: now,
        priority: Priority::Medium,
        status,
        finished_at,
        project_id: ProjectId::new(),
        column_id: ColumnId::new(),
        created_at: now,
        updated_at: now,
    }
}
