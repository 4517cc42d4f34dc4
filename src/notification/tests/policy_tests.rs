//! Reminder threshold policy tests.

use crate::board::domain::{
    ColumnId, PersistedTaskData, Priority, ProjectId, Task, TaskId, TaskStatus,
};
use crate::notification::domain::{reminder_window, should_alert};
use chrono::{DateTime, Duration, TimeZone, Utc};
use rstest::rstest;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 14, 0, 0, 0)
        .single()
        .expect("valid fixture instant")
}

fn task_due_in(priority: Priority, remaining: Duration) -> Task {
    let created_at = now() - Duration::days(1);
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        title: "Due soon".to_owned(),
        content: None,
        deadline: now() + remaining,
        priority,
        status: TaskStatus::Doing,
        finished_at: None,
        project_id: ProjectId::new(),
        column_id: ColumnId::new(),
        created_at,
        updated_at: created_at,
    })
    .expect("fixture task should validate")
}

#[rstest]
fn window_widens_for_high_priority() {
    assert_eq!(reminder_window(Priority::High), Duration::hours(36));
    assert_eq!(reminder_window(Priority::Medium), Duration::hours(24));
    assert_eq!(reminder_window(Priority::Low), Duration::hours(24));
}

#[rstest]
// The boundary is inclusive for every priority.
#[case(Priority::High, Duration::hours(36), true)]
#[case(Priority::High, Duration::hours(36) + Duration::seconds(1), false)]
#[case(Priority::High, Duration::hours(35), true)]
#[case(Priority::Medium, Duration::hours(24), true)]
#[case(Priority::Medium, Duration::hours(24) + Duration::seconds(1), false)]
#[case(Priority::Low, Duration::hours(25), false)]
#[case(Priority::Low, Duration::hours(2), true)]
fn alerts_fire_within_the_priority_window(
    #[case] priority: Priority,
    #[case] remaining: Duration,
    #[case] expected: bool,
) {
    let task = task_due_in(priority, remaining);
    assert_eq!(should_alert(&task, now()), expected);
}

#[rstest]
fn a_monday_task_due_wednesday_alerts_from_tuesday_midnight() {
    // Created Monday with a Wednesday 09:00 deadline: at Tuesday 00:00 a
    // high-priority task is 33 hours out, inside its 36-hour window.
    let task = task_due_in(Priority::High, Duration::hours(33));
    assert!(should_alert(&task, now()));

    // The same deadline on medium priority stays outside the 24-hour window.
    let medium = task_due_in(Priority::Medium, Duration::hours(33));
    assert!(!should_alert(&medium, now()));
}

#[rstest]
fn past_deadlines_always_alert() {
    let task = task_due_in(Priority::Low, Duration::hours(-5));
    assert!(should_alert(&task, now()));
}
