//! In-memory task store query tests.

use crate::board::{
    adapters::memory::InMemoryTaskStore,
    domain::{
        ColumnId, EmailAddress, Owner, OwnerId, Period, PersistedTaskData, Priority, Project,
        ProjectId, Task, TaskId, TaskStatus,
    },
    ports::TaskStore,
};
use crate::testing::FixedClock;
use chrono::{DateTime, TimeZone, Utc};
use rstest::{fixture, rstest};

struct Fixture {
    store: InMemoryTaskStore,
    owner: OwnerId,
    project: ProjectId,
}

fn instant(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, day, hour, 0, 0)
        .single()
        .expect("valid fixture instant")
}

fn seed_task(
    fixture: &Fixture,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    deadline: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
) -> TaskId {
    let task = Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        title: "Seeded".to_owned(),
        content: None,
        deadline,
        priority: Priority::Medium,
        status,
        finished_at,
        project_id: fixture.project,
        column_id: ColumnId::new(),
        created_at,
        updated_at: created_at,
    })
    .expect("seed task should validate");
    let id = task.id();
    fixture.store.add_task(task).expect("seeding should succeed");
    id
}

#[fixture]
fn fixture() -> Fixture {
    let clock = FixedClock::new(instant(1, 0));
    let store = InMemoryTaskStore::new();
    let owner = OwnerId::new();
    let email = EmailAddress::new("owner@example.com").expect("valid fixture address");
    store
        .add_owner(Owner::new(owner, email))
        .expect("seeding should succeed");
    let project = Project::new("Board", owner, &clock).expect("valid fixture project");
    let project_id = project.id();
    store.add_project(project).expect("seeding should succeed");
    Fixture {
        store,
        owner,
        project: project_id,
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_in_filters_by_period_and_owner(fixture: Fixture) {
    let period = Period::new(instant(6, 0), instant(13, 0)).expect("valid fixture period");
    let inside = seed_task(&fixture, TaskStatus::Doing, instant(7, 9), instant(20, 17), None);
    seed_task(&fixture, TaskStatus::Doing, instant(4, 9), instant(20, 17), None);

    // A task under a project the store does not know is never owned.
    let foreign = Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        title: "Foreign".to_owned(),
        content: None,
        deadline: instant(20, 17),
        priority: Priority::Medium,
        status: TaskStatus::Doing,
        finished_at: None,
        project_id: ProjectId::new(),
        column_id: ColumnId::new(),
        created_at: instant(7, 9),
        updated_at: instant(7, 9),
    })
    .expect("seed task should validate");
    fixture
        .store
        .add_task(foreign)
        .expect("seeding should succeed");

    let tasks = fixture
        .store
        .tasks_created_in(fixture.owner, &period)
        .await
        .expect("query should succeed");

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks.first().map(Task::id), Some(inside));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn finished_in_matches_finish_instants_only(fixture: Fixture) {
    let period = Period::new(instant(6, 0), instant(13, 0)).expect("valid fixture period");
    let finished_inside = seed_task(
        &fixture,
        TaskStatus::Done,
        instant(1, 9),
        instant(20, 17),
        Some(instant(8, 15)),
    );
    // Finished after the period end.
    seed_task(
        &fixture,
        TaskStatus::Done,
        instant(1, 9),
        instant(20, 17),
        Some(instant(13, 0)),
    );
    // Never finished.
    seed_task(&fixture, TaskStatus::Doing, instant(7, 9), instant(20, 17), None);

    let tasks = fixture
        .store
        .tasks_finished_in(fixture.owner, &period)
        .await
        .expect("query should succeed");

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks.first().map(Task::id), Some(finished_inside));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn overdue_in_requires_overdue_status_and_deadline_in_period(fixture: Fixture) {
    let period = Period::new(instant(6, 0), instant(13, 0)).expect("valid fixture period");
    let overdue = seed_task(
        &fixture,
        TaskStatus::Overdue,
        instant(1, 9),
        instant(8, 12),
        None,
    );
    // Overdue status but deadline outside the period.
    seed_task(&fixture, TaskStatus::Overdue, instant(1, 9), instant(14, 12), None);
    // Deadline in period but still in progress.
    seed_task(&fixture, TaskStatus::Doing, instant(1, 9), instant(8, 12), None);

    let tasks = fixture
        .store
        .tasks_overdue_in(fixture.owner, &period)
        .await
        .expect("query should succeed");

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks.first().map(Task::id), Some(overdue));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn candidate_queries_split_on_the_deadline_boundary(fixture: Fixture) {
    let now = instant(10, 12);
    let at_now = seed_task(&fixture, TaskStatus::Doing, instant(1, 9), now, None);
    let upcoming = seed_task(&fixture, TaskStatus::Doing, instant(1, 9), instant(11, 12), None);
    let past = seed_task(&fixture, TaskStatus::Doing, instant(1, 9), instant(9, 12), None);
    // Done tasks are never candidates.
    seed_task(
        &fixture,
        TaskStatus::Done,
        instant(1, 9),
        instant(11, 12),
        Some(instant(2, 9)),
    );

    let mut deadline: Vec<TaskId> = fixture
        .store
        .deadline_candidates(now)
        .await
        .expect("query should succeed")
        .iter()
        .map(Task::id)
        .collect();
    deadline.sort_unstable();
    let mut expected_deadline = vec![at_now, upcoming];
    expected_deadline.sort_unstable();
    assert_eq!(deadline, expected_deadline);

    let mut overdue: Vec<TaskId> = fixture
        .store
        .overdue_candidates(now)
        .await
        .expect("query should succeed")
        .iter()
        .map(Task::id)
        .collect();
    overdue.sort_unstable();
    let mut expected_overdue = vec![at_now, past];
    expected_overdue.sort_unstable();
    assert_eq!(overdue, expected_overdue);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn project_owner_resolves_through_the_project(fixture: Fixture) {
    let owner = fixture
        .store
        .project_owner(fixture.project)
        .await
        .expect("lookup should succeed");
    assert_eq!(owner.map(|owner| owner.id()), Some(fixture.owner));

    let missing = fixture
        .store
        .project_owner(ProjectId::new())
        .await
        .expect("lookup should succeed");
    assert!(missing.is_none());
}
