//! End-to-end scheduled-job tests over the in-memory adapters.
//!
//! These tests drive the report and reminder services the way the external
//! scheduler would, across multiple cycles, verifying the cross-module
//! behaviour: period selection, union tallying, analytics payloads, and
//! duplicate-send prevention.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use std::sync::Arc;
use taskboard::board::{
    adapters::memory::InMemoryTaskStore,
    domain::{
        ColumnId, EmailAddress, Owner, OwnerId, PersistedTaskData, Priority, Project, ProjectId,
        Task, TaskId, TaskStatus,
    },
};
use taskboard::notification::{
    adapters::memory::{InMemoryNotificationRepository, RecordingMailer},
    services::ReminderService,
};
use taskboard::report::{
    adapters::memory::InMemoryReportRepository,
    domain::{CompletionHours, ReportAnalysis, ReportKind},
    ports::ReportRepository,
    services::ReportService,
};
use taskboard::testing::FixedClock;

fn local_utc(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Local
        .with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("valid fixture instant")
        .with_timezone(&Utc)
}

struct Board {
    store: Arc<InMemoryTaskStore>,
    owner: OwnerId,
    project: ProjectId,
}

fn seeded_board(clock: &FixedClock) -> Board {
    let store = Arc::new(InMemoryTaskStore::new());
    let owner = OwnerId::new();
    let email = EmailAddress::new("owner@example.com").expect("valid fixture address");
    store
        .add_owner(Owner::new(owner, email))
        .expect("seeding should succeed");
    let project = Project::new("Launch board", owner, clock).expect("valid fixture project");
    let project_id = project.id();
    store.add_project(project).expect("seeding should succeed");
    Board {
        store,
        owner,
        project: project_id,
    }
}

fn seed_task(
    board: &Board,
    status: TaskStatus,
    priority: Priority,
    created_at: DateTime<Utc>,
    deadline: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
) -> TaskId {
    let task = Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        title: "Integration task".to_owned(),
        content: None,
        deadline,
        priority,
        status,
        finished_at,
        project_id: board.project,
        column_id: ColumnId::new(),
        created_at,
        updated_at: created_at,
    })
    .expect("seed task should validate");
    let id = task.id();
    board.store.add_task(task).expect("seeding should succeed");
    id
}

#[tokio::test(flavor = "multi_thread")]
async fn weekly_report_flows_from_store_to_repository() {
    // Run the job on Wednesday 2024-05-15; it must cover May 6 to May 13.
    let clock = Arc::new(FixedClock::new(local_utc(2024, 5, 15, 10)));
    let board = seeded_board(&clock);

    seed_task(
        &board,
        TaskStatus::Done,
        Priority::Medium,
        local_utc(2024, 5, 7, 9),
        local_utc(2024, 5, 20, 17),
        Some(local_utc(2024, 5, 7, 15)),
    );
    seed_task(
        &board,
        TaskStatus::Doing,
        Priority::Medium,
        local_utc(2024, 5, 8, 9),
        local_utc(2024, 5, 25, 17),
        None,
    );
    // Outside the reported week entirely.
    seed_task(
        &board,
        TaskStatus::Done,
        Priority::Medium,
        local_utc(2024, 5, 13, 9),
        local_utc(2024, 5, 20, 17),
        Some(local_utc(2024, 5, 14, 9)),
    );

    let repository = Arc::new(InMemoryReportRepository::new());
    let service = ReportService::new(
        Arc::clone(&board.store),
        Arc::clone(&repository),
        Arc::clone(&clock),
    );

    let summary = service.run_weekly().await.expect("run should succeed");
    assert_eq!(summary.generated.len(), 1);
    assert!(summary.failures.is_empty());

    let report = repository
        .list_for_owner(board.owner, ReportKind::Weekly)
        .await
        .expect("listing should succeed")
        .into_iter()
        .next()
        .expect("one report should exist");

    assert_eq!(report.tally().total, 2);
    assert_eq!(report.tally().completed, 1);
    assert_eq!(report.tally().pending, 1);
    // One completion taking 6 hours.
    assert_eq!(
        report.average_completion(),
        CompletionHours::from_centihours(600)
    );
    let ReportAnalysis::Weekly(trend) = report.analysis() else {
        panic!("weekly report should carry a weekly analysis");
    };
    assert_eq!(trend.weekday_counts().map(|(_, count)| count).sum::<u64>(), 1);

    // Owner-scoped reads hide the report from other users.
    let foreign = repository
        .find_for_owner(report.id(), OwnerId::new())
        .await
        .expect("lookup should succeed");
    assert!(foreign.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn reminders_stay_idempotent_across_cycles() {
    let now = local_utc(2024, 5, 14, 0);
    let clock = Arc::new(FixedClock::new(now));
    let board = seeded_board(&clock);

    // High priority 33 hours out: inside the 36-hour window.
    let urgent = seed_task(
        &board,
        TaskStatus::Doing,
        Priority::High,
        now - Duration::days(1),
        now + Duration::hours(33),
        None,
    );
    // Past its deadline and still in progress.
    let late = seed_task(
        &board,
        TaskStatus::Doing,
        Priority::Low,
        now - Duration::days(3),
        now - Duration::hours(2),
        None,
    );

    let repository = Arc::new(InMemoryNotificationRepository::new());
    let mailer = Arc::new(RecordingMailer::new());
    let service = ReminderService::new(
        Arc::clone(&board.store),
        Arc::clone(&repository),
        Arc::clone(&mailer),
        Arc::clone(&clock),
    );

    let deadline_run = service
        .send_deadline_reminders()
        .await
        .expect("run should succeed");
    assert_eq!(deadline_run.sent, vec![urgent]);

    let overdue_run = service
        .send_overdue_reminders()
        .await
        .expect("run should succeed");
    assert_eq!(overdue_run.sent, vec![late]);

    assert_eq!(mailer.sent().expect("mailer should record").len(), 2);

    // A minute later the scheduler fires again; nothing new goes out.
    let second_deadline = service
        .send_deadline_reminders()
        .await
        .expect("rerun should succeed");
    let second_overdue = service
        .send_overdue_reminders()
        .await
        .expect("rerun should succeed");

    assert!(second_deadline.sent.is_empty());
    assert_eq!(second_deadline.skipped, 1);
    assert!(second_overdue.sent.is_empty());
    assert_eq!(second_overdue.skipped, 1);
    assert_eq!(mailer.sent().expect("mailer should record").len(), 2);
    assert_eq!(
        repository.records().expect("repository should record").len(),
        2
    );
}
