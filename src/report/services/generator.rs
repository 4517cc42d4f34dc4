//! Scheduled report generation over all owners.

use crate::analytics::services::{AnalyticsError, AnalyticsService};
use crate::board::{
    domain::{OwnerId, Period, PeriodError, Task, TaskId, TaskStatus},
    ports::{TaskStore, TaskStoreError},
};
use crate::report::{
    domain::{CompletionHours, Report, ReportAnalysis, ReportId, ReportKind, TaskTally},
    ports::{ReportRepository, ReportRepositoryError},
};
use mockable::Clock;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// Service-level errors for report generation.
#[derive(Debug, Error)]
pub enum ReportServiceError {
    /// Period computation failed.
    #[error(transparent)]
    Period(#[from] PeriodError),
    /// Task store query failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
    /// Report persistence failed.
    #[error(transparent)]
    Repository(#[from] ReportRepositoryError),
    /// Analytics computation failed.
    #[error(transparent)]
    Analytics(#[from] AnalyticsError),
}

/// Result type for report service operations.
pub type ReportServiceResult<T> = Result<T, ReportServiceError>;

/// One owner whose report could not be generated in a run.
#[derive(Debug, Clone)]
pub struct ReportFailure {
    /// Owner whose report failed.
    pub owner: OwnerId,
    /// Rendered failure reason.
    pub reason: String,
}

/// Outcome of one scheduled report run.
///
/// Per-owner failures are collected here rather than propagated, so one
/// owner's failure never blocks the rest of the batch.
#[derive(Debug, Clone, Default)]
pub struct ReportRunSummary {
    /// Identifiers of the reports persisted this run.
    pub generated: Vec<ReportId>,
    /// Owners skipped because their report failed.
    pub failures: Vec<ReportFailure>,
}

/// Report generation orchestration service.
#[derive(Clone)]
pub struct ReportService<S, R, C>
where
    S: TaskStore,
    R: ReportRepository,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    repository: Arc<R>,
    analytics: AnalyticsService<S>,
    clock: Arc<C>,
}

impl<S, R, C> ReportService<S, R, C>
where
    S: TaskStore,
    R: ReportRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new report service.
    #[must_use]
    pub fn new(store: Arc<S>, repository: Arc<R>, clock: Arc<C>) -> Self {
        let analytics = AnalyticsService::new(Arc::clone(&store));
        Self {
            store,
            repository,
            analytics,
            clock,
        }
    }

    /// Generates one weekly report per owner, covering the previous full
    /// calendar week (local Monday 00:00 to Monday 00:00).
    ///
    /// # Errors
    ///
    /// Returns [`ReportServiceError`] when period computation or the owner
    /// listing fails; per-owner failures are collected in the summary
    /// instead.
    pub async fn run_weekly(&self) -> ReportServiceResult<ReportRunSummary> {
        let period = Period::previous_week(self.clock.local())?;
        self.run(&period, ReportKind::Weekly).await
    }

    /// Generates one monthly report per owner, covering the previous full
    /// calendar month.
    ///
    /// # Errors
    ///
    /// Returns [`ReportServiceError`] when period computation or the owner
    /// listing fails; per-owner failures are collected in the summary
    /// instead.
    pub async fn run_monthly(&self) -> ReportServiceResult<ReportRunSummary> {
        let period = Period::previous_month(self.clock.local())?;
        self.run(&period, ReportKind::Monthly).await
    }

    async fn run(
        &self,
        period: &Period,
        kind: ReportKind,
    ) -> ReportServiceResult<ReportRunSummary> {
        let owners = self.store.list_owners().await?;
        let mut summary = ReportRunSummary::default();

        for owner in owners {
            match self.generate_for_owner(owner.id(), period, kind).await {
                Ok(report_id) => summary.generated.push(report_id),
                Err(error) => {
                    warn!(owner = %owner.id(), %error, "report generation failed for owner; continuing");
                    summary.failures.push(ReportFailure {
                        owner: owner.id(),
                        reason: error.to_string(),
                    });
                }
            }
        }

        Ok(summary)
    }

    async fn generate_for_owner(
        &self,
        owner: OwnerId,
        period: &Period,
        kind: ReportKind,
    ) -> ReportServiceResult<ReportId> {
        // Union of the three period queries, deduplicated by task id.
        let mut union: BTreeMap<TaskId, Task> = BTreeMap::new();
        for task in self.store.tasks_created_in(owner, period).await? {
            union.insert(task.id(), task);
        }
        for task in self.store.tasks_finished_in(owner, period).await? {
            union.insert(task.id(), task);
        }
        let mut overdue_ids: BTreeSet<TaskId> = BTreeSet::new();
        for task in self.store.tasks_overdue_in(owner, period).await? {
            overdue_ids.insert(task.id());
            union.insert(task.id(), task);
        }

        let tally = tally_union(&union, &overdue_ids);
        let average_completion = average_completion(&union, tally.completed);

        let analysis = match kind {
            ReportKind::Weekly => {
                ReportAnalysis::Weekly(self.analytics.weekly_trends(owner, period).await?)
            }
            ReportKind::Monthly => {
                ReportAnalysis::Monthly(self.analytics.monthly_trends(owner, period).await?)
            }
        };

        let report = Report::new(
            owner,
            *period,
            tally,
            average_completion,
            analysis,
            &*self.clock,
        );
        self.repository.store(&report).await?;
        Ok(report.id())
    }
}

/// Counts the deduplicated union by status.
fn tally_union(union: &BTreeMap<TaskId, Task>, overdue_ids: &BTreeSet<TaskId>) -> TaskTally {
    let mut tally = TaskTally {
        total: to_count(union.len()),
        overdue: to_count(overdue_ids.len()),
        ..TaskTally::default()
    };
    for task in union.values() {
        match task.status() {
            TaskStatus::Done => tally.completed = tally.completed.saturating_add(1),
            TaskStatus::Doing => tally.pending = tally.pending.saturating_add(1),
            TaskStatus::Overdue => {}
        }
    }
    tally
}

/// Mean completion time over the done tasks of the union.
fn average_completion(union: &BTreeMap<TaskId, Task>, completed: u64) -> CompletionHours {
    let total_seconds: i64 = union
        .values()
        .filter_map(|task| {
            task.finished_at()
                .map(|finished| (finished - task.created_at()).num_seconds())
        })
        .sum();
    CompletionHours::mean_of_seconds(total_seconds, completed)
}

fn to_count(value: usize) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}
