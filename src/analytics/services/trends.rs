//! Trend computation over the task store.

use crate::analytics::domain::{MonthlyTrend, WeeklyTrend};
use crate::board::{
    domain::{OwnerId, Period},
    ports::{TaskStore, TaskStoreError},
};
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by analytics operations.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Task store query failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Completion-trend computation service.
///
/// The period is injected by the caller, so the service needs no clock of
/// its own and stays deterministic under test.
#[derive(Clone)]
pub struct AnalyticsService<S>
where
    S: TaskStore,
{
    store: Arc<S>,
}

impl<S> AnalyticsService<S>
where
    S: TaskStore,
{
    /// Creates a new analytics service over the given store.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Computes the weekday/hour completion distribution for one owner over
    /// the period.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Store`] when the store query fails.
    pub async fn weekly_trends(
        &self,
        owner: OwnerId,
        period: &Period,
    ) -> AnalyticsResult<WeeklyTrend> {
        let tasks = self.store.tasks_finished_in(owner, period).await?;
        Ok(WeeklyTrend::from_tasks(&tasks))
    }

    /// Computes the day-of-month completion distribution for one owner over
    /// the period.
    ///
    /// The day count is taken from the period's local calendar span.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Store`] when the store query fails.
    pub async fn monthly_trends(
        &self,
        owner: OwnerId,
        period: &Period,
    ) -> AnalyticsResult<MonthlyTrend> {
        let tasks = self.store.tasks_finished_in(owner, period).await?;
        Ok(MonthlyTrend::from_tasks(&tasks, period.local_day_count()))
    }
}
