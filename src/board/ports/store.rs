//! Read-only store port over task, project, and owner records.

use crate::board::domain::{Owner, OwnerId, Period, ProjectId, Task};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Filtered query contract over the task store.
///
/// The scheduled jobs only read board records; all writes (CRUD, column
/// moves) happen in the surrounding application. Implementations must treat
/// every range as half-open `[start, end)`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Returns all task owners, in a stable order.
    async fn list_owners(&self) -> TaskStoreResult<Vec<Owner>>;

    /// Returns the owner of the given project.
    ///
    /// Returns `None` when the project does not exist.
    async fn project_owner(&self, project_id: ProjectId) -> TaskStoreResult<Option<Owner>>;

    /// Returns tasks owned by `owner` created within the period.
    async fn tasks_created_in(&self, owner: OwnerId, period: &Period)
    -> TaskStoreResult<Vec<Task>>;

    /// Returns tasks owned by `owner` with done status and a finish instant
    /// within the period.
    async fn tasks_finished_in(
        &self,
        owner: OwnerId,
        period: &Period,
    ) -> TaskStoreResult<Vec<Task>>;

    /// Returns tasks owned by `owner` with overdue status and a deadline
    /// within the period.
    async fn tasks_overdue_in(&self, owner: OwnerId, period: &Period)
    -> TaskStoreResult<Vec<Task>>;

    /// Returns in-progress tasks whose deadline is at or after `now`
    /// (candidates for deadline reminders).
    async fn deadline_candidates(&self, now: DateTime<Utc>) -> TaskStoreResult<Vec<Task>>;

    /// Returns in-progress tasks whose deadline is at or before `now`
    /// (candidates for overdue reminders).
    async fn overdue_candidates(&self, now: DateTime<Utc>) -> TaskStoreResult<Vec<Task>>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// Persistence-layer failure, including rows that fail domain
    /// validation on the way out.
    #[error("task store error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
