//! Repository port for sent-notification records.

use crate::board::domain::TaskId;
use crate::notification::domain::{Notification, NotificationKind};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for notification repository operations.
pub type NotificationRepositoryResult<T> = Result<T, NotificationRepositoryError>;

/// Sent-notification persistence contract.
///
/// The repository exists purely to guard against duplicate sends; records
/// are never read back by anything else.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Returns whether a reminder of this kind was already sent for the
    /// task.
    async fn is_sent(
        &self,
        task_id: TaskId,
        kind: NotificationKind,
    ) -> NotificationRepositoryResult<bool>;

    /// Atomically records the notification unless one already exists for
    /// its `(task, kind)` pair.
    ///
    /// Returns `true` when this call claimed the pair, `false` when a
    /// concurrent run got there first. Implementations must make the
    /// insert conditional (insert-or-ignore), not check-then-write.
    async fn claim(&self, notification: &Notification) -> NotificationRepositoryResult<bool>;
}

/// Errors returned by notification repository implementations.
#[derive(Debug, Clone, Error)]
pub enum NotificationRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl NotificationRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
