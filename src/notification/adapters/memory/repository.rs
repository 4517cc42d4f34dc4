//! In-memory notification repository for reminder tests.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use crate::board::domain::TaskId;
use crate::notification::{
    domain::{Notification, NotificationKind},
    ports::{NotificationRepository, NotificationRepositoryError, NotificationRepositoryResult},
};

#[derive(Debug, Default)]
struct RepositoryState {
    claimed: HashSet<(TaskId, NotificationKind)>,
    records: Vec<Notification>,
}

/// Thread-safe in-memory sent-notification repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationRepository {
    state: Arc<RwLock<RepositoryState>>,
}

impl InMemoryNotificationRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every claimed notification record.
    ///
    /// # Errors
    /// Returns a persistence error when the interior lock is poisoned.
    pub fn records(&self) -> NotificationRepositoryResult<Vec<Notification>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.records.clone())
    }
}

fn lock_error(err: impl ToString) -> NotificationRepositoryError {
    NotificationRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationRepository {
    async fn is_sent(
        &self,
        task_id: TaskId,
        kind: NotificationKind,
    ) -> NotificationRepositoryResult<bool> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.claimed.contains(&(task_id, kind)))
    }

    async fn claim(&self, notification: &Notification) -> NotificationRepositoryResult<bool> {
        let mut state = self.state.write().map_err(lock_error)?;
        let newly_claimed = state
            .claimed
            .insert((notification.task_id(), notification.kind()));
        if newly_claimed {
            state.records.push(notification.clone());
        }
        Ok(newly_claimed)
    }
}
