//! `PostgreSQL` repository implementation for sent-notification records.

use super::{models::to_new_row, schema::notifications};
use crate::board::domain::TaskId;
use crate::notification::{
    domain::{Notification, NotificationKind},
    ports::{NotificationRepository, NotificationRepositoryError, NotificationRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by notification adapters.
pub type NotificationPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed sent-notification repository.
///
/// Claims rely on a unique index over `(task_id, kind)`; the insert is
/// made conditional with `ON CONFLICT DO NOTHING` so concurrent runs
/// cannot both claim the same reminder.
#[derive(Debug, Clone)]
pub struct PostgresNotificationRepository {
    pool: NotificationPgPool,
}

impl PostgresNotificationRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: NotificationPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> NotificationRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> NotificationRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(NotificationRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(NotificationRepositoryError::persistence)?
    }
}

#[async_trait]
impl NotificationRepository for PostgresNotificationRepository {
    async fn is_sent(
        &self,
        task_id: TaskId,
        kind: NotificationKind,
    ) -> NotificationRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            diesel::select(diesel::dsl::exists(
                notifications::table
                    .filter(notifications::task_id.eq(task_id.into_inner()))
                    .filter(notifications::kind.eq(kind.as_str())),
            ))
            .get_result(connection)
            .map_err(NotificationRepositoryError::persistence)
        })
        .await
    }

    async fn claim(&self, notification: &Notification) -> NotificationRepositoryResult<bool> {
        let new_row = to_new_row(notification);

        self.run_blocking(move |connection| {
            let inserted = diesel::insert_into(notifications::table)
                .values(&new_row)
                .on_conflict((notifications::task_id, notifications::kind))
                .do_nothing()
                .execute(connection)
                .map_err(NotificationRepositoryError::persistence)?;
            Ok(inserted == 1)
        })
        .await
    }
}
