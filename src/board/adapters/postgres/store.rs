//! `PostgreSQL` task store implementation for the scheduled jobs.

use super::{
    models::{OwnerRow, TaskRow, row_to_owner, row_to_task},
    schema::{owners, projects, tasks},
};
use crate::board::{
    domain::{Owner, OwnerId, Period, ProjectId, Task, TaskStatus},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by board adapters.
pub type BoardPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task store.
#[derive(Debug, Clone)]
pub struct PostgresTaskStore {
    pool: BoardPgPool,
}

impl PostgresTaskStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskStoreError::persistence)?
    }
}

/// Converts loaded task rows to domain tasks.
fn load_tasks(rows: Vec<TaskRow>) -> TaskStoreResult<Vec<Task>> {
    rows.into_iter().map(row_to_task).collect()
}

#[async_trait]
impl TaskStore for PostgresTaskStore {
    async fn list_owners(&self) -> TaskStoreResult<Vec<Owner>> {
        self.run_blocking(move |connection| {
            let rows = owners::table
                .select(OwnerRow::as_select())
                .order(owners::created_at.asc())
                .load::<OwnerRow>(connection)
                .map_err(TaskStoreError::persistence)?;
            rows.into_iter().map(row_to_owner).collect()
        })
        .await
    }

    async fn project_owner(&self, project_id: ProjectId) -> TaskStoreResult<Option<Owner>> {
        self.run_blocking(move |connection| {
            let row = projects::table
                .inner_join(owners::table)
                .filter(projects::id.eq(project_id.into_inner()))
                .select(OwnerRow::as_select())
                .first::<OwnerRow>(connection)
                .optional()
                .map_err(TaskStoreError::persistence)?;
            row.map(row_to_owner).transpose()
        })
        .await
    }

    async fn tasks_created_in(
        &self,
        owner: OwnerId,
        period: &Period,
    ) -> TaskStoreResult<Vec<Task>> {
        let (start, end) = (period.start(), period.end());
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .inner_join(projects::table)
                .filter(projects::owner_id.eq(owner.into_inner()))
                .filter(tasks::created_at.ge(start))
                .filter(tasks::created_at.lt(end))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskStoreError::persistence)?;
            load_tasks(rows)
        })
        .await
    }

    async fn tasks_finished_in(
        &self,
        owner: OwnerId,
        period: &Period,
    ) -> TaskStoreResult<Vec<Task>> {
        let (start, end) = (period.start(), period.end());
        self.run_blocking(move |connection| {
            // NULL finish instants drop out of the range comparison.
            let rows = tasks::table
                .inner_join(projects::table)
                .filter(projects::owner_id.eq(owner.into_inner()))
                .filter(tasks::status.eq(TaskStatus::Done.as_str()))
                .filter(tasks::finished_at.ge(Some(start)))
                .filter(tasks::finished_at.lt(Some(end)))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskStoreError::persistence)?;
            load_tasks(rows)
        })
        .await
    }

    async fn tasks_overdue_in(
        &self,
        owner: OwnerId,
        period: &Period,
    ) -> TaskStoreResult<Vec<Task>> {
        let (start, end) = (period.start(), period.end());
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .inner_join(projects::table)
                .filter(projects::owner_id.eq(owner.into_inner()))
                .filter(tasks::status.eq(TaskStatus::Overdue.as_str()))
                .filter(tasks::deadline.ge(start))
                .filter(tasks::deadline.lt(end))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskStoreError::persistence)?;
            load_tasks(rows)
        })
        .await
    }

    async fn deadline_candidates(&self, now: DateTime<Utc>) -> TaskStoreResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::status.eq(TaskStatus::Doing.as_str()))
                .filter(tasks::deadline.ge(now))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskStoreError::persistence)?;
            load_tasks(rows)
        })
        .await
    }

    async fn overdue_candidates(&self, now: DateTime<Utc>) -> TaskStoreResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::status.eq(TaskStatus::Doing.as_str()))
                .filter(tasks::deadline.le(now))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskStoreError::persistence)?;
            load_tasks(rows)
        })
        .await
    }
}
