//! `PostgreSQL` repository implementation for report persistence.

use super::{
    models::{ReportRow, row_to_report, to_new_row},
    schema::reports,
};
use crate::board::domain::OwnerId;
use crate::report::{
    domain::{Report, ReportId, ReportKind},
    ports::{ReportRepository, ReportRepositoryError, ReportRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by report adapters.
pub type ReportPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed report repository.
#[derive(Debug, Clone)]
pub struct PostgresReportRepository {
    pool: ReportPgPool,
}

impl PostgresReportRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ReportPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ReportRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ReportRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ReportRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ReportRepositoryError::persistence)?
    }
}

#[async_trait]
impl ReportRepository for PostgresReportRepository {
    async fn store(&self, report: &Report) -> ReportRepositoryResult<()> {
        let report_id = report.id();
        let new_row = to_new_row(report)?;

        self.run_blocking(move |connection| {
            diesel::insert_into(reports::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ReportRepositoryError::DuplicateReport(report_id)
                    }
                    _ => ReportRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn list_for_owner(
        &self,
        owner: OwnerId,
        kind: ReportKind,
    ) -> ReportRepositoryResult<Vec<Report>> {
        self.run_blocking(move |connection| {
            let rows = reports::table
                .filter(reports::owner_id.eq(owner.into_inner()))
                .filter(reports::kind.eq(kind.code()))
                .order(reports::created_at.desc())
                .select(ReportRow::as_select())
                .load::<ReportRow>(connection)
                .map_err(ReportRepositoryError::persistence)?;
            rows.into_iter().map(row_to_report).collect()
        })
        .await
    }

    async fn find_for_owner(
        &self,
        id: ReportId,
        owner: OwnerId,
    ) -> ReportRepositoryResult<Option<Report>> {
        self.run_blocking(move |connection| {
            let row = reports::table
                .filter(reports::id.eq(id.into_inner()))
                .filter(reports::owner_id.eq(owner.into_inner()))
                .select(ReportRow::as_select())
                .first::<ReportRow>(connection)
                .optional()
                .map_err(ReportRepositoryError::persistence)?;
            row.map(row_to_report).transpose()
        })
        .await
    }
}
