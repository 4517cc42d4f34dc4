//! In-memory report repository for report generation tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::domain::OwnerId;
use crate::report::{
    domain::{Report, ReportId, ReportKind},
    ports::{ReportRepository, ReportRepositoryError, ReportRepositoryResult},
};

/// Thread-safe in-memory report repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReportRepository {
    state: Arc<RwLock<HashMap<ReportId, Report>>>,
}

impl InMemoryReportRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> ReportRepositoryError {
    ReportRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ReportRepository for InMemoryReportRepository {
    async fn store(&self, report: &Report) -> ReportRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.contains_key(&report.id()) {
            return Err(ReportRepositoryError::DuplicateReport(report.id()));
        }
        state.insert(report.id(), report.clone());
        Ok(())
    }

    async fn list_for_owner(
        &self,
        owner: OwnerId,
        kind: ReportKind,
    ) -> ReportRepositoryResult<Vec<Report>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut reports: Vec<Report> = state
            .values()
            .filter(|report| report.owner_id() == owner && report.kind() == kind)
            .cloned()
            .collect();
        reports.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(reports)
    }

    async fn find_for_owner(
        &self,
        id: ReportId,
        owner: OwnerId,
    ) -> ReportRepositoryResult<Option<Report>> {
        let state = self.state.read().map_err(lock_error)?;
        let report = state
            .get(&id)
            .filter(|report| report.owner_id() == owner)
            .cloned();
        Ok(report)
    }
}
