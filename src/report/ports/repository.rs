//! Repository port for report persistence and owner-scoped reads.

use crate::board::domain::OwnerId;
use crate::report::domain::{Report, ReportId, ReportKind};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for report repository operations.
pub type ReportRepositoryResult<T> = Result<T, ReportRepositoryError>;

/// Report persistence contract.
///
/// Reports are write-once: there is no update or delete operation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Stores a new report.
    ///
    /// # Errors
    ///
    /// Returns [`ReportRepositoryError::DuplicateReport`] when the report ID
    /// already exists.
    async fn store(&self, report: &Report) -> ReportRepositoryResult<()>;

    /// Returns the given owner's reports of one kind, newest first.
    async fn list_for_owner(
        &self,
        owner: OwnerId,
        kind: ReportKind,
    ) -> ReportRepositoryResult<Vec<Report>>;

    /// Finds a report by identifier, scoped to its owner.
    ///
    /// Returns `None` when the report does not exist or belongs to a
    /// different owner; callers cannot distinguish the two.
    async fn find_for_owner(
        &self,
        id: ReportId,
        owner: OwnerId,
    ) -> ReportRepositoryResult<Option<Report>>;
}

/// Errors returned by report repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ReportRepositoryError {
    /// A report with the same identifier already exists.
    #[error("duplicate report identifier: {0}")]
    DuplicateReport(ReportId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ReportRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
