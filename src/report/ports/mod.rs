//! Port contracts for report persistence.

pub mod repository;

pub use repository::{ReportRepository, ReportRepositoryError, ReportRepositoryResult};
