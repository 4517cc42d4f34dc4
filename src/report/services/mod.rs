//! Application services for report generation.

mod generator;

pub use generator::{
    ReportFailure, ReportRunSummary, ReportService, ReportServiceError, ReportServiceResult,
};
