//! Domain model for periodic productivity reports.

mod completion;
mod report;

pub use completion::CompletionHours;
pub use report::{
    PersistedReportData, Report, ReportAnalysis, ReportId, ReportKind, ReportKindCodeError,
    TaskTally,
};
