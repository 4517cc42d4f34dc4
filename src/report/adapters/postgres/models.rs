//! Diesel row models for report persistence.

use super::schema::reports;
use crate::analytics::domain::{MonthlyTrend, WeeklyTrend};
use crate::board::domain::{OwnerId, Period};
use crate::report::{
    domain::{
        CompletionHours, PersistedReportData, Report, ReportAnalysis, ReportId, ReportKind,
        TaskTally,
    },
    ports::{ReportRepositoryError, ReportRepositoryResult},
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;
use uuid::Uuid;

/// Query result row for report records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = reports)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ReportRow {
    /// Report identifier.
    pub id: Uuid,
    /// Owning user.
    pub owner_id: Uuid,
    /// Report kind code.
    pub kind: i16,
    /// Period start instant.
    pub period_start: DateTime<Utc>,
    /// Period end instant.
    pub period_end: DateTime<Utc>,
    /// Distinct tasks relevant to the period.
    pub total_tasks: i64,
    /// Tasks with done status.
    pub completed_tasks: i64,
    /// Tasks with doing status.
    pub pending_tasks: i64,
    /// Tasks overdue within the period.
    pub overdue_tasks: i64,
    /// Average completion time in hundredths of an hour.
    pub average_completion_centihours: i64,
    /// Weekly analysis payload, if any.
    pub weekly_analysis: Option<Value>,
    /// Monthly analysis payload, if any.
    pub monthly_analysis: Option<Value>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for report records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = reports)]
pub struct NewReportRow {
    /// Report identifier.
    pub id: Uuid,
    /// Owning user.
    pub owner_id: Uuid,
    /// Report kind code.
    pub kind: i16,
    /// Period start instant.
    pub period_start: DateTime<Utc>,
    /// Period end instant.
    pub period_end: DateTime<Utc>,
    /// Distinct tasks relevant to the period.
    pub total_tasks: i64,
    /// Tasks with done status.
    pub completed_tasks: i64,
    /// Tasks with doing status.
    pub pending_tasks: i64,
    /// Tasks overdue within the period.
    pub overdue_tasks: i64,
    /// Average completion time in hundredths of an hour.
    pub average_completion_centihours: i64,
    /// Weekly analysis payload, if any.
    pub weekly_analysis: Option<Value>,
    /// Monthly analysis payload, if any.
    pub monthly_analysis: Option<Value>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Builds an insert row from a report, populating exactly the analysis
/// column matching the report kind.
pub fn to_new_row(report: &Report) -> ReportRepositoryResult<NewReportRow> {
    let (weekly_analysis, monthly_analysis) = match report.analysis() {
        ReportAnalysis::Weekly(trend) => (Some(trend.to_value()), None),
        ReportAnalysis::Monthly(trend) => (None, Some(trend.to_value())),
    };
    let tally = report.tally();

    Ok(NewReportRow {
        id: report.id().into_inner(),
        owner_id: report.owner_id().into_inner(),
        kind: report.kind().code(),
        period_start: report.period().start(),
        period_end: report.period().end(),
        total_tasks: count_column(tally.total)?,
        completed_tasks: count_column(tally.completed)?,
        pending_tasks: count_column(tally.pending)?,
        overdue_tasks: count_column(tally.overdue)?,
        average_completion_centihours: report.average_completion().centihours(),
        weekly_analysis,
        monthly_analysis,
        created_at: report.created_at(),
    })
}

/// Converts a report row to the domain aggregate.
pub fn row_to_report(row: ReportRow) -> ReportRepositoryResult<Report> {
    let kind =
        ReportKind::from_code(row.kind).map_err(ReportRepositoryError::persistence)?;
    let analysis = match kind {
        ReportKind::Weekly => {
            let payload = analysis_payload(row.weekly_analysis.as_ref(), "weekly_analysis")?;
            ReportAnalysis::Weekly(
                WeeklyTrend::from_value(payload).map_err(ReportRepositoryError::persistence)?,
            )
        }
        ReportKind::Monthly => {
            let payload = analysis_payload(row.monthly_analysis.as_ref(), "monthly_analysis")?;
            ReportAnalysis::Monthly(
                MonthlyTrend::from_value(payload).map_err(ReportRepositoryError::persistence)?,
            )
        }
    };
    let period = Period::new(row.period_start, row.period_end)
        .map_err(ReportRepositoryError::persistence)?;

    Ok(Report::from_persisted(PersistedReportData {
        id: ReportId::from_uuid(row.id),
        owner_id: OwnerId::from_uuid(row.owner_id),
        period,
        tally: TaskTally {
            total: count_value(row.total_tasks)?,
            completed: count_value(row.completed_tasks)?,
            pending: count_value(row.pending_tasks)?,
            overdue: count_value(row.overdue_tasks)?,
        },
        average_completion: CompletionHours::from_centihours(row.average_completion_centihours),
        analysis,
        created_at: row.created_at,
    }))
}

fn analysis_payload<'a>(
    payload: Option<&'a Value>,
    column: &str,
) -> ReportRepositoryResult<&'a Value> {
    payload.ok_or_else(|| {
        ReportRepositoryError::persistence(std::io::Error::other(format!(
            "report row is missing its {column} payload"
        )))
    })
}

fn count_column(value: u64) -> ReportRepositoryResult<i64> {
    i64::try_from(value).map_err(ReportRepositoryError::persistence)
}

fn count_value(value: i64) -> ReportRepositoryResult<u64> {
    u64::try_from(value).map_err(ReportRepositoryError::persistence)
}
