//! Report aggregate root and related types.

use super::CompletionHours;
use crate::analytics::domain::{MonthlyTrend, WeeklyTrend};
use crate::board::domain::{OwnerId, Period};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a persisted report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(Uuid);

impl ReportId {
    /// Creates a new random report identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a report identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Report cadence, also the persisted type discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Previous-calendar-week report (code 1).
    Weekly,
    /// Previous-calendar-month report (code 2).
    Monthly,
}

impl ReportKind {
    /// Returns the persisted numeric code.
    #[must_use]
    pub const fn code(self) -> i16 {
        match self {
            Self::Weekly => 1,
            Self::Monthly => 2,
        }
    }

    /// Parses a persisted numeric code.
    ///
    /// # Errors
    ///
    /// Returns [`ReportKindCodeError`] for codes other than 1 or 2.
    pub const fn from_code(code: i16) -> Result<Self, ReportKindCodeError> {
        match code {
            1 => Ok(Self::Weekly),
            2 => Ok(Self::Monthly),
            other => Err(ReportKindCodeError(other)),
        }
    }
}

/// Error returned while parsing report kind codes from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown report kind code: {0}")]
pub struct ReportKindCodeError(pub i16);

/// Trend analysis attached to a report; the variant matches the kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportAnalysis {
    /// Weekday/hour distribution for weekly reports.
    Weekly(WeeklyTrend),
    /// Day-of-month distribution for monthly reports.
    Monthly(MonthlyTrend),
}

impl ReportAnalysis {
    /// Returns the report kind this analysis belongs to.
    #[must_use]
    pub const fn kind(&self) -> ReportKind {
        match self {
            Self::Weekly(_) => ReportKind::Weekly,
            Self::Monthly(_) => ReportKind::Monthly,
        }
    }

    /// Serialises the analysis to its persisted JSON payload.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Weekly(trend) => trend.to_value(),
            Self::Monthly(trend) => trend.to_value(),
        }
    }
}

/// Task counts over a report period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskTally {
    /// Distinct tasks relevant to the period.
    pub total: u64,
    /// Tasks with done status.
    pub completed: u64,
    /// Tasks with doing status.
    pub pending: u64,
    /// Tasks whose deadline fell in the period while overdue.
    pub overdue: u64,
}

/// Parameter object for reconstructing a persisted report.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedReportData {
    /// Persisted report identifier.
    pub id: ReportId,
    /// Persisted owning user.
    pub owner_id: OwnerId,
    /// Persisted report period.
    pub period: Period,
    /// Persisted task counts.
    pub tally: TaskTally,
    /// Persisted average completion time.
    pub average_completion: CompletionHours,
    /// Persisted trend analysis.
    pub analysis: ReportAnalysis,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Report aggregate root.
///
/// Reports are created once per owner per scheduled run and are immutable
/// after creation; there is no update or delete path. Exactly one analysis
/// payload is populated, matching the report kind, which the
/// [`ReportAnalysis`] enum guarantees by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    id: ReportId,
    owner_id: OwnerId,
    period: Period,
    tally: TaskTally,
    average_completion: CompletionHours,
    analysis: ReportAnalysis,
    created_at: DateTime<Utc>,
}

impl Report {
    /// Creates a new report for one owner and period.
    #[must_use]
    pub fn new(
        owner_id: OwnerId,
        period: Period,
        tally: TaskTally,
        average_completion: CompletionHours,
        analysis: ReportAnalysis,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: ReportId::new(),
            owner_id,
            period,
            tally,
            average_completion,
            analysis,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a report from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedReportData) -> Self {
        Self {
            id: data.id,
            owner_id: data.owner_id,
            period: data.period,
            tally: data.tally,
            average_completion: data.average_completion,
            analysis: data.analysis,
            created_at: data.created_at,
        }
    }

    /// Returns the report identifier.
    #[must_use]
    pub const fn id(&self) -> ReportId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    /// Returns the report period.
    #[must_use]
    pub const fn period(&self) -> Period {
        self.period
    }

    /// Returns the task counts.
    #[must_use]
    pub const fn tally(&self) -> TaskTally {
        self.tally
    }

    /// Returns the average completion time.
    #[must_use]
    pub const fn average_completion(&self) -> CompletionHours {
        self.average_completion
    }

    /// Returns the trend analysis.
    #[must_use]
    pub const fn analysis(&self) -> &ReportAnalysis {
        &self.analysis
    }

    /// Returns the report kind.
    #[must_use]
    pub const fn kind(&self) -> ReportKind {
        self.analysis.kind()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
