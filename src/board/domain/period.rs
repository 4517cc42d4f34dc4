//! Half-open time periods for reporting and analytics queries.

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned while constructing periods.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PeriodError {
    /// The interval is empty or inverted.
    #[error("empty period: start {start} is not before end {end}")]
    Empty {
        /// Requested start instant.
        start: DateTime<Utc>,
        /// Requested end instant.
        end: DateTime<Utc>,
    },

    /// A local calendar boundary does not exist in the local time zone
    /// (midnight skipped by a daylight-saving transition).
    #[error("local time {0} does not exist in the local time zone")]
    InvalidLocalTime(NaiveDateTime),

    /// Calendar arithmetic left the supported date range.
    #[error("period boundary out of the supported date range")]
    OutOfRange,
}

/// A half-open time interval `[start, end)`.
///
/// Reports and analytics are always computed over periods whose boundaries
/// are local-time calendar marks (Monday 00:00, first of the month)
/// converted to UTC instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Period {
    /// Creates a validated period.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::Empty`] when `start` is not strictly before
    /// `end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, PeriodError> {
        if start >= end {
            return Err(PeriodError::Empty { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the previous full calendar week relative to `now`:
    /// last Monday 00:00 local up to (but excluding) this Monday 00:00.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError`] when a week boundary does not exist as a
    /// local time or calendar arithmetic leaves the supported range.
    pub fn previous_week(now: DateTime<Local>) -> Result<Self, PeriodError> {
        let today = now.date_naive();
        let this_monday = today
            .checked_sub_days(Days::new(u64::from(today.weekday().num_days_from_monday())))
            .ok_or(PeriodError::OutOfRange)?;
        let last_monday = this_monday
            .checked_sub_days(Days::new(7))
            .ok_or(PeriodError::OutOfRange)?;

        Self::new(local_midnight(last_monday)?, local_midnight(this_monday)?)
    }

    /// Returns the previous full calendar month relative to `now`: the first
    /// of last month 00:00 local up to (but excluding) the first of the
    /// current month 00:00.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError`] when a month boundary does not exist as a
    /// local time or calendar arithmetic leaves the supported range.
    pub fn previous_month(now: DateTime<Local>) -> Result<Self, PeriodError> {
        let today = now.date_naive();
        let first_of_current = today.with_day(1).ok_or(PeriodError::OutOfRange)?;
        let (year, month) = if first_of_current.month() == 1 {
            (first_of_current.year() - 1, 12)
        } else {
            (first_of_current.year(), first_of_current.month() - 1)
        };
        let first_of_previous =
            NaiveDate::from_ymd_opt(year, month, 1).ok_or(PeriodError::OutOfRange)?;

        Self::new(
            local_midnight(first_of_previous)?,
            local_midnight(first_of_current)?,
        )
    }

    /// Returns the start instant (inclusive).
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the end instant (exclusive).
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns whether the instant falls within `[start, end)`.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Returns the number of local calendar days the period spans.
    ///
    /// For a previous-month period this is the day count of that month.
    #[must_use]
    pub fn local_day_count(&self) -> u32 {
        let start_date = self.start.with_timezone(&Local).date_naive();
        let end_date = self.end.with_timezone(&Local).date_naive();
        u32::try_from((end_date - start_date).num_days()).unwrap_or(0)
    }
}

/// Converts a local calendar date to the UTC instant of its local midnight.
fn local_midnight(date: NaiveDate) -> Result<DateTime<Utc>, PeriodError> {
    let naive = date.and_hms_opt(0, 0, 0).ok_or(PeriodError::OutOfRange)?;
    naive
        .and_local_timezone(Local)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or(PeriodError::InvalidLocalTime(naive))
}
