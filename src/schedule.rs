//! Cadence configuration for the scheduled jobs.
//!
//! The crate does not run a scheduler itself; the embedding application
//! reads a [`JobSchedule`] from its configuration and drives the report and
//! reminder services on these cadences.

use serde::{Deserialize, Serialize};

/// When the scheduled jobs fire.
///
/// Defaults mirror the production cadence: reminders every minute, the
/// weekly report at Monday 00:00 local time, and the monthly report at
/// 00:00 local time on the first of the month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSchedule {
    /// Seconds between reminder scans.
    #[serde(default = "default_reminder_interval_secs")]
    pub reminder_interval_secs: u64,
    /// Weekday the weekly report fires on, Monday-first (0 = Monday).
    #[serde(default = "default_weekly_report_weekday")]
    pub weekly_report_weekday: u8,
    /// Local hour the weekly report fires at.
    #[serde(default = "default_report_hour")]
    pub weekly_report_hour: u8,
    /// Day of the month the monthly report fires on.
    #[serde(default = "default_monthly_report_day")]
    pub monthly_report_day: u8,
    /// Local hour the monthly report fires at.
    #[serde(default = "default_report_hour")]
    pub monthly_report_hour: u8,
}

impl Default for JobSchedule {
    fn default() -> Self {
        Self {
            reminder_interval_secs: default_reminder_interval_secs(),
            weekly_report_weekday: default_weekly_report_weekday(),
            weekly_report_hour: default_report_hour(),
            monthly_report_day: default_monthly_report_day(),
            monthly_report_hour: default_report_hour(),
        }
    }
}

const fn default_reminder_interval_secs() -> u64 {
    60
}

const fn default_weekly_report_weekday() -> u8 {
    0
}

const fn default_report_hour() -> u8 {
    0
}

const fn default_monthly_report_day() -> u8 {
    1
}

#[cfg(test)]
mod tests {
    use super::JobSchedule;
    use rstest::rstest;

    #[rstest]
    fn defaults_match_the_production_cadence() {
        let schedule = JobSchedule::default();

        assert_eq!(schedule.reminder_interval_secs, 60);
        assert_eq!(schedule.weekly_report_weekday, 0);
        assert_eq!(schedule.weekly_report_hour, 0);
        assert_eq!(schedule.monthly_report_day, 1);
        assert_eq!(schedule.monthly_report_hour, 0);
    }

    #[rstest]
    fn partial_configuration_falls_back_to_defaults() {
        let schedule: JobSchedule =
            serde_json::from_str(r#"{"reminder_interval_secs": 300, "monthly_report_day": 2}"#)
                .expect("configuration should deserialize");

        assert_eq!(schedule.reminder_interval_secs, 300);
        assert_eq!(schedule.monthly_report_day, 2);
        assert_eq!(schedule.weekly_report_weekday, 0);
    }
}
