//! Domain types for completion-trend analytics.

mod trend;

pub use trend::{MonthlyTrend, TrendPayloadError, WEEKDAY_NAMES, WeeklyTrend};
