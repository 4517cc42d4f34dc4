//! Application services for completion-trend analytics.

mod trends;

pub use trends::{AnalyticsError, AnalyticsResult, AnalyticsService};
