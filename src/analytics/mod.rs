//! Completion-trend analytics for Taskboard.
//!
//! Given the completed tasks of one owner over a period, this module
//! computes where in the calendar the completions landed: weekday and
//! hour-of-day buckets for weekly periods, day-of-month buckets for monthly
//! periods, plus a natural-language recommendation naming the peak bucket.
//! Buckets are always fully present and zero-filled so downstream consumers
//! never special-case missing keys.
//!
//! - Trend types in [`domain`]
//! - Orchestration service in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
