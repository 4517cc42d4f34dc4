//! Threshold policy deciding when a deadline reminder is due.

use crate::board::domain::{Priority, Task};
use chrono::{DateTime, Duration, Utc};

/// Returns how far ahead of the deadline a reminder fires for the given
/// priority: 36 hours for high-priority tasks, 24 hours otherwise.
#[must_use]
pub fn reminder_window(priority: Priority) -> Duration {
    match priority {
        Priority::High => Duration::hours(36),
        Priority::Medium | Priority::Low => Duration::hours(24),
    }
}

/// Returns whether a deadline reminder is due for the task at `now`.
///
/// The boundary is inclusive: a task exactly at its reminder window
/// triggers; one second further out does not.
#[must_use]
pub fn should_alert(task: &Task, now: DateTime<Utc>) -> bool {
    task.deadline() - now <= reminder_window(task.priority())
}
