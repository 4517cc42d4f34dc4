//! Test support shared across feature modules.

use chrono::{DateTime, Local, Utc};
use mockable::Clock;

/// Clock pinned to a single instant, for deterministic time-dependent
/// tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock frozen at `now`.
    #[must_use]
    pub const fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Creates a clock frozen at a local instant.
    #[must_use]
    pub fn from_local(now: DateTime<Local>) -> Self {
        Self {
            now: now.with_timezone(&Utc),
        }
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.now
    }
}
