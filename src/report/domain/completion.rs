//! Average completion time carried as hundredths of an hour.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An average completion time in hours, stored as hundredths of an hour.
///
/// The two-decimal precision the reports expose is carried as an integer so
/// the arithmetic stays exact (the crate denies float arithmetic).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionHours(i64);

impl CompletionHours {
    /// Zero hours, the defined average for a period without completions.
    pub const ZERO: Self = Self(0);

    const SECONDS_PER_HOUR: i64 = 3600;

    /// Creates a value from hundredths of an hour.
    #[must_use]
    pub const fn from_centihours(value: i64) -> Self {
        Self(value)
    }

    /// Returns the value in hundredths of an hour.
    #[must_use]
    pub const fn centihours(self) -> i64 {
        self.0
    }

    /// Computes the mean of `count` completion durations totalling
    /// `total_seconds`, rounded half-up to two decimal places.
    ///
    /// Returns [`Self::ZERO`] when `count` is zero. Negative totals clamp to
    /// zero; completion durations are non-negative by the task
    /// finish-instant invariant.
    #[must_use]
    pub fn mean_of_seconds(total_seconds: i64, count: u64) -> Self {
        if count == 0 || total_seconds <= 0 {
            return Self::ZERO;
        }
        let divisor = i64::try_from(count)
            .unwrap_or(i64::MAX)
            .saturating_mul(Self::SECONDS_PER_HOUR);
        let numerator = total_seconds.saturating_mul(100);
        Self(div_round_half_up(numerator, divisor))
    }
}

impl fmt::Display for CompletionHours {
    #[expect(
        clippy::integer_division_remainder_used,
        reason = "splitting centihours into whole and fractional digits"
    )]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0.div_euclid(100);
        let frac = self.0.rem_euclid(100);
        write!(f, "{whole}.{frac:02}")
    }
}

/// Divides non-negative integers, rounding half away from zero.
#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "exact fixed-point rounding over non-negative operands"
)]
fn div_round_half_up(numerator: i64, divisor: i64) -> i64 {
    if divisor == 0 {
        return 0;
    }
    numerator.saturating_add(divisor / 2) / divisor
}
