//! Fixed-point average completion time tests.

use crate::report::domain::CompletionHours;
use rstest::rstest;

#[rstest]
fn mean_over_no_completions_is_zero() {
    assert_eq!(CompletionHours::mean_of_seconds(0, 0), CompletionHours::ZERO);
    assert_eq!(
        CompletionHours::mean_of_seconds(7200, 0),
        CompletionHours::ZERO
    );
}

#[rstest]
// 1h and 2h average to 1.50 hours.
#[case(3600 + 7200, 2, 150)]
// A single 90-second completion is 0.025h, rounded half-up to 0.03.
#[case(90, 1, 3)]
// 30 minutes is exactly 0.50 hours.
#[case(1800, 1, 50)]
// Three completions of 1h each.
#[case(3 * 3600, 3, 100)]
fn mean_rounds_half_up_to_two_decimals(
    #[case] total_seconds: i64,
    #[case] count: u64,
    #[case] expected_centihours: i64,
) {
    assert_eq!(
        CompletionHours::mean_of_seconds(total_seconds, count),
        CompletionHours::from_centihours(expected_centihours)
    );
}

#[rstest]
fn negative_totals_clamp_to_zero() {
    assert_eq!(
        CompletionHours::mean_of_seconds(-3600, 1),
        CompletionHours::ZERO
    );
}

#[rstest]
#[case(150, "1.50")]
#[case(3, "0.03")]
#[case(0, "0.00")]
#[case(1234, "12.34")]
fn display_renders_two_decimal_hours(#[case] centihours: i64, #[case] expected: &str) {
    assert_eq!(
        CompletionHours::from_centihours(centihours).to_string(),
        expected
    );
}
