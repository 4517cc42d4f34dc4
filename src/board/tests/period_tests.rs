//! Period boundary and calendar arithmetic tests.

use crate::board::domain::{Period, PeriodError};
use chrono::{DateTime, Local, TimeZone, Utc};
use rstest::rstest;

fn local(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(year, month, day, hour, 30, 0)
        .single()
        .expect("valid fixture instant")
}

fn local_midnight_utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Local
        .with_ymd_and_hms(year, month, day, 0, 0, 0)
        .earliest()
        .map(|instant| instant.with_timezone(&Utc))
        .expect("valid fixture midnight")
}

#[rstest]
fn previous_week_runs_monday_to_monday() {
    // 2024-05-15 is a Wednesday; the previous full week is May 6 to May 13.
    let period = Period::previous_week(local(2024, 5, 15, 10)).expect("period should compute");

    assert_eq!(period.start(), local_midnight_utc(2024, 5, 6));
    assert_eq!(period.end(), local_midnight_utc(2024, 5, 13));
    assert_eq!(period.local_day_count(), 7);
}

#[rstest]
fn previous_week_from_a_monday_still_covers_the_prior_week() {
    // 2024-05-13 is itself a Monday.
    let period = Period::previous_week(local(2024, 5, 13, 0)).expect("period should compute");

    assert_eq!(period.start(), local_midnight_utc(2024, 5, 6));
    assert_eq!(period.end(), local_midnight_utc(2024, 5, 13));
}

#[rstest]
fn previous_month_covers_the_prior_calendar_month() {
    let period = Period::previous_month(local(2024, 3, 15, 12)).expect("period should compute");

    assert_eq!(period.start(), local_midnight_utc(2024, 2, 1));
    assert_eq!(period.end(), local_midnight_utc(2024, 3, 1));
    // February 2024 is a leap month.
    assert_eq!(period.local_day_count(), 29);
}

#[rstest]
fn previous_month_rolls_over_the_year_boundary() {
    let period = Period::previous_month(local(2024, 1, 10, 8)).expect("period should compute");

    assert_eq!(period.start(), local_midnight_utc(2023, 12, 1));
    assert_eq!(period.end(), local_midnight_utc(2024, 1, 1));
    assert_eq!(period.local_day_count(), 31);
}

#[rstest]
fn empty_and_inverted_intervals_are_rejected() {
    let instant = local_midnight_utc(2024, 5, 6);
    let later = local_midnight_utc(2024, 5, 13);

    assert!(matches!(
        Period::new(instant, instant),
        Err(PeriodError::Empty { .. })
    ));
    assert!(matches!(
        Period::new(later, instant),
        Err(PeriodError::Empty { .. })
    ));
}

#[rstest]
fn contains_is_half_open() {
    let start = local_midnight_utc(2024, 5, 6);
    let end = local_midnight_utc(2024, 5, 13);
    let period = Period::new(start, end).expect("period should validate");

    assert!(period.contains(start));
    assert!(period.contains(end - chrono::Duration::seconds(1)));
    assert!(!period.contains(end));
    assert!(!period.contains(start - chrono::Duration::seconds(1)));
}
