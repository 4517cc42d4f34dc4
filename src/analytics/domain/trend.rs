//! Completion-trend buckets and advisory text.

use crate::board::domain::Task;
use chrono::{Datelike, Local, Timelike};
use serde_json::{Map, Value};
use thiserror::Error;

/// Weekday bucket labels, Monday-first, matching the bucket order.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Errors returned while rebuilding trends from persisted payloads.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrendPayloadError {
    /// A required field is missing or has the wrong type.
    #[error("trend payload field '{0}' is missing or malformed")]
    MalformedField(String),

    /// A bucket key is missing from a bucket map.
    #[error("trend payload bucket '{0}' is missing")]
    MissingBucket(String),
}

/// Distribution of task completions over the days and hours of a week.
///
/// All 7 weekday buckets and all 24 hour buckets are always present; a
/// period without completions yields an all-zero trend whose advisory names
/// the first buckets (Monday, hour 0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyTrend {
    weekdays: [u64; 7],
    hours: [u64; 24],
    advice: String,
}

impl WeeklyTrend {
    /// Buckets the finish instants of the given completed tasks by local
    /// weekday and hour of day.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut weekdays = [0_u64; 7];
        let mut hours = [0_u64; 24];
        for task in tasks {
            let Some(finished) = task.finished_at() else {
                continue;
            };
            let local = finished.with_timezone(&Local);
            increment(&mut weekdays, local.weekday().num_days_from_monday());
            increment(&mut hours, local.hour());
        }

        let peak_day = bucket_name(first_peak(&weekdays));
        let peak_hour = first_peak(&hours);
        let advice = format!(
            "You complete the most tasks on {peak_day} around {peak_hour}:00. \
             Try focusing your work in that window for your best throughput."
        );

        Self {
            weekdays,
            hours,
            advice,
        }
    }

    /// Returns the weekday buckets as `(name, count)` pairs, Monday-first.
    pub fn weekday_counts(&self) -> impl Iterator<Item = (&'static str, u64)> {
        WEEKDAY_NAMES.into_iter().zip(self.weekdays)
    }

    /// Returns the hour buckets as `(hour, count)` pairs, hour 0 first.
    pub fn hour_counts(&self) -> impl Iterator<Item = (u32, u64)> {
        (0_u32..).zip(self.hours)
    }

    /// Returns the advisory text naming the peak weekday and hour.
    #[must_use]
    pub fn advice(&self) -> &str {
        &self.advice
    }

    /// Serialises the trend to the persisted JSON payload shape.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut week_days = Map::new();
        for (name, count) in self.weekday_counts() {
            week_days.insert(name.to_owned(), Value::from(count));
        }
        let mut hour_map = Map::new();
        for (hour, count) in self.hour_counts() {
            hour_map.insert(hour.to_string(), Value::from(count));
        }

        let mut payload = Map::new();
        payload.insert("week_days".to_owned(), Value::Object(week_days));
        payload.insert("hours".to_owned(), Value::Object(hour_map));
        payload.insert("advice".to_owned(), Value::String(self.advice.clone()));
        Value::Object(payload)
    }

    /// Rebuilds a trend from a persisted JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`TrendPayloadError`] when a field or bucket is missing or
    /// malformed.
    pub fn from_value(value: &Value) -> Result<Self, TrendPayloadError> {
        let advice = string_field(value, "advice")?;
        let week_days = object_field(value, "week_days")?;
        let hour_map = object_field(value, "hours")?;

        let mut weekdays = [0_u64; 7];
        for (bucket, name) in weekdays.iter_mut().zip(WEEKDAY_NAMES) {
            *bucket = bucket_count(week_days, name)?;
        }
        let mut hours = [0_u64; 24];
        for (hour, bucket) in hours.iter_mut().enumerate() {
            *bucket = bucket_count(hour_map, &hour.to_string())?;
        }

        Ok(Self {
            weekdays,
            hours,
            advice,
        })
    }
}

/// Distribution of task completions over the days of a month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTrend {
    days: Vec<u64>,
    advice: String,
}

impl MonthlyTrend {
    /// Buckets the finish instants of the given completed tasks by local
    /// day of month, over a month of `day_count` days.
    #[must_use]
    pub fn from_tasks(tasks: &[Task], day_count: u32) -> Self {
        let mut days = vec![0_u64; usize::try_from(day_count).unwrap_or_default()];
        for task in tasks {
            let Some(finished) = task.finished_at() else {
                continue;
            };
            let local = finished.with_timezone(&Local);
            increment(&mut days, local.day().saturating_sub(1));
        }

        let peak_index = first_peak(&days);
        let peak_count = days.get(peak_index).copied().unwrap_or(0);
        let peak_day = peak_index.saturating_add(1);
        let advice = format!(
            "You completed the most tasks on day {peak_day} with {peak_count} tasks finished."
        );

        Self { days, advice }
    }

    /// Returns the day buckets as `(day, count)` pairs, day 1 first.
    pub fn day_counts(&self) -> impl Iterator<Item = (u32, u64)> {
        (1_u32..).zip(self.days.iter().copied())
    }

    /// Returns the number of days in the month this trend covers.
    #[must_use]
    pub fn day_count(&self) -> u32 {
        u32::try_from(self.days.len()).unwrap_or(u32::MAX)
    }

    /// Returns the advisory text naming the peak day and its count.
    #[must_use]
    pub fn advice(&self) -> &str {
        &self.advice
    }

    /// Serialises the trend to the persisted JSON payload shape.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut day_map = Map::new();
        for (day, count) in self.day_counts() {
            day_map.insert(day.to_string(), Value::from(count));
        }

        let mut payload = Map::new();
        payload.insert("days".to_owned(), Value::Object(day_map));
        payload.insert("advice".to_owned(), Value::String(self.advice.clone()));
        Value::Object(payload)
    }

    /// Rebuilds a trend from a persisted JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`TrendPayloadError`] when a field or bucket is missing or
    /// malformed.
    pub fn from_value(value: &Value) -> Result<Self, TrendPayloadError> {
        let advice = string_field(value, "advice")?;
        let day_map = object_field(value, "days")?;

        let mut days = vec![0_u64; day_map.len()];
        for (index, bucket) in days.iter_mut().enumerate() {
            let day = index.saturating_add(1);
            *bucket = bucket_count(day_map, &day.to_string())?;
        }

        Ok(Self { days, advice })
    }
}

/// Increments the bucket at `index`, ignoring out-of-range indexes.
fn increment(buckets: &mut [u64], index: u32) {
    let index = usize::try_from(index).unwrap_or_default();
    if let Some(bucket) = buckets.get_mut(index) {
        *bucket = bucket.saturating_add(1);
    }
}

/// Returns the index of the first maximal bucket, scanning low to high.
///
/// An all-zero (or empty) slice yields index 0.
fn first_peak(buckets: &[u64]) -> usize {
    let mut peak = 0_usize;
    let mut best = 0_u64;
    for (index, &count) in buckets.iter().enumerate() {
        if count > best {
            best = count;
            peak = index;
        }
    }
    peak
}

/// Returns the weekday label for a bucket index, defaulting to Monday.
fn bucket_name(index: usize) -> &'static str {
    WEEKDAY_NAMES.get(index).copied().unwrap_or("Monday")
}

fn string_field(value: &Value, field: &str) -> Result<String, TrendPayloadError> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| TrendPayloadError::MalformedField(field.to_owned()))
}

fn object_field<'a>(
    value: &'a Value,
    field: &str,
) -> Result<&'a Map<String, Value>, TrendPayloadError> {
    value
        .get(field)
        .and_then(Value::as_object)
        .ok_or_else(|| TrendPayloadError::MalformedField(field.to_owned()))
}

fn bucket_count(map: &Map<String, Value>, key: &str) -> Result<u64, TrendPayloadError> {
    map.get(key)
        .and_then(Value::as_u64)
        .ok_or_else(|| TrendPayloadError::MissingBucket(key.to_owned()))
}
