// ABOUTME: Unit tests for the rolling-window average
// ABOUTME: Validates window anchoring, the lower-bound-only filter, and empty cases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heft contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use heft::intelligence::{rolling_average, WeightSample};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_single_day_window_includes_today() {
    let today = date(2025, 10, 12);
    let samples = [WeightSample::new(today, 71.4)];
    let avg = rolling_average(&samples, 1, today).unwrap();
    assert!((avg - 71.4).abs() < f64::EPSILON);
}

#[test]
fn test_window_lower_edge_is_inclusive() {
    let today = date(2025, 10, 12);
    // 6 days ago is the oldest day inside a 7-day window ending today
    let samples = [WeightSample::new(date(2025, 10, 6), 70.0)];
    let avg = rolling_average(&samples, 7, today).unwrap();
    assert!((avg - 70.0).abs() < f64::EPSILON);
}

#[test]
fn test_sample_outside_window_is_excluded() {
    let today = date(2025, 10, 12);
    let samples = [WeightSample::new(date(2025, 10, 5), 70.0)];
    assert!(rolling_average(&samples, 7, today).is_none());
}

#[test]
fn test_future_dated_sample_is_included() {
    // The filter is a lower bound only; entries dated after the reference
    // date still qualify.
    let today = date(2025, 10, 12);
    let samples = [
        WeightSample::new(date(2025, 10, 14), 72.0),
        WeightSample::new(date(2025, 10, 12), 70.0),
    ];
    let avg = rolling_average(&samples, 7, today).unwrap();
    assert!((avg - 71.0).abs() < 1e-12);
}

#[test]
fn test_mixed_window_averages_only_qualifying_samples() {
    let today = date(2025, 10, 12);
    let samples = [
        WeightSample::new(date(2025, 10, 12), 71.0),
        WeightSample::new(date(2025, 10, 10), 73.0),
        // outside the 7-day window
        WeightSample::new(date(2025, 9, 1), 99.0),
    ];
    let avg = rolling_average(&samples, 7, today).unwrap();
    assert!((avg - 72.0).abs() < 1e-12);
}

#[test]
fn test_empty_input_is_absent() {
    assert!(rolling_average(&[], 7, date(2025, 10, 12)).is_none());
}

#[test]
fn test_same_input_different_reference_dates() {
    // Anchoring to the reference date, not the newest observation: the same
    // fixed input drops out of the window as the reference date advances.
    let samples = [WeightSample::new(date(2025, 10, 12), 70.0)];
    assert!(rolling_average(&samples, 7, date(2025, 10, 12)).is_some());
    assert!(rolling_average(&samples, 7, date(2025, 11, 12)).is_none());
}
