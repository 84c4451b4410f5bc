// ABOUTME: Unit tests for all-time aggregate statistics
// ABOUTME: Validates counts, extrema, averages, and the empty-case policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heft contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use heft::intelligence::WeightSummary;

#[test]
fn test_count_matches_input_length() {
    for weights in [vec![], vec![70.0], vec![70.0, 71.5, 69.8, 70.0]] {
        let summary = WeightSummary::from_weights(&weights);
        assert_eq!(summary.count, weights.len());
    }
}

#[test]
fn test_empty_input_has_absent_optionals() {
    let summary = WeightSummary::from_weights(&[]);
    assert_eq!(summary.count, 0);
    assert!(summary.sum.abs() < f64::EPSILON);
    assert!(summary.min.is_none());
    assert!(summary.max.is_none());
    assert!(summary.average().is_none());
}

#[test]
fn test_extrema_bound_every_element() {
    let weights = [71.2, 69.4, 73.8, 70.1, 69.9];
    let summary = WeightSummary::from_weights(&weights);
    let min = summary.min.unwrap();
    let max = summary.max.unwrap();
    for w in weights {
        assert!(min <= w && w <= max);
    }
    assert!((min - 69.4).abs() < f64::EPSILON);
    assert!((max - 73.8).abs() < f64::EPSILON);
}

#[test]
fn test_average_is_sum_over_count() {
    let weights = [70.0, 71.0, 72.0, 74.0];
    let summary = WeightSummary::from_weights(&weights);
    let expected = weights.iter().sum::<f64>() / weights.len() as f64;
    assert!((summary.average().unwrap() - expected).abs() < 1e-12);
}

#[test]
fn test_duplicate_values_count_individually() {
    let summary = WeightSummary::from_weights(&[70.0, 70.0, 70.0]);
    assert_eq!(summary.count, 3);
    assert!((summary.sum - 210.0).abs() < 1e-12);
    assert!((summary.average().unwrap() - 70.0).abs() < 1e-12);
}
