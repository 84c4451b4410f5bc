// ABOUTME: Rolling-window average anchored to a caller-supplied reference date
// ABOUTME: Calendar-day window with a lower-bound-only date filter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heft contributors

use crate::WeightSample;
use chrono::{Days, NaiveDate};

/// Mean weight over a trailing calendar-day window.
///
/// The window covers `days` calendar days ending at `today` inclusive: a
/// sample qualifies when its date is on or after `today - (days - 1)`. The
/// filter is a lower bound only, so samples dated after `today` are included
/// as well; this permissive treatment of future-dated entries is deliberate.
///
/// `today` is injected rather than read from the system clock, keeping the
/// computation deterministic; callers pass the current local date. Sample
/// order is irrelevant.
///
/// Returns `None` when no sample falls in the window, or when `days` is
/// zero (the window is contractually positive).
#[must_use]
pub fn rolling_average(samples: &[WeightSample], days: u32, today: NaiveDate) -> Option<f64> {
    if samples.is_empty() || days == 0 {
        return None;
    }
    let cutoff = today.checked_sub_days(Days::new(u64::from(days - 1)))?;

    let mut sum = 0.0;
    let mut count = 0_u32;
    for sample in samples {
        if sample.date >= cutoff {
            sum += sample.weight_kg;
            count += 1;
        }
    }
    if count == 0 {
        None
    } else {
        Some(sum / f64::from(count))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_includes_today_as_day_one() {
        let today = date(2025, 10, 12);
        let samples = [WeightSample::new(today, 70.0)];
        let avg = rolling_average(&samples, 1, today).unwrap();
        assert!((avg - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sample_on_window_edge_excluded() {
        let today = date(2025, 10, 12);
        // 7 days ago is one day past a 7-day window ending today
        let samples = [WeightSample::new(date(2025, 10, 5), 70.0)];
        assert!(rolling_average(&samples, 7, today).is_none());
    }
}
