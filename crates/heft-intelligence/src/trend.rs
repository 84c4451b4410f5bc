// ABOUTME: Windowed least-squares trend analysis over recent weight observations
// ABOUTME: Index-spaced regression slope and dead-zone direction classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heft contributors

use crate::WeightSample;
use heft_core::constants::FLAT_SLOPE_EPSILON;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Denominator guard for a degenerate regression window. Zero x-variance is
/// only reachable with fewer than two points, which is already excluded;
/// the guard is retained for numerical safety.
const DEGENERATE_VARIANCE_EPSILON: f64 = 1e-9;

/// Per-step rate of weight change over the most recent `window` entries.
///
/// The first `window` samples are taken from the input *as given*; callers
/// are expected to supply observations newest-first, matching the store's
/// `(date DESC, id DESC)` ordering. If the input is not newest-first, the
/// selected slice is not the most recent data. The selected slice is then
/// sorted ascending by date, and an ordinary least-squares slope is fitted
/// against the integer index `0..n-1` of the sorted slice.
///
/// Consecutive indices are treated as equally spaced regardless of the
/// actual calendar gap between observations: two entries ten days apart
/// contribute the same x-distance as two entries a day apart. This is a
/// known simplification of the fit, not a date-delta regression.
///
/// Returns `None` when fewer than two samples are available or the
/// regression denominator degenerates.
#[must_use]
pub fn trend_slope(samples: &[WeightSample], window: usize) -> Option<f64> {
    if samples.len() < 2 {
        return None;
    }

    // Most recent `window` entries, imposed into chronological order.
    let mut slice: Vec<WeightSample> = samples.iter().take(window).copied().collect();
    slice.sort_by_key(|s| s.date);
    if slice.len() < 2 {
        return None;
    }

    let n = slice.len();
    // x = 0..n-1; evenly spaced, so the mean is closed-form.
    let mean_x = (n - 1) as f64 / 2.0;
    let mean_y = slice.iter().map(|s| s.weight_kg).sum::<f64>() / n as f64;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (i, sample) in slice.iter().enumerate() {
        let dx = i as f64 - mean_x;
        let dy = sample.weight_kg - mean_y;
        numerator = dx.mul_add(dy, numerator);
        denominator = dx.mul_add(dx, denominator);
    }

    if denominator.abs() < DEGENERATE_VARIANCE_EPSILON {
        return None;
    }
    Some(numerator / denominator)
}

/// Direction of the recent weight trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Slope above the dead-zone: weight is going up
    Increasing,
    /// Slope below the negative dead-zone: weight is going down
    Decreasing,
    /// Slope within the dead-zone around zero
    Stable,
    /// Not enough data to fit a trend
    Unknown,
}

impl TrendDirection {
    /// Classify an optional slope with an explicit dead-zone half-width.
    ///
    /// Slopes exactly at `±flat_epsilon` classify as [`Self::Stable`]; the
    /// comparisons are strict.
    #[must_use]
    pub fn from_slope_with_epsilon(slope: Option<f64>, flat_epsilon: f64) -> Self {
        match slope {
            None => Self::Unknown,
            Some(s) if s > flat_epsilon => Self::Increasing,
            Some(s) if s < -flat_epsilon => Self::Decreasing,
            Some(_) => Self::Stable,
        }
    }

    /// Classify an optional slope using the default dead-zone
    /// ([`FLAT_SLOPE_EPSILON`]).
    #[must_use]
    pub fn from_slope(slope: Option<f64>) -> Self {
        Self::from_slope_with_epsilon(slope, FLAT_SLOPE_EPSILON)
    }

    /// Single-character arrow used by the presentation layer
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Increasing => "↑",
            Self::Decreasing => "↓",
            Self::Stable => "→",
            Self::Unknown => "—",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
