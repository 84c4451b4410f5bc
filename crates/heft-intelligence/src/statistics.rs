// ABOUTME: All-time aggregate statistics over recorded weights
// ABOUTME: Count, sum, min, max, and average with absent-optional empty-case policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heft contributors

use serde::{Deserialize, Serialize};

/// Aggregate statistics over every recorded weight.
///
/// `min`, `max`, and [`WeightSummary::average`] are `None` when no weights
/// have been recorded; an empty history is not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightSummary {
    /// Number of recorded weights
    pub count: usize,
    /// Arithmetic sum of all weights in kilograms
    pub sum: f64,
    /// Smallest recorded weight in kilograms
    pub min: Option<f64>,
    /// Largest recorded weight in kilograms
    pub max: Option<f64>,
}

impl WeightSummary {
    /// Compute aggregates over a sequence of weights in kilograms.
    ///
    /// Order is irrelevant. Weights must be finite; behavior on NaN or
    /// infinite values is unspecified.
    #[must_use]
    pub fn from_weights(weights: &[f64]) -> Self {
        if weights.is_empty() {
            return Self {
                count: 0,
                sum: 0.0,
                min: None,
                max: None,
            };
        }
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &w in weights {
            sum += w;
            if w < min {
                min = w;
            }
            if w > max {
                max = w;
            }
        }
        Self {
            count: weights.len(),
            sum,
            min: Some(min),
            max: Some(max),
        }
    }

    /// Mean of all recorded weights, `None` when empty
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}
