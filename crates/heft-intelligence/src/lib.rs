// ABOUTME: Statistics engine for the heft weight tracking service
// ABOUTME: Pure aggregate, rolling-average, and trend computations over weight observations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heft contributors

#![deny(unsafe_code)]

//! # Heft Intelligence
//!
//! Stateless statistics over dated weight observations. Every function takes
//! its full input as an argument and returns a value: no I/O, no shared
//! mutable state, no clock reads. The reference date for windowed
//! computations is injected by the caller, so results are deterministic
//! given the same input and reference date, and the engine is safe to invoke
//! from any thread without synchronization.
//!
//! "No data" situations are represented as `None`, never as an error: an
//! empty history is an ordinary state for this engine, not a fault.
//!
//! ## Modules
//!
//! - **statistics**: all-time aggregates (count, sum, min, max, average)
//! - **rolling**: calendar-day rolling-window average
//! - **trend**: windowed least-squares slope and direction classification

/// All-time aggregate statistics
pub mod statistics;

/// Calendar-day rolling-window averaging
pub mod rolling;

/// Windowed linear-regression trend analysis and classification
pub mod trend;

pub use rolling::rolling_average;
pub use statistics::WeightSummary;
pub use trend::{trend_slope, TrendDirection};

use chrono::NaiveDate;
use heft_core::models::WeightEntry;
use serde::{Deserialize, Serialize};

/// A single dated weight observation as consumed by the engine.
///
/// Weights are in kilograms and must be finite; behavior on NaN or infinite
/// input is unspecified (upstream validation excludes such values before
/// they reach storage). The engine never mutates its input and holds no
/// references across calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightSample {
    /// Calendar date of the observation
    pub date: NaiveDate,
    /// Mass in kilograms
    pub weight_kg: f64,
}

impl WeightSample {
    /// Create a sample from a date and a canonical-kilogram weight
    #[must_use]
    pub const fn new(date: NaiveDate, weight_kg: f64) -> Self {
        Self { date, weight_kg }
    }
}

impl From<&WeightEntry> for WeightSample {
    fn from(entry: &WeightEntry) -> Self {
        Self::new(entry.date, entry.weight_kg)
    }
}
