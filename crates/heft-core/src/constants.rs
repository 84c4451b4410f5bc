// ABOUTME: Application-wide constants for windows, bounds, and defaults
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heft contributors

/// Pounds per kilogram conversion factor
pub const POUNDS_PER_KILOGRAM: f64 = 2.204_622_621_85;

/// Number of trailing calendar days covered by the rolling average window
pub const ROLLING_WINDOW_DAYS: u32 = 7;

/// Number of most-recent entries considered by trend analysis
pub const TREND_WINDOW_ENTRIES: usize = 14;

/// Dead-zone half-width below which a trend slope classifies as flat
pub const FLAT_SLOPE_EPSILON: f64 = 0.002;

/// Lowest plausible body weight in kilograms
pub const MIN_WEIGHT_KG: f64 = 30.0;

/// Highest plausible body weight in kilograms
pub const MAX_WEIGHT_KG: f64 = 350.0;

/// Lowest plausible body weight in pounds
pub const MIN_WEIGHT_LB: f64 = 66.0;

/// Highest plausible body weight in pounds
pub const MAX_WEIGHT_LB: f64 = 770.0;

/// Required PIN length in digits
pub const PIN_LENGTH: usize = 4;

/// Default daily reminder hour (24h, local time)
pub const DEFAULT_REMINDER_HOUR: u32 = 20;

/// Default daily reminder minute
pub const DEFAULT_REMINDER_MINUTE: u32 = 0;
