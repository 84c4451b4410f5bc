// ABOUTME: Core domain models for weight entries and display units
// ABOUTME: WeightEntry and UnitSystem definitions with serde support
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heft contributors

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One recorded body-weight measurement.
///
/// Weights are always stored in kilograms; conversion to the display unit
/// happens at presentation time. Two entries may share a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    /// Store-assigned identifier, used only for deletion
    pub id: i64,
    /// Calendar date of the measurement (no time-of-day)
    pub date: NaiveDate,
    /// Mass in kilograms, the canonical storage unit
    pub weight_kg: f64,
    /// Optional free-text note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Display unit for weights
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Kilograms (canonical storage unit)
    #[default]
    Kg,
    /// Pounds
    Lb,
}

impl UnitSystem {
    /// Stable textual form used in storage and display
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Lb => "lb",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "kg" => Ok(Self::Kg),
            "lb" => Ok(Self::Lb),
            other => Err(AppError::invalid_format(format!(
                "unknown unit '{other}' (expected 'kg' or 'lb')"
            ))),
        }
    }
}

/// Parse a calendar date in canonical ISO-8601 form (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns an error when the string is not a valid calendar date.
pub fn parse_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| AppError::invalid_format(format!("invalid date '{value}'")).with_source(e))
}
