// ABOUTME: Unit-aware display string rendering for weights and statistics
// ABOUTME: One-decimal formatting with an em dash placeholder for absent values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heft contributors

use crate::models::{UnitSystem, WeightEntry};
use crate::units::kg_to_lb;

/// Placeholder shown when a statistic has no value yet
pub const ABSENT_VALUE: &str = "—";

/// Render a canonical-kilogram weight in the display unit, one decimal.
#[must_use]
pub fn format_weight(kg: f64, unit: UnitSystem) -> String {
    match unit {
        UnitSystem::Kg => format!("{kg:.1} kg"),
        UnitSystem::Lb => format!("{:.1} lb", kg_to_lb(kg)),
    }
}

/// Render an optional weight, falling back to [`ABSENT_VALUE`].
#[must_use]
pub fn format_optional_weight(kg: Option<f64>, unit: UnitSystem) -> String {
    kg.map_or_else(|| ABSENT_VALUE.to_owned(), |v| format_weight(v, unit))
}

/// Render the latest entry as `"71.4 kg on 2025-10-12"`.
#[must_use]
pub fn format_latest(entry: &WeightEntry, unit: UnitSystem) -> String {
    format!("{} on {}", format_weight(entry.weight_kg, unit), entry.date)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_weight_one_decimal() {
        assert_eq!(format_weight(71.44, UnitSystem::Kg), "71.4 kg");
        // 71.44 kg is 157.49... lb
        assert_eq!(format_weight(71.44, UnitSystem::Lb), "157.5 lb");
    }

    #[test]
    fn test_absent_placeholder() {
        assert_eq!(format_optional_weight(None, UnitSystem::Kg), "—");
    }

    #[test]
    fn test_format_latest() {
        let entry = WeightEntry {
            id: 1,
            date: NaiveDate::from_ymd_opt(2025, 10, 12).unwrap(),
            weight_kg: 71.4,
            note: None,
        };
        assert_eq!(format_latest(&entry, UnitSystem::Kg), "71.4 kg on 2025-10-12");
    }
}
