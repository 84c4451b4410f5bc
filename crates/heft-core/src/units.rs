// ABOUTME: Kilogram/pound conversion helpers used by presentation and input paths
// ABOUTME: All storage and engine arithmetic stays in kilograms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heft contributors

use crate::constants::POUNDS_PER_KILOGRAM;
use crate::models::UnitSystem;

/// Convert kilograms to pounds
#[must_use]
pub fn kg_to_lb(kg: f64) -> f64 {
    kg * POUNDS_PER_KILOGRAM
}

/// Convert pounds to kilograms
#[must_use]
pub fn lb_to_kg(lb: f64) -> f64 {
    lb / POUNDS_PER_KILOGRAM
}

/// Convert a value entered in `unit` to canonical kilograms
#[must_use]
pub fn to_kilograms(value: f64, unit: UnitSystem) -> f64 {
    match unit {
        UnitSystem::Kg => value,
        UnitSystem::Lb => lb_to_kg(value),
    }
}

/// Convert canonical kilograms to `unit` for display
#[must_use]
pub fn from_kilograms(kg: f64, unit: UnitSystem) -> f64 {
    match unit {
        UnitSystem::Kg => kg,
        UnitSystem::Lb => kg_to_lb(kg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_round_trip() {
        let kg = 72.5;
        assert!((lb_to_kg(kg_to_lb(kg)) - kg).abs() < 1e-12);
    }

    #[test]
    fn test_to_kilograms_is_identity_for_kg() {
        assert!((to_kilograms(70.0, UnitSystem::Kg) - 70.0).abs() < f64::EPSILON);
    }
}
