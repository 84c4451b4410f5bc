// ABOUTME: Input validation for weight values and access PINs
// ABOUTME: Upstream guard that keeps non-finite and implausible values out of the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heft contributors

//! Input validation.
//!
//! The statistics engine assumes finite weights and does not defend against
//! NaN or infinity; this module is the upstream guard that enforces the
//! assumption on every value entering storage.

use crate::constants::{
    MAX_WEIGHT_KG, MAX_WEIGHT_LB, MIN_WEIGHT_KG, MIN_WEIGHT_LB, PIN_LENGTH,
};
use crate::errors::{AppError, AppResult};
use crate::models::UnitSystem;

/// Validate a weight entered in `unit`.
///
/// Rejects non-finite values and values outside the plausible range for the
/// unit (30.0–350.0 kg, 66.0–770.0 lb).
///
/// # Errors
///
/// Returns an error describing why the value was rejected.
pub fn validate_weight(value: f64, unit: UnitSystem) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::invalid_input("Enter a valid number"));
    }
    let (min, max) = match unit {
        UnitSystem::Kg => (MIN_WEIGHT_KG, MAX_WEIGHT_KG),
        UnitSystem::Lb => (MIN_WEIGHT_LB, MAX_WEIGHT_LB),
    };
    if value < min {
        return Err(AppError::value_out_of_range("Too low to be realistic"));
    }
    if value > max {
        return Err(AppError::value_out_of_range("Too high to be realistic"));
    }
    Ok(())
}

/// Validate an access PIN: exactly four ASCII digits.
///
/// # Errors
///
/// Returns an error when the PIN has the wrong length or contains
/// non-digit characters.
pub fn validate_pin(pin: &str) -> AppResult<()> {
    if pin.len() != PIN_LENGTH || !pin.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::invalid_format(format!(
            "PIN must be {PIN_LENGTH} digits"
        )));
    }
    Ok(())
}
