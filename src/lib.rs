// ABOUTME: heft library crate wiring storage, configuration, and the statistics engine
// ABOUTME: Exposes database, config, logging, auth, notifications, and intelligence modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heft contributors

#![deny(unsafe_code)]

//! # Heft
//!
//! Local body-weight tracking service: an embedded SQLite store for weight
//! entries and preferences, a PIN gate, a daily reminder, and a pure
//! statistics engine producing the summary figures shown to the user
//! (latest value, all-time average, 7-day rolling average, trend direction).
//!
//! Single-user and fully offline: no network, no server component.

/// PIN gate over stored entries
pub mod auth;

/// Environment-driven application configuration
pub mod config;

/// SQLite-backed storage for weight entries and preferences
pub mod database;

/// Statistics engine re-exports
pub mod intelligence;

/// Logging configuration and initialization
pub mod logging;

/// Daily reminder scheduling
pub mod notifications;

// Re-export foundation modules so consumers keep `heft::models::...` paths.
pub use heft_core::{constants, errors, formatters, models, units, validation};
