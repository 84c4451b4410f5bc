// ABOUTME: Application configuration modules
// ABOUTME: Environment-driven settings for storage and reminder defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heft contributors

//! Configuration management

/// Environment-based application configuration
pub mod environment;

pub use environment::{AppConfig, ReminderSettings};
