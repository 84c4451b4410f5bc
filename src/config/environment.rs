// ABOUTME: Environment configuration management for runtime settings
// ABOUTME: Parses environment variables with local-first defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heft contributors

//! Environment-based configuration management.
//!
//! Configuration is environment-only: `HEFT_DATABASE_URL` overrides the
//! default database location under the platform data directory, and
//! `HEFT_REMINDER_TIME` (`HH:MM`, 24h) overrides the default reminder time.
//! Preferences stored in the database take precedence over these defaults
//! at runtime.

use crate::notifications::parse_reminder_time;
use anyhow::{anyhow, Context, Result};
use heft_core::constants::{DEFAULT_REMINDER_HOUR, DEFAULT_REMINDER_MINUTE};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Reminder schedule settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReminderSettings {
    /// Hour of day (24h, local time)
    pub hour: u32,
    /// Minute of hour
    pub minute: u32,
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            hour: DEFAULT_REMINDER_HOUR,
            minute: DEFAULT_REMINDER_MINUTE,
        }
    }
}

/// Application configuration assembled from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// SQLite database URL
    pub database_url: String,
    /// Default reminder schedule (database preferences override this)
    pub reminder: ReminderSettings,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when `HEFT_REMINDER_TIME` is not a valid `HH:MM`
    /// time, or when no database URL is configured and the platform data
    /// directory cannot be created.
    pub fn from_env() -> Result<Self> {
        let database_url = match env::var("HEFT_DATABASE_URL") {
            Ok(url) => url,
            Err(_) => default_database_url()?,
        };

        let reminder = match env::var("HEFT_REMINDER_TIME") {
            Ok(raw) => {
                let (hour, minute) = parse_reminder_time(&raw)
                    .with_context(|| format!("invalid HEFT_REMINDER_TIME '{raw}'"))?;
                ReminderSettings { hour, minute }
            }
            Err(_) => ReminderSettings::default(),
        };

        Ok(Self {
            database_url,
            reminder,
        })
    }

    /// One-line summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "database: {}, default reminder: {:02}:{:02}",
            self.database_url, self.reminder.hour, self.reminder.minute
        )
    }
}

/// Database file under the platform data directory, created on demand
fn default_database_url() -> Result<String> {
    let mut dir: PathBuf =
        dirs::data_dir().ok_or_else(|| anyhow!("no platform data directory available"))?;
    dir.push("heft");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("creating data directory {}", dir.display()))?;
    dir.push("heft.db");
    Ok(format!("sqlite:{}", dir.display()))
}
