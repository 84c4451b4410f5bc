// ABOUTME: Daily reminder scheduling for weight logging
// ABOUTME: Next-occurrence computation and the reminder delivery loop
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heft contributors

//! Local daily reminder.
//!
//! Computes the next occurrence of the configured reminder time and fires a
//! notification through a [`Notify`] sink once per day. Delivery is
//! best-effort and local; reliability guarantees are explicitly out of
//! scope.

use anyhow::Result;
use chrono::{DateTime, Days, Local, NaiveTime, Timelike};
use heft_core::errors::{AppError, AppResult};
use tracing::info;

/// Reminder notification title
const REMINDER_TITLE: &str = "Log your weight";
/// Reminder notification body
const REMINDER_BODY: &str = "Quick reminder to record today's weight.";

/// Sink for reminder delivery
pub trait Notify: Send + Sync {
    /// Deliver one reminder
    fn notify(&self, title: &str, body: &str);
}

/// Default notifier writing through tracing and stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notify for LogNotifier {
    fn notify(&self, title: &str, body: &str) {
        info!(title, body, "reminder fired");
        eprintln!("{title}: {body}");
    }
}

/// Parse a reminder time in `HH:MM` (24h) form.
///
/// # Errors
///
/// Returns an error when the string is not a valid time of day.
pub fn parse_reminder_time(value: &str) -> AppResult<(u32, u32)> {
    let time = NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|e| AppError::invalid_format(format!("invalid time '{value}'")).with_source(e))?;
    Ok((time.hour(), time.minute()))
}

/// Next occurrence of `hour:minute` strictly after `after`.
///
/// Returns `None` for an invalid time of day, or when the local timezone
/// has no such instant on either of the next two calendar days (DST gap).
#[must_use]
pub fn next_reminder(after: DateTime<Local>, hour: u32, minute: u32) -> Option<DateTime<Local>> {
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    let date = after.date_naive();

    let today = date.and_time(time).and_local_timezone(Local).earliest();
    if let Some(candidate) = today {
        if candidate > after {
            return Some(candidate);
        }
    }

    let tomorrow = date.checked_add_days(Days::new(1))?;
    tomorrow.and_time(time).and_local_timezone(Local).earliest()
}

/// Periodic reminder loop firing once per day at the configured time
pub struct ReminderService<N: Notify> {
    notifier: N,
    hour: u32,
    minute: u32,
}

impl<N: Notify> ReminderService<N> {
    /// Create a service for the given time of day
    #[must_use]
    pub const fn new(notifier: N, hour: u32, minute: u32) -> Self {
        Self {
            notifier,
            hour,
            minute,
        }
    }

    /// Run the loop forever, sleeping until each next occurrence.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured time of day is invalid.
    pub async fn run(&self) -> Result<()> {
        loop {
            let now = Local::now();
            let Some(next) = next_reminder(now, self.hour, self.minute) else {
                anyhow::bail!(
                    "invalid reminder time {:02}:{:02}",
                    self.hour,
                    self.minute
                );
            };
            let wait = (next - now).to_std().unwrap_or_default();
            info!(fire_at = %next, "reminder scheduled");
            tokio::time::sleep(wait).await;
            self.notifier.notify(REMINDER_TITLE, REMINDER_BODY);
        }
    }
}
