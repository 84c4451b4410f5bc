// ABOUTME: Settings commands - display unit, access PIN, and daily reminder
// ABOUTME: Preference reads and writes plus the foreground reminder loop

use anyhow::Result;
use heft::auth::PinManager;
use heft::config::AppConfig;
use heft::database::Database;
use heft::models::UnitSystem;
use heft::notifications::{parse_reminder_time, LogNotifier, ReminderService};

/// Print the current display unit
pub(super) async fn unit_get(database: &Database) -> Result<()> {
    let unit = database.unit_system().await?;
    println!("Display unit: {unit}");
    Ok(())
}

/// Parse and persist a new display unit
pub(super) async fn unit_set(database: &Database, raw: &str) -> Result<()> {
    let unit: UnitSystem = raw.parse()?;
    database.set_unit_system(unit).await?;
    println!("Display unit set to {unit}");
    Ok(())
}

/// Set or replace the access PIN
pub(super) async fn pin_set(gate: &PinManager, new_pin: &str) -> Result<()> {
    gate.set_pin(new_pin).await?;
    println!("PIN updated.");
    Ok(())
}

/// Remove the access PIN
pub(super) async fn pin_clear(gate: &PinManager) -> Result<()> {
    gate.clear_pin().await?;
    println!("PIN removed.");
    Ok(())
}

/// Effective reminder time: stored preference, else configured default
async fn effective_reminder_time(database: &Database, config: &AppConfig) -> Result<(u32, u32)> {
    match database.reminder_time().await? {
        Some(raw) => Ok(parse_reminder_time(&raw)?),
        None => Ok((config.reminder.hour, config.reminder.minute)),
    }
}

/// Print the reminder settings
pub(super) async fn remind_status(database: &Database, config: &AppConfig) -> Result<()> {
    let enabled = database.reminder_enabled().await?;
    let (hour, minute) = effective_reminder_time(database, config).await?;
    println!(
        "Daily reminder: {} at {hour:02}:{minute:02}",
        if enabled { "enabled" } else { "disabled" }
    );
    Ok(())
}

/// Enable the reminder, optionally changing its time
pub(super) async fn remind_enable(database: &Database, at: Option<String>) -> Result<()> {
    if let Some(raw) = at {
        // Validate before persisting
        parse_reminder_time(&raw)?;
        database.set_reminder_time(&raw).await?;
    }
    database.set_reminder_enabled(true).await?;
    println!("Daily reminder enabled.");
    Ok(())
}

/// Disable the reminder
pub(super) async fn remind_disable(database: &Database) -> Result<()> {
    database.set_reminder_enabled(false).await?;
    println!("Daily reminder disabled.");
    Ok(())
}

/// Run the reminder loop in the foreground until interrupted
pub(super) async fn remind_run(database: &Database, config: &AppConfig) -> Result<()> {
    if !database.reminder_enabled().await? {
        anyhow::bail!("daily reminder is disabled; run `heft-cli remind enable` first");
    }
    let (hour, minute) = effective_reminder_time(database, config).await?;
    println!("Reminder loop running (next at {hour:02}:{minute:02}); press Ctrl-C to stop.");
    ReminderService::new(LogNotifier, hour, minute).run().await
}
