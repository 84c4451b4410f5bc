// ABOUTME: Command handlers for the heft CLI
// ABOUTME: Dispatches parsed subcommands against storage and the stats engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heft contributors

mod entries;
mod settings;

use crate::{Command, PinCommand, RemindCommand, UnitCommand};
use anyhow::Result;
use heft::auth::PinManager;
use heft::config::AppConfig;
use heft::database::Database;

/// Execute a parsed command. Every command runs behind the PIN gate; when no
/// PIN is configured the gate is open.
pub(crate) async fn execute(
    command: Command,
    pin: Option<String>,
    config: &AppConfig,
    database: &Database,
) -> Result<()> {
    let gate = PinManager::new(database.clone());
    gate.require_unlock(pin.as_deref()).await?;

    match command {
        Command::Add { weight, date, note } => entries::add(database, weight, date, note).await,
        Command::List { limit } => entries::list(database, limit).await,
        Command::Delete { id } => entries::delete(database, id).await,
        Command::Stats { json } => entries::stats(database, json).await,
        Command::Unit { action } => match action {
            UnitCommand::Get => settings::unit_get(database).await,
            UnitCommand::Set { unit } => settings::unit_set(database, &unit).await,
        },
        Command::Pin { action } => match action {
            PinCommand::Set { new_pin } => settings::pin_set(&gate, &new_pin).await,
            PinCommand::Clear => settings::pin_clear(&gate).await,
        },
        Command::Remind { action } => match action {
            RemindCommand::Status => settings::remind_status(database, config).await,
            RemindCommand::Enable { at } => settings::remind_enable(database, at).await,
            RemindCommand::Disable => settings::remind_disable(database).await,
            RemindCommand::Run => settings::remind_run(database, config).await,
        },
    }
}
