// ABOUTME: Heft CLI - command-line tool for recording and analyzing body weight
// ABOUTME: Handles entries, statistics, preferences, the PIN gate, and reminders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heft contributors

//!
//! Usage:
//! ```bash
//! # Record today's weight in the configured unit
//! heft-cli add 71.4
//!
//! # Record a back-dated entry with a note
//! heft-cli add 71.4 --date 2025-10-12 --note "after run"
//!
//! # Show summary statistics
//! heft-cli stats
//!
//! # Switch the display unit to pounds
//! heft-cli unit set lb
//!
//! # Protect entries with a 4-digit PIN
//! heft-cli pin set 0412
//!
//! # Run the daily reminder loop in the foreground
//! heft-cli remind enable --at 20:00
//! heft-cli remind run
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use heft::config::AppConfig;
use heft::database::Database;
use heft::logging;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "heft-cli",
    about = "Heft body-weight tracking CLI",
    long_about = "Local body-weight tracking: record entries, review summary statistics and trends, and manage the display unit, access PIN, and daily reminder."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Access PIN (required whenever a PIN is configured)
    #[arg(long, global = true)]
    pin: Option<String>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Record a new weight entry
    Add {
        /// Weight in the configured display unit
        weight: f64,

        /// Entry date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Optional free-text note
        #[arg(long)]
        note: Option<String>,
    },

    /// List recorded entries, newest first
    List {
        /// Maximum number of entries to show
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Delete an entry by id
    Delete {
        /// Entry id (shown by `list`)
        id: i64,
    },

    /// Show summary statistics
    Stats {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Display unit management
    Unit {
        #[command(subcommand)]
        action: UnitCommand,
    },

    /// Access PIN management
    Pin {
        #[command(subcommand)]
        action: PinCommand,
    },

    /// Daily reminder management
    Remind {
        #[command(subcommand)]
        action: RemindCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum UnitCommand {
    /// Show the current display unit
    Get,

    /// Set the display unit
    Set {
        /// Unit name (kg or lb)
        unit: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PinCommand {
    /// Set or replace the access PIN
    Set {
        /// New 4-digit PIN
        new_pin: String,
    },

    /// Remove the access PIN
    Clear,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum RemindCommand {
    /// Show reminder settings
    Status,

    /// Enable the daily reminder
    Enable {
        /// Reminder time (HH:MM, 24h local)
        #[arg(long)]
        at: Option<String>,
    },

    /// Disable the daily reminder
    Disable,

    /// Run the reminder loop in the foreground
    Run,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_from_env()?;

    let mut config = AppConfig::from_env()?;
    if let Some(url) = cli.database_url.clone() {
        config.database_url = url;
    }
    info!("{}", config.summary());

    let database = Database::new(&config.database_url).await?;
    commands::execute(cli.command, cli.pin, &config, &database).await
}
