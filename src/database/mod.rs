// ABOUTME: SQLite storage for weight entries and preferences
// ABOUTME: Connection management and schema migration for the local database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heft contributors

//! # Database Management
//!
//! Embedded SQLite storage for the single local user: the `weights` table
//! holds dated measurements in canonical kilograms, and the `preferences`
//! key-value table holds the display unit, PIN hash, and reminder settings.
//! The schema is migrated in place every time the database is opened.

/// Preference key-value operations
mod preferences;

/// Weight entry operations
mod weights;

use anyhow::Result;
use sqlx::{Pool, Sqlite, SqlitePool};
use tracing::debug;

/// Storage handle over the embedded SQLite database
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Open the database at `database_url`, creating the file if needed,
    /// and run migrations.
    ///
    /// # Errors
    ///
    /// Returns an error when the connection cannot be established or a
    /// migration fails.
    pub async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_string()
        };

        let pool = SqlitePool::connect(&connection_options).await?;
        let db = Self { pool };
        db.migrate().await?;
        debug!(database_url, "database ready");
        Ok(db)
    }

    /// Run database migrations
    async fn migrate(&self) -> Result<()> {
        self.migrate_weights().await?;
        self.migrate_preferences().await?;
        Ok(())
    }
}
