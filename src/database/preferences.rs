// ABOUTME: Preference key-value database operations
// ABOUTME: Display unit, PIN hash, and reminder settings storage

use super::Database;
use anyhow::Result;
use heft_core::models::UnitSystem;
use sqlx::Row;

/// Preference key for the display unit
const KEY_UNIT_SYSTEM: &str = "unit_system";
/// Preference key for the bcrypt hash of the access PIN
const KEY_PIN_HASH: &str = "pin_hash";
/// Preference key for the reminder enabled flag
const KEY_REMINDER_ENABLED: &str = "reminder_enabled";
/// Preference key for the reminder time (`HH:MM`)
const KEY_REMINDER_TIME: &str = "reminder_time";

impl Database {
    /// Create the preferences key-value table
    ///
    /// # Errors
    ///
    /// Returns an error if table creation fails.
    pub(super) async fn migrate_preferences(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Read a raw preference value
    async fn get_preference(&self, key: &str) -> Result<Option<String>> {
        let row = sqlx::query("SELECT value FROM preferences WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|row| Ok(row.try_get("value")?)).transpose()
    }

    /// Insert or replace a preference value
    async fn set_preference(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            r"
            INSERT INTO preferences (key, value) VALUES ($1, $2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            ",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Remove a preference value
    async fn clear_preference(&self, key: &str) -> Result<()> {
        sqlx::query("DELETE FROM preferences WHERE key = $1")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Current display unit; kilograms when unset
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn unit_system(&self) -> Result<UnitSystem> {
        Ok(self
            .get_preference(KEY_UNIT_SYSTEM)
            .await?
            .and_then(|v| v.parse().ok())
            .unwrap_or_default())
    }

    /// Persist the display unit
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub async fn set_unit_system(&self, unit: UnitSystem) -> Result<()> {
        self.set_preference(KEY_UNIT_SYSTEM, unit.as_str()).await
    }

    /// Stored PIN hash, `None` when no PIN is configured
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn pin_hash(&self) -> Result<Option<String>> {
        self.get_preference(KEY_PIN_HASH).await
    }

    /// Persist a new PIN hash (never the plaintext PIN)
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub async fn set_pin_hash(&self, hash: &str) -> Result<()> {
        self.set_preference(KEY_PIN_HASH, hash).await
    }

    /// Remove the stored PIN hash
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub async fn clear_pin_hash(&self) -> Result<()> {
        self.clear_preference(KEY_PIN_HASH).await
    }

    /// Whether the daily reminder is enabled; disabled when unset
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn reminder_enabled(&self) -> Result<bool> {
        Ok(self
            .get_preference(KEY_REMINDER_ENABLED)
            .await?
            .is_some_and(|v| v == "true"))
    }

    /// Persist the reminder enabled flag
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub async fn set_reminder_enabled(&self, enabled: bool) -> Result<()> {
        self.set_preference(KEY_REMINDER_ENABLED, if enabled { "true" } else { "false" })
            .await
    }

    /// Stored reminder time (`HH:MM`), `None` when unset
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn reminder_time(&self) -> Result<Option<String>> {
        self.get_preference(KEY_REMINDER_TIME).await
    }

    /// Persist the reminder time; callers validate the `HH:MM` shape
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub async fn set_reminder_time(&self, time: &str) -> Result<()> {
        self.set_preference(KEY_REMINDER_TIME, time).await
    }
}
