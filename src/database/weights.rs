// ABOUTME: Weight entry database operations
// ABOUTME: Insert, list, latest, and delete over the weights table

use super::Database;
use anyhow::Result;
use chrono::NaiveDate;
use heft_core::models::WeightEntry;
use sqlx::Row;

impl Database {
    /// Create the weights table and its ordering index
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails.
    pub(super) async fn migrate_weights(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS weights (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                weight_kg REAL NOT NULL,
                note TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_weights_date ON weights(date DESC, id DESC)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert a new entry and return its id.
    ///
    /// `weight_kg` is canonical kilograms; callers validate and convert
    /// before storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn add_weight(
        &self,
        date: NaiveDate,
        weight_kg: f64,
        note: Option<&str>,
    ) -> Result<i64> {
        let result = sqlx::query("INSERT INTO weights (date, weight_kg, note) VALUES ($1, $2, $3)")
            .bind(date)
            .bind(weight_kg)
            .bind(note)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Full history ordered newest-first by `(date DESC, id DESC)`.
    ///
    /// Trend-window selection relies on this ordering; it is part of the
    /// store's contract, not a display preference.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_weights(&self) -> Result<Vec<WeightEntry>> {
        let rows =
            sqlx::query("SELECT id, date, weight_kg, note FROM weights ORDER BY date DESC, id DESC")
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter()
            .map(|row| {
                Ok(WeightEntry {
                    id: row.try_get("id")?,
                    date: row.try_get("date")?,
                    weight_kg: row.try_get("weight_kg")?,
                    note: row.try_get("note")?,
                })
            })
            .collect()
    }

    /// Most recent entry by `(date DESC, id DESC)`, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn latest_weight(&self) -> Result<Option<WeightEntry>> {
        let row = sqlx::query(
            "SELECT id, date, weight_kg, note FROM weights ORDER BY date DESC, id DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| {
            Ok(WeightEntry {
                id: row.try_get("id")?,
                date: row.try_get("date")?,
                weight_kg: row.try_get("weight_kg")?,
                note: row.try_get("note")?,
            })
        })
        .transpose()
    }

    /// Delete an entry by id; returns false when the id did not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub async fn delete_weight(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM weights WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
