// ABOUTME: Unit tests for SQLite storage of entries and preferences
// ABOUTME: Validates ordering, deletion, and preference round-trips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heft contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use anyhow::Result;
use chrono::NaiveDate;
use heft::database::Database;
use heft::models::UnitSystem;
use tempfile::NamedTempFile;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Create a test database backed by a temporary file.
///
/// The file handle is returned alongside the database so it outlives
/// the test body.
async fn create_test_db() -> Result<(Database, NamedTempFile)> {
    let file = NamedTempFile::new()?;
    let url = format!("sqlite:{}", file.path().display());
    let db = Database::new(&url).await?;
    Ok((db, file))
}

#[tokio::test]
async fn test_list_orders_newest_first_by_date_then_id() -> Result<()> {
    let (db, _file) = create_test_db().await?;

    // Inserted out of date order; two entries share a date.
    let id_mid = db.add_weight(date(2025, 10, 10), 70.5, None).await?;
    let id_old = db.add_weight(date(2025, 10, 1), 71.0, None).await?;
    let id_new_a = db.add_weight(date(2025, 10, 12), 70.0, None).await?;
    let id_new_b = db.add_weight(date(2025, 10, 12), 69.9, Some("evening")).await?;

    let entries = db.list_weights().await?;
    let ids: Vec<i64> = entries.iter().map(|e| e.id).collect();
    // Same date ties break on id descending.
    assert_eq!(ids, vec![id_new_b, id_new_a, id_mid, id_old]);
    assert_eq!(entries[0].note.as_deref(), Some("evening"));
    Ok(())
}

#[tokio::test]
async fn test_latest_matches_head_of_list() -> Result<()> {
    let (db, _file) = create_test_db().await?;
    assert!(db.latest_weight().await?.is_none());

    db.add_weight(date(2025, 10, 1), 71.0, None).await?;
    let id = db.add_weight(date(2025, 10, 12), 70.0, None).await?;

    let latest = db.latest_weight().await?.unwrap();
    assert_eq!(latest.id, id);
    assert_eq!(latest.date, date(2025, 10, 12));
    assert!((latest.weight_kg - 70.0).abs() < f64::EPSILON);
    Ok(())
}

#[tokio::test]
async fn test_delete_by_id() -> Result<()> {
    let (db, _file) = create_test_db().await?;
    let id = db.add_weight(date(2025, 10, 12), 70.0, None).await?;

    assert!(db.delete_weight(id).await?);
    assert!(db.list_weights().await?.is_empty());
    // Deleting again reports that nothing matched.
    assert!(!db.delete_weight(id).await?);
    Ok(())
}

#[tokio::test]
async fn test_unit_preference_defaults_to_kilograms() -> Result<()> {
    let (db, _file) = create_test_db().await?;
    assert_eq!(db.unit_system().await?, UnitSystem::Kg);

    db.set_unit_system(UnitSystem::Lb).await?;
    assert_eq!(db.unit_system().await?, UnitSystem::Lb);

    db.set_unit_system(UnitSystem::Kg).await?;
    assert_eq!(db.unit_system().await?, UnitSystem::Kg);
    Ok(())
}

#[tokio::test]
async fn test_pin_hash_round_trip() -> Result<()> {
    let (db, _file) = create_test_db().await?;
    assert!(db.pin_hash().await?.is_none());

    db.set_pin_hash("$2b$12$fake-hash-for-storage-test").await?;
    assert_eq!(
        db.pin_hash().await?.as_deref(),
        Some("$2b$12$fake-hash-for-storage-test")
    );

    db.clear_pin_hash().await?;
    assert!(db.pin_hash().await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_reminder_preferences() -> Result<()> {
    let (db, _file) = create_test_db().await?;
    assert!(!db.reminder_enabled().await?);
    assert!(db.reminder_time().await?.is_none());

    db.set_reminder_enabled(true).await?;
    db.set_reminder_time("07:30").await?;
    assert!(db.reminder_enabled().await?);
    assert_eq!(db.reminder_time().await?.as_deref(), Some("07:30"));

    db.set_reminder_enabled(false).await?;
    assert!(!db.reminder_enabled().await?);
    Ok(())
}

#[tokio::test]
async fn test_reopening_preserves_data() -> Result<()> {
    let file = NamedTempFile::new()?;
    let url = format!("sqlite:{}", file.path().display());

    {
        let db = Database::new(&url).await?;
        db.add_weight(date(2025, 10, 12), 70.0, None).await?;
    }

    let db = Database::new(&url).await?;
    let entries = db.list_weights().await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].date, date(2025, 10, 12));
    Ok(())
}
