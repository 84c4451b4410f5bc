// ABOUTME: Unit tests for the PIN gate
// ABOUTME: Validates PIN lifecycle, verification, and the open-access default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heft contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use anyhow::Result;
use heft::auth::PinManager;
use heft::database::Database;
use tempfile::NamedTempFile;

async fn create_test_gate() -> Result<(PinManager, NamedTempFile)> {
    let file = NamedTempFile::new()?;
    let url = format!("sqlite:{}", file.path().display());
    let db = Database::new(&url).await?;
    Ok((PinManager::new(db), file))
}

#[tokio::test]
async fn test_access_is_open_until_a_pin_is_set() -> Result<()> {
    let (gate, _file) = create_test_gate().await?;
    assert!(!gate.pin_configured().await?);
    gate.require_unlock(None).await?;
    // A candidate against no configured PIN also passes.
    assert!(gate.verify_pin("0000").await?);
    Ok(())
}

#[tokio::test]
async fn test_set_pin_rejects_malformed_pins() -> Result<()> {
    let (gate, _file) = create_test_gate().await?;
    assert!(gate.set_pin("123").await.is_err());
    assert!(gate.set_pin("12345").await.is_err());
    assert!(gate.set_pin("12a4").await.is_err());
    assert!(!gate.pin_configured().await?);
    Ok(())
}

#[tokio::test]
async fn test_verification_after_setting_a_pin() -> Result<()> {
    let (gate, _file) = create_test_gate().await?;
    gate.set_pin("0412").await?;
    assert!(gate.pin_configured().await?);

    assert!(gate.verify_pin("0412").await?);
    assert!(!gate.verify_pin("0000").await?);

    gate.require_unlock(Some("0412")).await?;
    assert!(gate.require_unlock(None).await.is_err());
    assert!(gate.require_unlock(Some("9999")).await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_clearing_the_pin_reopens_access() -> Result<()> {
    let (gate, _file) = create_test_gate().await?;
    gate.set_pin("0412").await?;
    gate.clear_pin().await?;
    assert!(!gate.pin_configured().await?);
    gate.require_unlock(None).await?;
    Ok(())
}

#[tokio::test]
async fn test_replacing_the_pin() -> Result<()> {
    let (gate, _file) = create_test_gate().await?;
    gate.set_pin("1111").await?;
    gate.set_pin("2222").await?;
    assert!(!gate.verify_pin("1111").await?);
    assert!(gate.verify_pin("2222").await?);
    Ok(())
}
