// ABOUTME: PIN gate over stored entries
// ABOUTME: Hashing, verification, and lifecycle of the local access PIN
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heft contributors

//! Local access control.
//!
//! A single optional 4-digit PIN gates access to entries. Only a bcrypt
//! hash is persisted; the plaintext never reaches storage. When no PIN is
//! configured, access is open (the first-run state).

use crate::database::Database;
use anyhow::Result;
use heft_core::errors::AppError;
use heft_core::validation::validate_pin;
use tracing::info;

/// Manages the local access PIN stored in preferences
#[derive(Clone)]
pub struct PinManager {
    database: Database,
}

impl PinManager {
    /// Create a manager over the given storage handle
    #[must_use]
    pub const fn new(database: Database) -> Self {
        Self { database }
    }

    /// Whether a PIN is currently configured
    ///
    /// # Errors
    ///
    /// Returns an error if storage access fails.
    pub async fn pin_configured(&self) -> Result<bool> {
        Ok(self.database.pin_hash().await?.is_some())
    }

    /// Validate and store a new PIN, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns an error when the PIN is not exactly four digits, hashing
    /// fails, or storage access fails.
    pub async fn set_pin(&self, pin: &str) -> Result<()> {
        validate_pin(pin)?;
        let hash = bcrypt::hash(pin, bcrypt::DEFAULT_COST)?;
        self.database.set_pin_hash(&hash).await?;
        info!("access PIN updated");
        Ok(())
    }

    /// Remove the stored PIN
    ///
    /// # Errors
    ///
    /// Returns an error if storage access fails.
    pub async fn clear_pin(&self) -> Result<()> {
        self.database.clear_pin_hash().await?;
        info!("access PIN removed");
        Ok(())
    }

    /// Check a candidate PIN against the stored hash.
    ///
    /// Returns `true` when no PIN is configured (open access).
    ///
    /// # Errors
    ///
    /// Returns an error if hashing or storage access fails.
    pub async fn verify_pin(&self, candidate: &str) -> Result<bool> {
        match self.database.pin_hash().await? {
            None => Ok(true),
            Some(hash) => Ok(bcrypt::verify(candidate, &hash)?),
        }
    }

    /// Enforce the gate: succeed when no PIN is configured, otherwise
    /// require a matching candidate.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::auth_required`] when a PIN is configured but no
    /// candidate was supplied, and [`AppError::auth_invalid`] when the
    /// candidate does not match.
    pub async fn require_unlock(&self, candidate: Option<&str>) -> Result<()> {
        match self.database.pin_hash().await? {
            None => Ok(()),
            Some(hash) => {
                let pin = candidate.ok_or_else(AppError::auth_required)?;
                if bcrypt::verify(pin, &hash)? {
                    Ok(())
                } else {
                    Err(AppError::auth_invalid("the PIN does not match").into())
                }
            }
        }
    }
}
