// ABOUTME: Intelligence module re-exports from the heft-intelligence crate
// ABOUTME: Preserves heft::intelligence import paths for engine consumers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heft contributors

//! # Intelligence Module
//!
//! Statistics over recorded weights: all-time aggregates, the rolling-window
//! average, and trend analysis. This module re-exports from the
//! `heft-intelligence` crate so callers can depend on `heft::intelligence`
//! paths.

// Re-export all public items from heft-intelligence
pub use heft_intelligence::*;

// Re-export submodules for path-based access (e.g. heft::intelligence::trend)
pub use heft_intelligence::{rolling, statistics, trend};
