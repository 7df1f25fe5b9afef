// ABOUTME: Main library entry point for the FitGymTrack training engine
// ABOUTME: Re-exports the grouping and plateau engines with logging, config, and snapshot loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack

#![deny(unsafe_code)]

//! # `fitgym`
//!
//! The algorithmic core behind an active-workout screen:
//!
//! - **Exercise grouping**: supersets, circuits, and single exercises, with
//!   group completion accounting
//! - **Plateau detection**: stagnation across recent sessions, compared set
//!   position by set position
//! - **Progression suggestions**: ranked weight, rep, and technique advice
//!
//! All engine calls are pure. History and plans are supplied by the caller on
//! every call; nothing is fetched or persisted here.
//!
//! ## Example Usage
//!
//! ```rust
//! use std::collections::HashMap;
//! use fitgym::intelligence::PlateauDetector;
//! use fitgym::models::{CompletedSeries, CurrentInput};
//!
//! let history = HashMap::from([(
//!     7,
//!     vec![
//!         CompletedSeries::new(7, 1, 80.0, 8, "2025-03-03 18:00:00"),
//!         CompletedSeries::new(7, 1, 80.0, 8, "2025-03-05 18:00:00"),
//!         CompletedSeries::new(7, 1, 80.0, 8, "2025-03-07 18:00:00"),
//!     ],
//! )]);
//!
//! let plateau = PlateauDetector::new()
//!     .detect_plateau(7, "Bench Press", CurrentInput::new(80.0, 8), &history);
//! assert!(plateau.is_some());
//! ```

/// Configuration management
pub mod config;

/// Unified error handling re-exported from `fitgym-core`
pub mod errors;

/// Grouping, plateau detection, and progression engines
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Workout domain models re-exported from `fitgym-core`
pub mod models;

/// Caller-supplied workout snapshot documents
pub mod snapshot;

/// Engine constants re-exported from `fitgym-core`
pub use fitgym_core::constants;
