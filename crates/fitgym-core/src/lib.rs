// ABOUTME: Core types and constants for the FitGymTrack progression engine
// ABOUTME: Foundation crate with workout models, plateau types, constants, and errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack

#![deny(unsafe_code)]

//! # `fitgym-core`
//!
//! Foundation crate providing the shared value types of the training engine.
//! Everything here is plain data: the intelligence crate consumes these types
//! and the root crate loads them from caller-supplied snapshots.
//!
//! ## Modules
//!
//! - **models**: Completed series, planned exercises, set types, plateau results
//! - **constants**: Detection thresholds and progression increments
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`

/// Unified error handling with standard error codes
pub mod errors;

/// Detection thresholds, tolerances, and progression constants
pub mod constants;

/// Workout, history, and plateau value types
pub mod models;
