// ABOUTME: Configuration module for fitgym-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack

/// Intelligence module configuration (plateau detection, progression)
pub mod intelligence;

pub use intelligence::{ConfigError, IntelligenceConfig, PlateauDetectionConfig, ProgressionConfig};
