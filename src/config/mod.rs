// ABOUTME: Configuration module for the FitGymTrack engine tools
// ABOUTME: Environment-driven runtime settings plus the intelligence configuration re-export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack

/// Environment-based runtime configuration
pub mod environment;

pub use fitgym_intelligence::config::{
    ConfigError, IntelligenceConfig, PlateauDetectionConfig, ProgressionConfig,
};
