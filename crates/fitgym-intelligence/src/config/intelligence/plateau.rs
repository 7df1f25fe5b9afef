// ABOUTME: Plateau detection configuration for session grouping and tolerance checks
// ABOUTME: Configures evidence window, weight/rep tolerances, and the chunking fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack

//! Plateau Detection Configuration
//!
//! Controls how much history counts as evidence of a plateau and how close
//! two sets must be to count as "the same".

use fitgym_core::constants::plateau;
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Plateau Detection Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateauDetectionConfig {
    /// Consecutive sessions required before a plateau is reported
    pub min_sessions_for_plateau: usize,
    /// Maximum weight difference (kg) still considered constant
    pub weight_tolerance: f64,
    /// Maximum rep difference still considered constant
    pub reps_tolerance: u32,
    /// Series per pseudo-session when all history falls on one day
    pub chunk_size: usize,
    /// Minimum single-day series count before chunking applies
    pub chunk_fallback_min_series: usize,
}

impl Default for PlateauDetectionConfig {
    fn default() -> Self {
        Self {
            min_sessions_for_plateau: plateau::DEFAULT_MIN_SESSIONS_FOR_PLATEAU,
            weight_tolerance: plateau::WEIGHT_TOLERANCE_KG,
            reps_tolerance: plateau::REPS_TOLERANCE,
            chunk_size: plateau::FALLBACK_CHUNK_SIZE,
            chunk_fallback_min_series: plateau::FALLBACK_CHUNK_MIN_SERIES,
        }
    }
}

impl PlateauDetectionConfig {
    /// Evidence window actually used; a zero window behaves like one session
    #[must_use]
    pub fn effective_min_sessions(&self) -> usize {
        self.min_sessions_for_plateau.max(1)
    }

    /// Validate tolerances and window sizes
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a tolerance is negative or non-finite, or a
    /// window size is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.weight_tolerance.is_finite() || self.weight_tolerance < 0.0 {
            return Err(ConfigError::InvalidRange(
                "weight_tolerance must be a finite, non-negative number",
            ));
        }
        if self.min_sessions_for_plateau == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_sessions_for_plateau must be at least 1",
            ));
        }
        if self.chunk_size == 0 {
            return Err(ConfigError::ValueOutOfRange("chunk_size must be at least 1"));
        }
        Ok(())
    }
}
