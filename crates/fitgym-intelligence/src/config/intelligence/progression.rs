// ABOUTME: Progression configuration for plateau classification and suggestion thresholds
// ABOUTME: Configures weight/rep classification bounds and the advanced technique trigger
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack

//! Progression Configuration
//!
//! Provides the classification bounds used to label a plateau and the
//! thresholds that unlock the advanced-technique suggestion. Increment tiers
//! and confidence tables are fixed constants in `fitgym_core::constants`.

use fitgym_core::constants::{classification, progression};
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Progression Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Plateau type classification bounds
    pub classification: ClassificationThresholds,
    /// Advanced technique suggestion trigger
    pub advanced_technique: AdvancedTechniqueConfig,
}

/// Exclusive bounds used to classify a plateau
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationThresholds {
    /// Weights below this are light
    pub light_weight_below: f64,
    /// Weights above this are heavy
    pub heavy_weight_above: f64,
    /// Reps below this are low
    pub low_reps_below: u32,
    /// Reps above this are high
    pub high_reps_above: u32,
}

/// When to propose drop sets or rest-pause
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvancedTechniqueConfig {
    /// Weight must exceed this
    pub min_weight: f64,
    /// Reps must exceed this
    pub min_reps: u32,
    /// Confidence attached to the suggestion
    pub confidence: f64,
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            light_weight_below: classification::LIGHT_WEIGHT_BELOW,
            heavy_weight_above: classification::HEAVY_WEIGHT_ABOVE,
            low_reps_below: classification::LOW_REPS_BELOW,
            high_reps_above: classification::HIGH_REPS_ABOVE,
        }
    }
}

impl Default for AdvancedTechniqueConfig {
    fn default() -> Self {
        Self {
            min_weight: progression::ADVANCED_TECHNIQUE_MIN_WEIGHT,
            min_reps: progression::ADVANCED_TECHNIQUE_MIN_REPS,
            confidence: progression::ADVANCED_TECHNIQUE_CONFIDENCE,
        }
    }
}

impl ProgressionConfig {
    /// Validate bound ordering and confidence range
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if bounds overlap or the confidence is outside [0, 1]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = &self.classification;
        if thresholds.light_weight_below > thresholds.heavy_weight_above {
            return Err(ConfigError::InvalidRange(
                "light_weight_below must not exceed heavy_weight_above",
            ));
        }
        if thresholds.low_reps_below > thresholds.high_reps_above {
            return Err(ConfigError::InvalidRange(
                "low_reps_below must not exceed high_reps_above",
            ));
        }
        if !(0.0..=1.0).contains(&self.advanced_technique.confidence) {
            return Err(ConfigError::ValueOutOfRange(
                "advanced_technique.confidence must be between 0 and 1",
            ));
        }
        Ok(())
    }
}
