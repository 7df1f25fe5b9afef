// ABOUTME: Plateau classification and progression suggestion generation
// ABOUTME: Ranks weight, rep, and technique progressions by confidence against the historic ceiling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack

//! Progression advice for a stalled exercise
//!
//! Confidence reflects how much headroom the athlete has demonstrated before:
//! a lifter working well below their historic best weight is very likely able
//! to add load, one already at their best is less so.

use fitgym_core::constants::progression::{
    REPS_CONFIDENCE_ABOVE_MAX, REPS_CONFIDENCE_AT_MAX, REPS_CONFIDENCE_LOW_RATIO,
    REPS_CONFIDENCE_OTHER, REPS_INCREMENT_MAX, REPS_INCREMENT_TIERS, REPS_RATIO_AT_MAX,
    REPS_RATIO_LOW, WEIGHT_CONFIDENCE_AT_MAX, WEIGHT_CONFIDENCE_LOW_RATIO,
    WEIGHT_CONFIDENCE_NEAR_RATIO, WEIGHT_CONFIDENCE_OTHER, WEIGHT_INCREMENT_MAX,
    WEIGHT_INCREMENT_TIERS, WEIGHT_RATIO_AT_MAX, WEIGHT_RATIO_LOW, WEIGHT_RATIO_NEAR,
};
use fitgym_core::models::{CompletedSeries, PlateauType, ProgressionSuggestion, SuggestionType};

use crate::config::ProgressionConfig;

/// Classifies plateaus and proposes ranked progressions
#[derive(Debug, Clone, Default)]
pub struct ProgressionAdvisor {
    config: ProgressionConfig,
}

impl ProgressionAdvisor {
    /// Create an advisor with default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an advisor with custom thresholds
    #[must_use]
    pub const fn with_config(config: ProgressionConfig) -> Self {
        Self { config }
    }

    /// Classify a plateau by its load, then by its reps
    ///
    /// Weight bounds take precedence; all bounds are exclusive.
    #[must_use]
    pub fn determine_plateau_type(&self, weight: f64, reps: u32) -> PlateauType {
        let thresholds = &self.config.classification;
        if weight < thresholds.light_weight_below {
            PlateauType::LightWeight
        } else if weight > thresholds.heavy_weight_above {
            PlateauType::HeavyWeight
        } else if reps < thresholds.low_reps_below {
            PlateauType::LowReps
        } else if reps > thresholds.high_reps_above {
            PlateauType::HighReps
        } else {
            PlateauType::Moderate
        }
    }

    /// Generate suggestions ordered by descending confidence
    ///
    /// Always contains an increase-weight and an increase-reps suggestion;
    /// heavy, high-rep work additionally gets an advanced-technique option.
    /// `history` is the exercise's full completed-series history.
    #[must_use]
    pub fn generate_suggestions(
        &self,
        current_weight: f64,
        current_reps: u32,
        history: &[CompletedSeries],
    ) -> Vec<ProgressionSuggestion> {
        let max_weight = history
            .iter()
            .map(|series| series.weight)
            .filter(|weight| weight.is_finite())
            .fold(None, |max: Option<f64>, weight| {
                Some(max.map_or(weight, |m| m.max(weight)))
            })
            .unwrap_or(current_weight);
        let max_reps = history
            .iter()
            .map(|series| series.reps)
            .max()
            .unwrap_or(current_reps);

        let mut suggestions = vec![
            Self::increase_weight(current_weight, current_reps, max_weight),
            Self::increase_reps(current_weight, current_reps, max_reps),
        ];

        let advanced = &self.config.advanced_technique;
        if current_weight > advanced.min_weight && current_reps > advanced.min_reps {
            suggestions.push(ProgressionSuggestion {
                suggestion_type: SuggestionType::AdvancedTechnique,
                description: format!(
                    "Finish with a drop set or rest-pause at {} kg",
                    format_weight(current_weight)
                ),
                new_weight: current_weight,
                new_reps: current_reps,
                confidence: advanced.confidence,
            });
        }

        suggestions.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        suggestions
    }

    fn increase_weight(current_weight: f64, current_reps: u32, max_weight: f64) -> ProgressionSuggestion {
        let new_weight = current_weight + weight_increment(current_weight);
        ProgressionSuggestion {
            suggestion_type: SuggestionType::IncreaseWeight,
            description: format!(
                "Increase weight to {} kg for {current_reps} reps",
                format_weight(new_weight)
            ),
            new_weight,
            new_reps: current_reps,
            confidence: weight_confidence(current_weight, max_weight),
        }
    }

    fn increase_reps(current_weight: f64, current_reps: u32, max_reps: u32) -> ProgressionSuggestion {
        let new_reps = current_reps.saturating_add(reps_increment(current_reps));
        ProgressionSuggestion {
            suggestion_type: SuggestionType::IncreaseReps,
            description: format!(
                "Keep {} kg and aim for {new_reps} reps",
                format_weight(current_weight)
            ),
            new_weight: current_weight,
            new_reps,
            confidence: reps_confidence(current_reps, max_reps),
        }
    }
}

/// Plate increment appropriate for the current load
#[must_use]
pub fn weight_increment(current_weight: f64) -> f64 {
    WEIGHT_INCREMENT_TIERS
        .iter()
        .find(|(below, _)| current_weight < *below)
        .map_or(WEIGHT_INCREMENT_MAX, |(_, increment)| *increment)
}

/// Rep increment appropriate for the current rep count
#[must_use]
pub fn reps_increment(current_reps: u32) -> u32 {
    REPS_INCREMENT_TIERS
        .iter()
        .find(|(below, _)| current_reps < *below)
        .map_or(REPS_INCREMENT_MAX, |(_, increment)| *increment)
}

fn weight_confidence(current_weight: f64, max_weight: f64) -> f64 {
    let ratio = if max_weight > 0.0 {
        current_weight / max_weight
    } else {
        WEIGHT_RATIO_AT_MAX
    };

    if ratio <= WEIGHT_RATIO_LOW {
        WEIGHT_CONFIDENCE_LOW_RATIO
    } else if ratio <= WEIGHT_RATIO_NEAR {
        WEIGHT_CONFIDENCE_NEAR_RATIO
    } else if ratio >= WEIGHT_RATIO_AT_MAX {
        WEIGHT_CONFIDENCE_AT_MAX
    } else {
        WEIGHT_CONFIDENCE_OTHER
    }
}

fn reps_confidence(current_reps: u32, max_reps: u32) -> f64 {
    let ratio = if max_reps > 0 {
        f64::from(current_reps) / f64::from(max_reps)
    } else {
        REPS_RATIO_AT_MAX
    };

    if ratio <= REPS_RATIO_LOW {
        REPS_CONFIDENCE_LOW_RATIO
    } else if ratio <= REPS_RATIO_AT_MAX {
        REPS_CONFIDENCE_AT_MAX
    } else if ratio > REPS_RATIO_AT_MAX {
        REPS_CONFIDENCE_ABOVE_MAX
    } else {
        REPS_CONFIDENCE_OTHER
    }
}

/// Format a weight without trailing zeros (`80.0` → `80`, `81.25` → `81.25`)
#[must_use]
pub fn format_weight(weight: f64) -> String {
    let formatted = format!("{weight:.2}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_owned()
}
