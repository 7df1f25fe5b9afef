// ABOUTME: Plateau detection results, plateau classification, and progression suggestions
// ABOUTME: Value objects computed per detection call and consumed by the display layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack

use serde::{Deserialize, Serialize};

/// Load/rep profile of a stalled exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlateauType {
    /// Stalled below 10 kg
    LightWeight,
    /// Stalled above 100 kg
    HeavyWeight,
    /// Stalled at fewer than 5 reps
    LowReps,
    /// Stalled at more than 15 reps
    HighReps,
    /// Stalled in the moderate load and rep range
    Moderate,
}

impl PlateauType {
    /// Short label for the plateau badge
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LightWeight => "Light weight plateau",
            Self::HeavyWeight => "Heavy weight plateau",
            Self::LowReps => "Low reps plateau",
            Self::HighReps => "High reps plateau",
            Self::Moderate => "Plateau",
        }
    }
}

/// Kind of progression being proposed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SuggestionType {
    /// Add load
    IncreaseWeight,
    /// Add repetitions at the same load
    IncreaseReps,
    /// Drop sets or rest-pause
    AdvancedTechnique,
    /// Shorten rest between sets
    ReduceRest,
    /// Slow down the eccentric or add pauses
    ChangeTempo,
}

impl SuggestionType {
    /// Short label for the suggestion card
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::IncreaseWeight => "Increase weight",
            Self::IncreaseReps => "Increase reps",
            Self::AdvancedTechnique => "Advanced technique",
            Self::ReduceRest => "Reduce rest",
            Self::ChangeTempo => "Change tempo",
        }
    }
}

/// One ranked way out of a plateau
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionSuggestion {
    /// Suggestion kind
    #[serde(rename = "type")]
    pub suggestion_type: SuggestionType,
    /// Human-readable description
    pub description: String,
    /// Proposed weight (kg)
    pub new_weight: f64,
    /// Proposed reps
    pub new_reps: u32,
    /// Support for this suggestion from the historical ceiling, in [0, 1]
    pub confidence: f64,
}

/// A detected plateau for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateauInfo {
    /// Exercise identifier
    pub exercise_id: i64,
    /// Exercise display name
    pub exercise_name: String,
    /// Load/rep profile of the plateau
    pub plateau_type: PlateauType,
    /// Consecutive sessions used as evidence
    pub sessions_in_plateau: usize,
    /// Weight the plateau is stuck at
    pub current_weight: f64,
    /// Reps the plateau is stuck at
    pub current_reps: u32,
    /// Suggestions, ordered by descending confidence
    pub suggestions: Vec<ProgressionSuggestion>,
}

impl PlateauInfo {
    /// Highest-confidence suggestion
    #[must_use]
    pub fn top_suggestion(&self) -> Option<&ProgressionSuggestion> {
        self.suggestions.first()
    }
}
