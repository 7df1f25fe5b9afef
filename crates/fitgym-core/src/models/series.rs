// ABOUTME: Completed series history records and live per-exercise input
// ABOUTME: Provides session-day extraction from sortable timestamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack

use serde::{Deserialize, Serialize};

use crate::constants::plateau::SESSION_DAY_PREFIX_LEN;

/// One completed set of one exercise
///
/// Created when the user finishes a set and never mutated afterwards. The
/// timestamp is a lexicographically sortable ISO-like string whose first ten
/// characters identify the calendar day as recorded by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedSeries {
    /// Exercise this set belongs to
    #[serde(alias = "exerciseId")]
    pub exercise_id: i64,
    /// 1-based position of the set within its session
    #[serde(alias = "serieNumber")]
    pub serie_number: u32,
    /// Load in kilograms
    pub weight: f64,
    /// Repetitions performed
    pub reps: u32,
    /// Sortable timestamp, e.g. `2025-03-14 18:02:11`
    pub timestamp: String,
}

impl CompletedSeries {
    /// Create a completed series record
    #[must_use]
    pub fn new(
        exercise_id: i64,
        serie_number: u32,
        weight: f64,
        reps: u32,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            exercise_id,
            serie_number,
            weight,
            reps,
            timestamp: timestamp.into(),
        }
    }

    /// Calendar-day key of this series (the timestamp's date prefix)
    ///
    /// No timezone conversion is applied: the day is the one the client
    /// recorded. Timestamps shorter than the prefix are returned whole.
    #[must_use]
    pub fn session_day(&self) -> &str {
        self.timestamp
            .char_indices()
            .nth(SESSION_DAY_PREFIX_LEN)
            .map_or(self.timestamp.as_str(), |(end, _)| &self.timestamp[..end])
    }
}

/// Values the user is about to log for an exercise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentInput {
    /// Weight currently entered (kg)
    pub weight: f64,
    /// Reps currently entered
    pub reps: u32,
}

impl CurrentInput {
    /// Create a live input value
    #[must_use]
    pub const fn new(weight: f64, reps: u32) -> Self {
        Self { weight, reps }
    }

    /// Whether the weight is a finite, non-negative number
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.weight.is_finite() && self.weight >= 0.0
    }
}

impl From<&CompletedSeries> for CurrentInput {
    fn from(series: &CompletedSeries) -> Self {
        Self {
            weight: series.weight,
            reps: series.reps,
        }
    }
}
