// ABOUTME: Workout snapshot documents supplied by callers and test harnesses
// ABOUTME: Loads, validates, and indexes plan, history, live input, and dismissal state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack

//! Workout snapshots
//!
//! The engine consumes in-memory values. A snapshot is the JSON document that
//! carries those values across a process boundary: the active plan, the
//! completed-series history, what the user is currently entering, and which
//! plateau badges they already dismissed.

use fitgym_core::errors::{AppError, AppResult};
use fitgym_core::models::{CompletedSeries, CurrentInput, WorkoutExercise};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Live input for one exercise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExerciseInput {
    /// Exercise the input belongs to
    #[serde(alias = "exerciseId")]
    pub exercise_id: i64,
    /// Weight being entered (kg)
    pub weight: f64,
    /// Reps being entered
    pub reps: u32,
}

/// Everything the engine needs for one active workout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSnapshot {
    /// Plan exercises in order
    pub exercises: Vec<WorkoutExercise>,
    /// Completed series of any exercise, in logging order
    #[serde(default)]
    pub history: Vec<CompletedSeries>,
    /// Values currently entered in the input fields
    #[serde(default, alias = "currentInputs")]
    pub current_inputs: Vec<ExerciseInput>,
    /// Exercises whose plateau badge was dismissed
    #[serde(default)]
    pub dismissed: Vec<i64>,
}

impl WorkoutSnapshot {
    /// Read and validate a snapshot file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// fails validation
    pub fn load(path: &Path) -> AppResult<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|error| AppError::from(error).with_resource_id(path.display().to_string()))?;
        let snapshot = Self::from_json(&raw)
            .map_err(|error| error.with_resource_id(path.display().to_string()))?;
        debug!(
            path = %path.display(),
            exercises = snapshot.exercises.len(),
            history = snapshot.history.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Parse and validate a snapshot document
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails validation
    pub fn from_json(raw: &str) -> AppResult<Self> {
        let snapshot: Self = serde_json::from_str(raw)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check the invariants the engine relies on
    ///
    /// # Errors
    ///
    /// Returns an error for duplicate exercise ids, history entries with a
    /// blank timestamp or malformed values, or live input for an exercise
    /// outside the plan
    pub fn validate(&self) -> AppResult<()> {
        let mut seen = HashSet::new();
        for exercise in &self.exercises {
            if !seen.insert(exercise.id) {
                return Err(AppError::invalid_input(format!(
                    "Exercise id {} appears more than once in the plan",
                    exercise.id
                )));
            }
        }

        for series in &self.history {
            Self::validate_series(series)?;
        }

        for input in &self.current_inputs {
            if !seen.contains(&input.exercise_id) {
                return Err(AppError::not_found(format!("Exercise {}", input.exercise_id))
                    .with_resource_id(input.exercise_id.to_string()));
            }
            if !CurrentInput::new(input.weight, input.reps).is_well_formed() {
                return Err(AppError::value_out_of_range("weight", &input.weight)
                    .with_resource_id(input.exercise_id.to_string()));
            }
        }

        Ok(())
    }

    fn validate_series(series: &CompletedSeries) -> AppResult<()> {
        if series.timestamp.trim().is_empty() {
            return Err(AppError::missing_field("timestamp")
                .with_resource_id(series.exercise_id.to_string()));
        }
        if series.serie_number == 0 {
            return Err(AppError::value_out_of_range("serie_number", &series.serie_number)
                .with_resource_id(series.exercise_id.to_string()));
        }
        if !series.weight.is_finite() || series.weight < 0.0 {
            return Err(AppError::value_out_of_range("weight", &series.weight)
                .with_resource_id(series.exercise_id.to_string()));
        }
        Ok(())
    }

    /// Plan exercise with the given id
    #[must_use]
    pub fn exercise(&self, exercise_id: i64) -> Option<&WorkoutExercise> {
        self.exercises
            .iter()
            .find(|exercise| exercise.id == exercise_id)
    }

    /// History indexed by exercise, each list in logging order
    #[must_use]
    pub fn history_by_exercise(&self) -> HashMap<i64, Vec<CompletedSeries>> {
        self.history
            .iter()
            .fold(HashMap::new(), |mut by_exercise, series| {
                by_exercise
                    .entry(series.exercise_id)
                    .or_insert_with(Vec::new)
                    .push(series.clone());
                by_exercise
            })
    }

    /// Live inputs indexed by exercise; later entries win
    #[must_use]
    pub fn current_inputs_by_exercise(&self) -> HashMap<i64, CurrentInput> {
        self.current_inputs
            .iter()
            .map(|input| (input.exercise_id, CurrentInput::new(input.weight, input.reps)))
            .collect()
    }

    /// Dismissed plateau badges
    #[must_use]
    pub fn dismissed_set(&self) -> HashSet<i64> {
        self.dismissed.iter().copied().collect()
    }
}
