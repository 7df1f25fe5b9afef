// ABOUTME: Whole-workout analysis feeding the active-workout display layer
// ABOUTME: Groups the plan, detects plateaus per exercise in parallel, and marks group badges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack

//! Active workout analysis
//!
//! One pure call per render cycle: structure the plan into groups, run
//! plateau detection for each exercise, and attach completion and badge
//! state to every group. Dismissed plateaus are supplied by the caller.

use fitgym_core::models::{CompletedSeries, CurrentInput, PlateauInfo, SetType, WorkoutExercise};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::exercise_grouping::{ExerciseGroup, ExerciseGrouper, GroupKind, GroupProgress};
use crate::plateau_detection::PlateauDetector;

/// Display state for one exercise group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupAnalysis {
    /// Member exercise ids in plan order
    pub exercise_ids: Vec<i64>,
    /// Presentation kind
    pub kind: GroupKind,
    /// Shared set type of the members
    pub set_type: SetType,
    /// Completion accounting
    pub progress: GroupProgress,
    /// Whether every member reached its target sets
    pub is_complete: bool,
    /// Whether any member has an undismissed plateau
    pub has_plateau: bool,
}

/// Result of analysing an active workout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutAnalysis {
    /// Groups in plan order
    pub groups: Vec<GroupAnalysis>,
    /// Detected plateaus in plan order
    pub plateaus: Vec<PlateauInfo>,
}

impl WorkoutAnalysis {
    /// Plateau detected for an exercise, if any
    #[must_use]
    pub fn plateau_for(&self, exercise_id: i64) -> Option<&PlateauInfo> {
        self.plateaus
            .iter()
            .find(|plateau| plateau.exercise_id == exercise_id)
    }

    /// Number of groups whose members all reached their targets
    #[must_use]
    pub fn completed_groups(&self) -> usize {
        self.groups.iter().filter(|group| group.is_complete).count()
    }

    /// Whether every group is complete
    #[must_use]
    pub fn is_workout_complete(&self) -> bool {
        self.groups.iter().all(|group| group.is_complete)
    }
}

/// Active workout analyzer
#[derive(Debug, Clone, Default)]
pub struct WorkoutAnalyzer {
    detector: PlateauDetector,
}

impl WorkoutAnalyzer {
    /// Create an analyzer with a default plateau detector
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer around a configured detector
    #[must_use]
    pub const fn with_detector(detector: PlateauDetector) -> Self {
        Self { detector }
    }

    /// Analyze a workout with no dismissed plateaus
    #[must_use]
    pub fn analyze(
        &self,
        exercises: &[WorkoutExercise],
        current_inputs: &HashMap<i64, CurrentInput>,
        history: &HashMap<i64, Vec<CompletedSeries>>,
    ) -> WorkoutAnalysis {
        self.analyze_excluding(exercises, current_inputs, history, &HashSet::new())
    }

    /// Analyze a workout, suppressing plateaus the user already dismissed
    ///
    /// Exercises without a live input are checked against their most recent
    /// logged series, which is what the input fields are pre-filled with.
    /// Exercises with neither are skipped.
    #[must_use]
    pub fn analyze_excluding(
        &self,
        exercises: &[WorkoutExercise],
        current_inputs: &HashMap<i64, CurrentInput>,
        history: &HashMap<i64, Vec<CompletedSeries>>,
        dismissed: &HashSet<i64>,
    ) -> WorkoutAnalysis {
        let groups = ExerciseGrouper::group(exercises);

        let plateaus: Vec<PlateauInfo> = exercises
            .par_iter()
            .filter(|exercise| !dismissed.contains(&exercise.id))
            .filter_map(|exercise| {
                let input = current_inputs
                    .get(&exercise.id)
                    .copied()
                    .or_else(|| latest_input(history, exercise.id))?;
                self.detector
                    .detect_plateau(exercise.id, &exercise.name, input, history)
            })
            .collect();

        let plateau_ids: HashSet<i64> = plateaus.iter().map(|plateau| plateau.exercise_id).collect();
        let groups: Vec<GroupAnalysis> = groups
            .iter()
            .map(|group| Self::describe_group(group, history, &plateau_ids))
            .collect();

        debug!(
            exercises = exercises.len(),
            groups = groups.len(),
            plateaus = plateaus.len(),
            "workout analysis complete"
        );

        WorkoutAnalysis { groups, plateaus }
    }

    fn describe_group(
        group: &ExerciseGroup,
        history: &HashMap<i64, Vec<CompletedSeries>>,
        plateau_ids: &HashSet<i64>,
    ) -> GroupAnalysis {
        let exercise_ids = group.exercise_ids();
        let has_plateau = exercise_ids.iter().any(|id| plateau_ids.contains(id));
        GroupAnalysis {
            kind: group.kind(),
            set_type: group.set_type(),
            progress: group.progress(history),
            is_complete: group.is_complete(history),
            has_plateau,
            exercise_ids,
        }
    }
}

fn latest_input(history: &HashMap<i64, Vec<CompletedSeries>>, exercise_id: i64) -> Option<CurrentInput> {
    history
        .get(&exercise_id)?
        .iter()
        .max_by(|a, b| a.timestamp.cmp(&b.timestamp))
        .map(CurrentInput::from)
}
