// ABOUTME: Superset and circuit grouping of workout exercises in plan order
// ABOUTME: Partitions the plan into contiguous groups and computes group completion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack

//! Exercise grouping
//!
//! A plan is a flat list of exercises. Consecutive exercises that share a
//! linking set type (superset or circuit) and are flagged as continuing the
//! previous exercise form one group; every other exercise stands alone.

use fitgym_core::models::{CompletedSeries, SetType, WorkoutExercise};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How a group is presented and rested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    /// A single exercise
    Single,
    /// Two or more exercises performed back-to-back
    Superset,
    /// Two or more exercises performed as a circuit
    Circuit,
}

/// Contiguous, non-empty run of exercises from the plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseGroup {
    exercises: Vec<WorkoutExercise>,
}

/// Completion accounting for one group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupProgress {
    /// Completed sets, each exercise capped at its target
    pub completed_series: u32,
    /// Sum of the members' target sets
    pub target_series: u32,
    /// Members that reached their target
    pub completed_exercises: usize,
    /// Members in the group
    pub total_exercises: usize,
}

impl GroupProgress {
    /// Completed share of the group's target sets, in [0, 1]
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.target_series == 0 {
            return 1.0;
        }
        (f64::from(self.completed_series) / f64::from(self.target_series)).min(1.0)
    }
}

/// Number of completed sets logged for an exercise
#[must_use]
pub fn completed_series_count(
    history: &HashMap<i64, Vec<CompletedSeries>>,
    exercise_id: i64,
) -> usize {
    history.get(&exercise_id).map_or(0, Vec::len)
}

impl ExerciseGroup {
    fn starting_with(exercise: WorkoutExercise) -> Self {
        Self {
            exercises: vec![exercise],
        }
    }

    /// Whether `exercise` continues this group
    fn accepts(&self, exercise: &WorkoutExercise) -> bool {
        self.exercises.last().is_some_and(|previous| {
            exercise.linked_to_previous
                && exercise.set_type == previous.set_type
                && previous.set_type.links_exercises()
        })
    }

    /// Members in plan order
    #[must_use]
    pub fn exercises(&self) -> &[WorkoutExercise] {
        &self.exercises
    }

    /// Consume the group, returning its members
    #[must_use]
    pub fn into_exercises(self) -> Vec<WorkoutExercise> {
        self.exercises
    }

    /// Number of members (always at least one)
    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Groups are never empty; provided for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// First member of the group
    #[must_use]
    pub fn first(&self) -> Option<&WorkoutExercise> {
        self.exercises.first()
    }

    /// Set type shared by the members
    #[must_use]
    pub fn set_type(&self) -> SetType {
        self.first().map_or(SetType::Standalone, |first| first.set_type)
    }

    /// Presentation kind of the group
    #[must_use]
    pub fn kind(&self) -> GroupKind {
        if self.exercises.len() < 2 {
            return GroupKind::Single;
        }
        match self.set_type() {
            SetType::Circuit => GroupKind::Circuit,
            SetType::Superset | SetType::Standalone => GroupKind::Superset,
        }
    }

    /// Whether the group contains the given exercise
    #[must_use]
    pub fn contains(&self, exercise_id: i64) -> bool {
        self.exercises.iter().any(|exercise| exercise.id == exercise_id)
    }

    /// Member identifiers in plan order
    #[must_use]
    pub fn exercise_ids(&self) -> Vec<i64> {
        self.exercises.iter().map(|exercise| exercise.id).collect()
    }

    /// Whether every member has logged at least its target sets
    #[must_use]
    pub fn is_complete(&self, history: &HashMap<i64, Vec<CompletedSeries>>) -> bool {
        self.exercises.iter().all(|exercise| {
            completed_series_count(history, exercise.id) >= exercise.target_series as usize
        })
    }

    /// Completion accounting across the members
    #[must_use]
    pub fn progress(&self, history: &HashMap<i64, Vec<CompletedSeries>>) -> GroupProgress {
        self.exercises.iter().fold(
            GroupProgress {
                completed_series: 0,
                target_series: 0,
                completed_exercises: 0,
                total_exercises: self.exercises.len(),
            },
            |mut progress, exercise| {
                let logged = completed_series_count(history, exercise.id);
                let capped = u32::try_from(logged)
                    .unwrap_or(u32::MAX)
                    .min(exercise.target_series);
                progress.completed_series = progress.completed_series.saturating_add(capped);
                progress.target_series =
                    progress.target_series.saturating_add(exercise.target_series);
                if logged >= exercise.target_series as usize {
                    progress.completed_exercises += 1;
                }
                progress
            },
        )
    }
}

/// Exercise grouping engine
pub struct ExerciseGrouper;

impl ExerciseGrouper {
    /// Partition exercises into contiguous superset, circuit, or single groups
    ///
    /// Order is preserved and every exercise lands in exactly one group. A
    /// group only grows past one member when each new member is linked to the
    /// previous one and both carry the same superset or circuit tag.
    #[must_use]
    pub fn group(exercises: &[WorkoutExercise]) -> Vec<ExerciseGroup> {
        exercises
            .iter()
            .fold(Vec::new(), |mut groups: Vec<ExerciseGroup>, exercise| {
                match groups.last_mut() {
                    Some(current) if current.accepts(exercise) => {
                        current.exercises.push(exercise.clone());
                    }
                    _ => groups.push(ExerciseGroup::starting_with(exercise.clone())),
                }
                groups
            })
    }

    /// Concatenate groups back into the plan sequence
    #[must_use]
    pub fn flatten(groups: &[ExerciseGroup]) -> Vec<WorkoutExercise> {
        groups
            .iter()
            .flat_map(|group| group.exercises.iter().cloned())
            .collect()
    }

    /// Group containing the given exercise
    #[must_use]
    pub fn find_group(groups: &[ExerciseGroup], exercise_id: i64) -> Option<&ExerciseGroup> {
        groups.iter().find(|group| group.contains(exercise_id))
    }
}
