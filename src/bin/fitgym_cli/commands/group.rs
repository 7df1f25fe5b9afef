// ABOUTME: Group command for fitgym-cli
// ABOUTME: Splits the snapshot plan into supersets, circuits, and singles with completion state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack

use fitgym::config::environment::OutputFormat;
use fitgym::errors::AppResult;
use fitgym::intelligence::{completed_series_count, ExerciseGroup, ExerciseGrouper};
use fitgym::models::CompletedSeries;
use fitgym::snapshot::WorkoutSnapshot;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

use crate::helpers::display::{display_groups, emit, ExerciseRow, GroupRow};

/// Print the plan's exercise groups with completion state
pub fn run(path: &Path, format: OutputFormat) -> AppResult<()> {
    let snapshot = WorkoutSnapshot::load(path)?;
    let history = snapshot.history_by_exercise();

    let groups = ExerciseGrouper::group(&snapshot.exercises);
    info!(
        exercises = snapshot.exercises.len(),
        groups = groups.len(),
        "plan grouped"
    );

    let rows: Vec<GroupRow> = groups
        .iter()
        .map(|group| GroupRow {
            kind: group.kind(),
            set_type: group.set_type(),
            progress: group.progress(&history),
            is_complete: group.is_complete(&history),
            exercises: exercise_rows(group, &history),
        })
        .collect();

    emit(format, "group", &rows, |rows| display_groups(rows))
}

fn exercise_rows(
    group: &ExerciseGroup,
    history: &HashMap<i64, Vec<CompletedSeries>>,
) -> Vec<ExerciseRow> {
    group
        .exercises()
        .iter()
        .map(|exercise| ExerciseRow {
            id: exercise.id,
            name: exercise.name.clone(),
            completed_series: completed_series_count(history, exercise.id),
            target_series: exercise.target_series,
        })
        .collect()
}
