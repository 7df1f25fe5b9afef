// ABOUTME: Plateau command for fitgym-cli
// ABOUTME: Checks one exercise against its history and prints ranked progression suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack

use fitgym::config::environment::OutputFormat;
use fitgym::errors::{AppError, AppResult};
use fitgym::intelligence::PlateauDetector;
use fitgym::models::CurrentInput;
use fitgym::snapshot::WorkoutSnapshot;
use std::path::Path;
use tracing::{info, warn};

use crate::helpers::display::{display_plateau, emit};

/// Check one exercise for a plateau
///
/// `live` overrides the snapshot's live input for the exercise. Without
/// either, the most recently logged series stands in for it.
pub fn run(
    path: &Path,
    exercise_id: i64,
    live: Option<(f64, u32)>,
    detector: &PlateauDetector,
    format: OutputFormat,
) -> AppResult<()> {
    let snapshot = WorkoutSnapshot::load(path)?;
    let exercise = snapshot.exercise(exercise_id).ok_or_else(|| {
        AppError::not_found(format!("Exercise {exercise_id}"))
            .with_resource_id(exercise_id.to_string())
    })?;
    let history = snapshot.history_by_exercise();

    let input = resolve_input(&snapshot, exercise_id, live)?;
    if !input.is_well_formed() {
        return Err(AppError::value_out_of_range("weight", &input.weight));
    }

    let plateau = detector.detect_plateau(exercise_id, &exercise.name, input, &history);
    match &plateau {
        Some(info) => info!(
            exercise_id,
            plateau_type = ?info.plateau_type,
            sessions = info.sessions_in_plateau,
            "plateau detected"
        ),
        None => info!(exercise_id, "no plateau"),
    }

    emit(format, "plateau", &plateau, |plateau| {
        display_plateau(plateau.as_ref());
    })
}

fn resolve_input(
    snapshot: &WorkoutSnapshot,
    exercise_id: i64,
    live: Option<(f64, u32)>,
) -> AppResult<CurrentInput> {
    if let Some((weight, reps)) = live {
        return Ok(CurrentInput::new(weight, reps));
    }
    if let Some(input) = snapshot.current_inputs_by_exercise().get(&exercise_id) {
        return Ok(*input);
    }

    warn!(exercise_id, "no live input, using the latest logged series");
    snapshot
        .history
        .iter()
        .filter(|series| series.exercise_id == exercise_id)
        .max_by(|a, b| a.timestamp.cmp(&b.timestamp))
        .map(CurrentInput::from)
        .ok_or_else(|| {
            AppError::invalid_input(format!(
                "No live input or history for exercise {exercise_id}; pass --weight and --reps"
            ))
        })
}
