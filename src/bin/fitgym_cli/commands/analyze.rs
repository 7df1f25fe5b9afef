// ABOUTME: Analyze command for fitgym-cli
// ABOUTME: Runs grouping, completion, and plateau detection over the whole active workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack

use fitgym::config::environment::OutputFormat;
use fitgym::errors::AppResult;
use fitgym::intelligence::{PlateauDetector, WorkoutAnalyzer};
use fitgym::snapshot::WorkoutSnapshot;
use std::path::Path;
use tracing::info;

use crate::helpers::display::{display_analysis, emit};

/// Analyze the snapshot's active workout
pub fn run(path: &Path, detector: PlateauDetector, format: OutputFormat) -> AppResult<()> {
    let snapshot = WorkoutSnapshot::load(path)?;
    let history = snapshot.history_by_exercise();
    let inputs = snapshot.current_inputs_by_exercise();
    let dismissed = snapshot.dismissed_set();

    let analysis = WorkoutAnalyzer::with_detector(detector).analyze_excluding(
        &snapshot.exercises,
        &inputs,
        &history,
        &dismissed,
    );
    info!(
        groups = analysis.groups.len(),
        completed = analysis.completed_groups(),
        plateaus = analysis.plateaus.len(),
        "workout analyzed"
    );

    emit(format, "analyze", &analysis, display_analysis)
}
