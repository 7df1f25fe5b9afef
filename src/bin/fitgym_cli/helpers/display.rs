// ABOUTME: Output formatting helpers for fitgym-cli
// ABOUTME: Wraps results in a timestamped JSON envelope or renders them as readable text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack

use chrono::{DateTime, Utc};
use fitgym::config::environment::OutputFormat;
use fitgym::errors::{AppError, AppResult, ErrorResponse};
use fitgym::intelligence::{format_weight, GroupKind, GroupProgress, WorkoutAnalysis};
use fitgym::models::{PlateauInfo, SetType};
use serde::Serialize;

/// JSON envelope printed on stdout
#[derive(Serialize)]
struct Report<'a, T: Serialize> {
    command: &'a str,
    generated_at: DateTime<Utc>,
    result: &'a T,
}

/// One plan exercise with its logged progress
#[derive(Debug, Serialize)]
pub struct ExerciseRow {
    pub id: i64,
    pub name: String,
    pub completed_series: usize,
    pub target_series: u32,
}

/// One group as printed by `group`
#[derive(Debug, Serialize)]
pub struct GroupRow {
    pub kind: GroupKind,
    pub set_type: SetType,
    pub progress: GroupProgress,
    pub is_complete: bool,
    pub exercises: Vec<ExerciseRow>,
}

/// Print `result` in the requested format
///
/// # Errors
///
/// Returns an error if the JSON envelope cannot be serialized
pub fn emit<T: Serialize>(
    format: OutputFormat,
    command: &str,
    result: &T,
    render: impl FnOnce(&T),
) -> AppResult<()> {
    match format {
        OutputFormat::Json => {
            let report = Report {
                command,
                generated_at: Utc::now(),
                result,
            };
            let json = serde_json::to_string_pretty(&report).map_err(|err| {
                AppError::internal(format!("Failed to serialize {command} report")).with_source(err)
            })?;
            println!("{json}");
        }
        OutputFormat::Pretty => render(result),
    }
    Ok(())
}

/// Print a failed command on stderr
///
/// JSON output gets an `ErrorResponse` so scripts can read the code and the
/// offending resource; text output gets the message.
pub fn report_error(format: OutputFormat, error: AppError) {
    match format {
        OutputFormat::Json => match serde_json::to_string(&ErrorResponse::from(error)) {
            Ok(json) => eprintln!("{json}"),
            Err(err) => eprintln!("Error: {err}"),
        },
        OutputFormat::Pretty => eprintln!("Error: {error}"),
    }
}

const fn kind_label(kind: GroupKind) -> &'static str {
    match kind {
        GroupKind::Single => "Exercise",
        GroupKind::Superset => "Superset",
        GroupKind::Circuit => "Circuit",
    }
}

/// Render the grouped plan
pub fn display_groups(groups: &[GroupRow]) {
    println!("\nWorkout Plan ({} groups)", groups.len());
    println!("{}", "=".repeat(60));
    for (index, group) in groups.iter().enumerate() {
        let status = if group.is_complete { "done" } else { "open" };
        println!(
            "{}. {} [{status}] {}/{} sets",
            index + 1,
            kind_label(group.kind),
            group.progress.completed_series,
            group.progress.target_series,
        );
        for exercise in &group.exercises {
            println!(
                "   - {} (#{}): {}/{}",
                exercise.name, exercise.id, exercise.completed_series, exercise.target_series
            );
        }
    }
}

/// Render a single plateau check
pub fn display_plateau(plateau: Option<&PlateauInfo>) {
    match plateau {
        Some(info) => display_plateau_info(info),
        None => println!("\nNo plateau detected. Keep progressing!"),
    }
}

fn display_plateau_info(info: &PlateauInfo) {
    println!(
        "\n{} - {} ({} sessions)",
        info.exercise_name,
        info.plateau_type.label(),
        info.sessions_in_plateau
    );
    println!("{}", "=".repeat(60));
    println!(
        "   Stuck at: {} kg x {} reps",
        format_weight(info.current_weight),
        info.current_reps
    );
    println!("   Suggestions:");
    for suggestion in &info.suggestions {
        println!(
            "   [{:>3.0}%] {}: {}",
            suggestion.confidence * 100.0,
            suggestion.suggestion_type.label(),
            suggestion.description
        );
    }
}

/// Render a whole-workout analysis
pub fn display_analysis(analysis: &WorkoutAnalysis) {
    println!(
        "\nWorkout Analysis: {}/{} groups complete",
        analysis.completed_groups(),
        analysis.groups.len()
    );
    println!("{}", "=".repeat(60));
    for (index, group) in analysis.groups.iter().enumerate() {
        let badge = if group.has_plateau { " [plateau]" } else { "" };
        println!(
            "{}. {} {:?}: {:.0}% of sets{badge}",
            index + 1,
            kind_label(group.kind),
            group.exercise_ids,
            group.progress.fraction() * 100.0,
        );
    }
    for plateau in &analysis.plateaus {
        display_plateau_info(plateau);
    }
    if analysis.is_workout_complete() {
        println!("\nWorkout complete.");
    }
}
