// ABOUTME: Shared test fixtures for FitGym integration tests
// ABOUTME: Builds plans, completed-series histories, and snapshot documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `fitgym`
//!
//! Integration tests include this module with `mod common;` and use only the
//! helpers they need.

use fitgym::models::{CompletedSeries, SetType, WorkoutExercise};
use std::collections::HashMap;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// Timestamp on day `day` of March 2025, seconds set by the set position
pub fn timestamp(day: u32, serie_number: u32) -> String {
    format!("2025-03-{day:02} 18:{serie_number:02}:00")
}

/// One completed series logged on the given day
pub fn series(exercise_id: i64, day: u32, serie_number: u32, weight: f64, reps: u32) -> CompletedSeries {
    CompletedSeries::new(
        exercise_id,
        serie_number,
        weight,
        reps,
        timestamp(day, serie_number),
    )
}

/// Set-position-1 series on consecutive training days, one per `(weight, reps)`
pub fn first_sets(exercise_id: i64, sets: &[(f64, u32)]) -> Vec<CompletedSeries> {
    sets.iter()
        .zip(1_u32..)
        .map(|(&(weight, reps), index)| series(exercise_id, index * 2, 1, weight, reps))
        .collect()
}

/// `sessions` training days, each with the same sets at positions 1..=n
pub fn repeated_sessions(
    exercise_id: i64,
    sessions: u32,
    sets: &[(f64, u32)],
) -> Vec<CompletedSeries> {
    (1..=sessions)
        .flat_map(|session| {
            sets.iter().zip(1_u32..).map(move |(&(weight, reps), position)| {
                series(exercise_id, session * 2, position, weight, reps)
            })
        })
        .collect()
}

/// History map holding one exercise
pub fn history_of(
    exercise_id: i64,
    series: Vec<CompletedSeries>,
) -> HashMap<i64, Vec<CompletedSeries>> {
    HashMap::from([(exercise_id, series)])
}

/// Superset member continuing the previous exercise
pub fn superset_member(id: i64, name: &str, target_series: u32) -> WorkoutExercise {
    WorkoutExercise::new(id, name, target_series)
        .with_set_type(SetType::Superset)
        .linked()
}

/// Circuit member continuing the previous exercise
pub fn circuit_member(id: i64, name: &str, target_series: u32) -> WorkoutExercise {
    WorkoutExercise::new(id, name, target_series)
        .with_set_type(SetType::Circuit)
        .linked()
}

/// Push day: bench, a fly/pushdown superset, then a three-station circuit
pub fn push_day_plan() -> Vec<WorkoutExercise> {
    vec![
        WorkoutExercise::new(1, "Bench Press", 3),
        WorkoutExercise::new(2, "Cable Fly", 3).with_set_type(SetType::Superset),
        superset_member(3, "Triceps Pushdown", 3),
        WorkoutExercise::new(4, "Burpees", 2).with_set_type(SetType::Circuit),
        circuit_member(5, "Kettlebell Swing", 2),
        circuit_member(6, "Mountain Climbers", 2),
    ]
}

/// Snapshot document matching [`push_day_plan`] with bench press history
pub const PUSH_DAY_SNAPSHOT: &str = r#"{
    "exercises": [
        { "id": 1, "name": "Bench Press", "targetSeries": 3 },
        { "id": 2, "name": "Cable Fly", "setType": "superset", "targetSeries": 3 },
        { "id": 3, "name": "Triceps Pushdown", "setType": "1", "linkedToPrevious": true, "targetSeries": 3 },
        { "id": 4, "name": "Burpees", "set_type": "circuit", "target_series": 2 }
    ],
    "history": [
        { "exerciseId": 1, "serieNumber": 1, "weight": 80.0, "reps": 8, "timestamp": "2025-03-03 18:00:00" },
        { "exerciseId": 1, "serieNumber": 1, "weight": 80.0, "reps": 8, "timestamp": "2025-03-05 18:00:00" },
        { "exerciseId": 1, "serieNumber": 1, "weight": 80.0, "reps": 8, "timestamp": "2025-03-07 18:00:00" },
        { "exerciseId": 4, "serieNumber": 1, "weight": 0.0, "reps": 20, "timestamp": "2025-03-07 18:30:00" },
        { "exerciseId": 4, "serieNumber": 2, "weight": 0.0, "reps": 20, "timestamp": "2025-03-07 18:35:00" }
    ],
    "currentInputs": [
        { "exerciseId": 1, "weight": 80.0, "reps": 8 }
    ],
    "dismissed": []
}"#;
