// ABOUTME: Benchmark fixtures generating realistic workout histories and plans
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack

//! Benchmark fixtures generating realistic workout data.
//!
//! Every generator is deterministic so runs are comparable.

use chrono::{Duration, NaiveDate};
use fitgym::models::{CompletedSeries, SetType, WorkoutExercise};
use std::collections::HashMap;

/// Predefined history sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// A few weeks of training
    Small,
    /// About a year of training
    Medium,
    /// Several years of training
    Large,
}

impl HistorySize {
    /// Number of logged sessions
    #[must_use]
    pub const fn sessions(self) -> u32 {
        match self {
            Self::Small => 6,
            Self::Medium => 100,
            Self::Large => 500,
        }
    }

    /// Label used in benchmark ids
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// Sets logged per session
pub const SETS_PER_SESSION: u32 = 4;

/// History of one exercise: `sessions` days, two days apart, ending on a plateau
///
/// Load climbs every fourth session until the final stretch, which repeats
/// the same sets so the full comparison has real work to do.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn generate_history(exercise_id: i64, size: HistorySize) -> Vec<CompletedSeries> {
    let sessions = size.sessions();
    let start = NaiveDate::from_ymd_opt(2022, 1, 3).unwrap_or(NaiveDate::MIN);
    let plateau_from = sessions.saturating_sub(4);

    (0..sessions)
        .flat_map(|session| {
            let day = start + Duration::days(i64::from(session) * 2);
            let step = session.min(plateau_from) / 4;
            let base_weight = 40.0 + f64::from(step) * 2.5;
            (1..=SETS_PER_SESSION).map(move |position| {
                CompletedSeries::new(
                    exercise_id,
                    position,
                    base_weight - f64::from(position - 1) * 2.5,
                    10 - position,
                    format!("{} 18:{:02}:00", day.format("%Y-%m-%d"), position * 3),
                )
            })
        })
        .collect()
}

/// Plan of `count` exercises alternating singles, supersets, and circuits
#[must_use]
pub fn generate_plan(count: usize) -> Vec<WorkoutExercise> {
    (0..count)
        .map(|index| {
            let id = i64::try_from(index).unwrap_or(i64::MAX);
            let exercise = WorkoutExercise::new(id, format!("Exercise {index}"), 3);
            match index % 6 {
                1 => exercise.with_set_type(SetType::Superset),
                2 => exercise.with_set_type(SetType::Superset).linked(),
                3 => exercise.with_set_type(SetType::Circuit),
                4 | 5 => exercise.with_set_type(SetType::Circuit).linked(),
                _ => exercise,
            }
        })
        .collect()
}

/// History for every exercise of a plan
#[must_use]
pub fn generate_plan_history(
    plan: &[WorkoutExercise],
    size: HistorySize,
) -> HashMap<i64, Vec<CompletedSeries>> {
    plan.iter()
        .map(|exercise| (exercise.id, generate_history(exercise.id, size)))
        .collect()
}
